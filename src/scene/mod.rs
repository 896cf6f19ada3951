//! Scene-side camera types and the arcball controller

mod arcball;
mod camera;
mod config;

pub use arcball::*;
pub use camera::*;
pub use config::*;
