//! Arcball Camera - pointer driven orbit camera controller
//!
//! Maps 2D pointer input over a viewport onto a virtual unit sphere and turns
//! it into a smoothly damped camera orientation and distance. The host feeds
//! pointer, scroll and resize events and calls [`ArcballController::apply`]
//! once per rendered frame to write the resulting view matrix into the camera.
//!
//! # Features
//! - Trackball projection with equator clamping outside the sphere
//! - Drag rotation accumulated relative to the pointer-down orientation
//! - Exponential damping of distance and slerp damping of orientation
//! - Clamped, stepped scroll zoom
//! - Optional translation of winit window events (`winit` feature)

pub mod input;
pub mod scene;

pub use input::{ArcballEvent, PointerEvent, ResizeEvent, ScrollEvent};
pub use scene::{ArcballCamera, ArcballConfig, ArcballController, Camera, CameraUniformData};

#[cfg(feature = "winit")]
pub use input::winit::PointerTracker;

use thiserror::Error;

/// Controller error type
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ArcballError {
    #[error("Invalid viewport bounds: {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
    #[error("Invalid radius scale: {0}")]
    InvalidRadiusScale(f32),
    #[error("Invalid speed: {0} (must be in (0, 1])")]
    InvalidSpeed(f32),
    #[error("Invalid distance range: min {min} > max {max}")]
    InvalidDistanceRange { min: f32, max: f32 },
    #[error("Invalid distance step: {0}")]
    InvalidDistanceStep(f32),
}

pub type ArcballResult<T> = Result<T, ArcballError>;
