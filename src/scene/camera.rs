//! Camera collaborator

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Camera that an [`ArcballController`](super::ArcballController) can drive.
///
/// The controller reads the distance and view matrix once at construction and
/// afterwards only writes the view matrix.
pub trait ArcballCamera {
    /// Distance from the eye to the orbit center along the view axis
    fn distance(&self) -> f32;

    /// Current world-to-view matrix
    fn view_matrix(&self) -> Mat4;

    /// Replace the world-to-view matrix
    fn set_view_matrix(&mut self, view: Mat4);
}

/// Camera described directly by its view matrix
///
/// The orbit center is the world origin, so [`ArcballCamera::distance`] is the
/// origin's depth in view space and always agrees with the current view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    view: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl Camera {
    /// Camera on the +Z axis at `distance`, looking at the origin
    pub fn new(distance: f32) -> Self {
        Self {
            view: Mat4::from_translation(Vec3::new(0.0, 0.0, -distance)),
        }
    }

    /// Camera at `position` looking at `target`
    ///
    /// An arcball controller orbits the world origin, so `target` should be
    /// the origin for the eye to stay on the orbit sphere.
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            view: Mat4::look_at_rh(position, target, up),
        }
    }

    /// Eye position in world space
    pub fn position(&self) -> Vec3 {
        self.view.inverse().w_axis.truncate()
    }

    /// Get the forward direction (view -Z in world space)
    pub fn forward(&self) -> Vec3 {
        self.view.inverse().transform_vector3(-Vec3::Z).normalize()
    }

    /// Get the right direction
    pub fn right(&self) -> Vec3 {
        self.view.inverse().transform_vector3(Vec3::X).normalize()
    }

    /// Get the up direction
    pub fn up(&self) -> Vec3 {
        self.view.inverse().transform_vector3(Vec3::Y).normalize()
    }

    /// Build camera uniform data for shaders
    pub fn uniform_data(&self) -> CameraUniformData {
        CameraUniformData {
            view: self.view,
            inv_view: self.view.inverse(),
            position: self.position().extend(1.0),
        }
    }
}

impl ArcballCamera for Camera {
    fn distance(&self) -> f32 {
        -self.view.w_axis.z
    }

    fn view_matrix(&self) -> Mat4 {
        self.view
    }

    fn set_view_matrix(&mut self, view: Mat4) {
        self.view = view;
    }
}

/// Camera uniform data for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniformData {
    pub view: Mat4,
    pub inv_view: Mat4,
    pub position: Vec4,
}
