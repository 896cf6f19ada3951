//! Arcball camera controller
//!
//! Pointer positions are projected onto a virtual unit sphere centered in the
//! viewport. The rotation between the pointer-down point and the current drag
//! point becomes the orientation target; scrolling moves the distance target.
//! [`ArcballController::apply`] damps the live orientation and distance toward
//! their targets and writes the view matrix into the camera.

use glam::{Mat4, Quat, Vec2, Vec3};

use super::camera::{ArcballCamera, Camera};
use super::config::{
    validate_distance_range, validate_distance_step, validate_radius_scale, validate_speed,
    ArcballConfig,
};
use crate::input::{ArcballEvent, PointerEvent, ResizeEvent, ScrollEvent};
use crate::{ArcballError, ArcballResult};

/// Arcball orbit controller owning the camera it drives
///
/// - Pointer drag: rotate around the look-at point
/// - Scroll: step the distance target within `[distance_min, distance_max]`
/// - `apply`: once per frame, damp toward the targets and update the camera
#[derive(Debug, Clone, PartialEq)]
pub struct ArcballController<C: ArcballCamera = Camera> {
    camera: C,

    bounds_size: Vec2,
    center: Vec2,
    radius: f32,
    /// Reciprocal of the configured radius scale
    radius_scale: f32,
    speed: f32,

    distance_step: f32,
    distance: f32,
    distance_target: f32,
    distance_min: f32,
    distance_max: f32,

    pos_down: Vec2,
    pos_down_ptr: Vec3,
    pos_drag_ptr: Vec3,

    orient_curr: Quat,
    orient_down: Quat,
    orient_drag: Quat,
    orient_target: Quat,

    interactive: bool,
}

impl<C: ArcballCamera> ArcballController<C> {
    /// Create a controller with the default configuration
    pub fn new(camera: C, width: f32, height: f32) -> ArcballResult<Self> {
        Self::with_config(camera, width, height, ArcballConfig::default())
    }

    pub fn with_config(
        camera: C,
        width: f32,
        height: f32,
        config: ArcballConfig,
    ) -> ArcballResult<Self> {
        validate_bounds(width, height)?;
        config.validate()?;

        let bounds_size = Vec2::new(width, height);
        let radius_scale = 1.0 / config.radius_scale;
        let radius = sphere_radius(bounds_size, radius_scale)
            .ok_or(ArcballError::InvalidBounds { width, height })?;

        let distance = camera.distance();
        let orient_curr = Quat::from_mat4(&camera.view_matrix()).normalize();

        let controller = Self {
            camera,
            bounds_size,
            center: bounds_size * 0.5,
            radius,
            radius_scale,
            speed: config.speed,
            distance_step: config.distance_step,
            distance,
            distance_target: distance,
            distance_min: config.distance_min,
            distance_max: config.distance_max,
            pos_down: bounds_size * 0.5,
            // A drag before any press rotates relative to the sphere's front point
            pos_down_ptr: Vec3::Z,
            pos_drag_ptr: Vec3::Z,
            orient_curr,
            orient_down: orient_curr,
            orient_drag: Quat::IDENTITY,
            orient_target: orient_curr,
            interactive: config.interactive,
        };

        log::debug!(
            "Arcball controller created: bounds {}x{}, radius {}, distance {}",
            width,
            height,
            controller.radius,
            distance
        );

        Ok(controller)
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn into_camera(self) -> C {
        self.camera
    }

    pub fn bounds_size(&self) -> Vec2 {
        self.bounds_size
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Projected radius of the virtual sphere in pixels
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_distance_min(&mut self, min: f32) {
        self.distance_min = min;
    }

    pub fn set_distance_max(&mut self, max: f32) {
        self.distance_max = max;
    }

    pub fn set_distance_range(&mut self, min: f32, max: f32) -> ArcballResult<()> {
        validate_distance_range(min, max).inspect_err(|e| log::warn!("{e}"))?;
        self.distance_min = min;
        self.distance_max = max;
        Ok(())
    }

    pub fn distance_min(&self) -> f32 {
        self.distance_min
    }

    pub fn distance_max(&self) -> f32 {
        self.distance_max
    }

    /// Set the distance target. Not clamped; the live distance follows on `apply`.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance_target = distance;
    }

    /// Live distance applied to the camera
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn distance_target(&self) -> f32 {
        self.distance_target
    }

    pub fn set_distance_step(&mut self, step: f32) -> ArcballResult<()> {
        validate_distance_step(step).inspect_err(|e| log::warn!("{e}"))?;
        self.distance_step = step;
        Ok(())
    }

    pub fn distance_step(&self) -> f32 {
        self.distance_step
    }

    /// Set the ratio of the smaller viewport side to the sphere radius
    pub fn set_radius_scale(&mut self, scale: f32) -> ArcballResult<()> {
        validate_radius_scale(scale).inspect_err(|e| log::warn!("{e}"))?;
        let radius_scale = 1.0 / scale;
        self.radius = sphere_radius(self.bounds_size, radius_scale)
            .ok_or(ArcballError::InvalidRadiusScale(scale))
            .inspect_err(|e| log::warn!("{e}"))?;
        self.radius_scale = radius_scale;
        Ok(())
    }

    pub fn radius_scale(&self) -> f32 {
        1.0 / self.radius_scale
    }

    pub fn set_speed(&mut self, speed: f32) -> ArcballResult<()> {
        validate_speed(speed).inspect_err(|e| log::warn!("{e}"))?;
        self.speed = speed;
        Ok(())
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn enable(&mut self) {
        self.interactive = true;
    }

    pub fn disable(&mut self) {
        self.interactive = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.interactive
    }

    /// Live orientation applied to the camera
    pub fn orientation(&self) -> Quat {
        self.orient_curr
    }

    pub fn orientation_target(&self) -> Quat {
        self.orient_target
    }

    /// Raw position of the last pointer-down (origin top-left)
    pub fn pointer_down_position(&self) -> Vec2 {
        self.pos_down
    }

    /// Project a point with bottom-left origin onto the virtual unit sphere.
    ///
    /// Points outside the projected sphere are pulled onto its equator.
    pub fn map_sphere(&self, pos: Vec2) -> Vec3 {
        let dir = if self.distance < 0.0 { -1.0 } else { 1.0 };
        let pos = (pos - self.center) / self.radius;
        let mut point = Vec3::new(pos.x, pos.y * dir, 0.0);

        let len = point.length_squared();
        if len > 1.0 {
            point = point.normalize();
        } else {
            point.z = (1.0 - len).sqrt();
        }
        point
    }

    /// Flip a top-left origin pointer position to bottom-left origin
    fn flip_y(&self, event: &PointerEvent) -> Vec2 {
        Vec2::new(event.x, self.bounds_size.y - event.y)
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        if !self.interactive {
            return;
        }
        self.pos_down = event.position();
        self.pos_down_ptr = self.map_sphere(self.flip_y(event));
        self.orient_down = self.orient_curr;
        self.orient_drag = Quat::IDENTITY;

        log::trace!("Arcball pointer down at {:?} -> {:?}", self.pos_down, self.pos_down_ptr);
    }

    pub fn on_pointer_drag(&mut self, event: &PointerEvent) {
        if !self.interactive {
            return;
        }
        self.pos_drag_ptr = self.map_sphere(self.flip_y(event));

        // Rotation between two unit vectors, left unnormalized
        let axis = self.pos_down_ptr.cross(self.pos_drag_ptr);
        let w = self.pos_down_ptr.dot(self.pos_drag_ptr);
        self.orient_drag = Quat::from_xyzw(axis.x, axis.y, axis.z, w);
        self.orient_target = self.orient_drag * self.orient_down;

        log::trace!("Arcball drag to {:?}", self.pos_drag_ptr);
    }

    pub fn on_pointer_up(&mut self, _event: &PointerEvent) {
        if !self.interactive {
            return;
        }
    }

    pub fn on_scroll(&mut self, event: &ScrollEvent) {
        if !self.interactive {
            return;
        }
        let direction = event.direction();
        if direction == 0.0 {
            return;
        }
        let target = self.distance_target - direction * self.distance_step;
        self.distance_target = target.min(self.distance_max).max(self.distance_min);

        log::trace!("Arcball scroll: distance target {}", self.distance_target);
    }

    /// Report a viewport size change. Rejects sizes that would make the radius zero.
    pub fn on_window_resize(&mut self, event: &ResizeEvent) -> ArcballResult<()> {
        validate_bounds(event.width, event.height).inspect_err(|e| log::warn!("{e}"))?;

        let bounds_size = Vec2::new(event.width, event.height);
        self.radius = sphere_radius(bounds_size, self.radius_scale)
            .ok_or(ArcballError::InvalidBounds {
                width: event.width,
                height: event.height,
            })
            .inspect_err(|e| log::warn!("{e}"))?;
        self.bounds_size = bounds_size;
        self.center = bounds_size * 0.5;

        log::debug!(
            "Arcball resized to {}x{}, radius {}",
            event.width,
            event.height,
            self.radius
        );
        Ok(())
    }

    /// Dispatch an event record to the matching handler
    pub fn handle_event(&mut self, event: &ArcballEvent) -> ArcballResult<()> {
        match event {
            ArcballEvent::PointerDown(e) => self.on_pointer_down(e),
            ArcballEvent::PointerDrag(e) => self.on_pointer_drag(e),
            ArcballEvent::PointerUp(e) => self.on_pointer_up(e),
            ArcballEvent::Scroll(e) => self.on_scroll(e),
            ArcballEvent::Resize(e) => return self.on_window_resize(e),
        }
        Ok(())
    }

    /// Advance one frame toward the targets and write the view matrix.
    ///
    /// The damping is per call, so call this once per display refresh.
    pub fn apply(&mut self) {
        self.distance += (self.distance_target - self.distance) * self.speed;
        self.orient_curr = self.orient_curr.slerp(self.orient_target, self.speed);

        let rotation = Mat4::from_quat(self.orient_curr);
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance)) * rotation;
        self.camera.set_view_matrix(view);
    }
}

/// Sphere radius in pixels, or `None` if it would underflow to zero or overflow
fn sphere_radius(bounds_size: Vec2, radius_scale: f32) -> Option<f32> {
    let radius = bounds_size.x.min(bounds_size.y) * radius_scale;
    (radius.is_finite() && radius > 0.0).then_some(radius)
}

fn validate_bounds(width: f32, height: f32) -> ArcballResult<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(ArcballError::InvalidBounds { width, height })
    }
}
