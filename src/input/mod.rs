//! Plain input event records consumed by the controller
//!
//! Hosts translate whatever their windowing layer delivers into these records.
//! Pointer coordinates use a top-left origin in viewport pixels.

#[cfg(feature = "winit")]
pub mod winit;

use glam::Vec2;

/// Pointer position over the viewport (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Scroll wheel delta; only the sign is used
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollEvent {
    pub dy: f32,
}

impl ScrollEvent {
    pub fn new(dy: f32) -> Self {
        Self { dy }
    }

    /// Discrete scroll direction: -1, 0 or 1
    pub fn direction(&self) -> f32 {
        if self.dy < 0.0 {
            -1.0
        } else if self.dy > 0.0 {
            1.0
        } else {
            0.0
        }
    }
}

/// New viewport size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeEvent {
    pub width: f32,
    pub height: f32,
}

impl ResizeEvent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Any event the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcballEvent {
    PointerDown(PointerEvent),
    PointerDrag(PointerEvent),
    PointerUp(PointerEvent),
    Scroll(ScrollEvent),
    Resize(ResizeEvent),
}
