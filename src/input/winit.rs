//! Translation of winit window events into [`ArcballEvent`]s

use ::winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use glam::Vec2;

use super::{ArcballEvent, PointerEvent, ResizeEvent, ScrollEvent};

/// Tracks cursor position and left button state across window events.
///
/// winit reports cursor motion and button presses as separate events, so the
/// tracker remembers the last cursor position to attach it to presses and
/// only reports motion as a drag while the button is held.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    cursor: Vec2,
    pressed: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Translate a window event, if the controller cares about it
    pub fn translate(&mut self, event: &WindowEvent) -> Option<ArcballEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.button(*state == ElementState::Pressed),
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.wheel(*y),
                MouseScrollDelta::PixelDelta(p) => self.wheel(p.y as f32),
            },
            WindowEvent::Resized(size) => self.resized(size.width, size.height),
            _ => None,
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<ArcballEvent> {
        self.cursor = Vec2::new(x, y);
        if self.pressed {
            Some(ArcballEvent::PointerDrag(self.pointer()))
        } else {
            None
        }
    }

    pub fn button(&mut self, pressed: bool) -> Option<ArcballEvent> {
        if pressed == self.pressed {
            return None;
        }
        self.pressed = pressed;

        if pressed {
            Some(ArcballEvent::PointerDown(self.pointer()))
        } else {
            Some(ArcballEvent::PointerUp(self.pointer()))
        }
    }

    pub fn wheel(&mut self, dy: f32) -> Option<ArcballEvent> {
        if dy == 0.0 {
            return None;
        }
        Some(ArcballEvent::Scroll(ScrollEvent::new(dy)))
    }

    /// Minimized windows report a zero size, which is not a usable viewport
    pub fn resized(&mut self, width: u32, height: u32) -> Option<ArcballEvent> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(ArcballEvent::Resize(ResizeEvent::new(
            width as f32,
            height as f32,
        )))
    }

    fn pointer(&self) -> PointerEvent {
        PointerEvent::new(self.cursor.x, self.cursor.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::winit::dpi::{PhysicalPosition, PhysicalSize};
    use ::winit::event::{DeviceId, TouchPhase};

    #[test]
    fn motion_without_press_is_ignored() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.cursor_moved(10.0, 20.0), None);
        assert_eq!(tracker.cursor(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn press_drag_release_sequence() {
        let mut tracker = PointerTracker::new();
        tracker.cursor_moved(10.0, 20.0);

        assert_eq!(
            tracker.button(true),
            Some(ArcballEvent::PointerDown(PointerEvent::new(10.0, 20.0)))
        );
        assert!(tracker.is_pressed());
        assert_eq!(
            tracker.cursor_moved(15.0, 25.0),
            Some(ArcballEvent::PointerDrag(PointerEvent::new(15.0, 25.0)))
        );
        assert_eq!(
            tracker.button(false),
            Some(ArcballEvent::PointerUp(PointerEvent::new(15.0, 25.0)))
        );
        assert_eq!(tracker.cursor_moved(30.0, 30.0), None);
    }

    #[test]
    fn repeated_button_state_is_ignored() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.button(false), None);
        assert!(tracker.button(true).is_some());
        assert_eq!(tracker.button(true), None);
    }

    #[test]
    fn wheel_and_resize_filtering() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.wheel(0.0), None);
        assert_eq!(
            tracker.wheel(-1.0),
            Some(ArcballEvent::Scroll(ScrollEvent::new(-1.0)))
        );
        assert_eq!(tracker.resized(0, 600), None);
        assert_eq!(
            tracker.resized(800, 600),
            Some(ArcballEvent::Resize(ResizeEvent::new(800.0, 600.0)))
        );
    }

    fn device_id() -> DeviceId {
        // SAFETY: the id is only compared against, never passed to the platform
        unsafe { DeviceId::dummy() }
    }

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device_id(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn mouse_input(state: ElementState, button: MouseButton) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device_id(),
            state,
            button,
        }
    }

    fn mouse_wheel(delta: MouseScrollDelta) -> WindowEvent {
        WindowEvent::MouseWheel {
            device_id: device_id(),
            delta,
            phase: TouchPhase::Moved,
        }
    }

    #[test]
    fn translate_left_button_drag() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.translate(&cursor_moved(10.0, 20.0)), None);
        assert_eq!(
            tracker.translate(&mouse_input(ElementState::Pressed, MouseButton::Left)),
            Some(ArcballEvent::PointerDown(PointerEvent::new(10.0, 20.0)))
        );
        assert_eq!(
            tracker.translate(&cursor_moved(40.5, 60.0)),
            Some(ArcballEvent::PointerDrag(PointerEvent::new(40.5, 60.0)))
        );
        assert_eq!(
            tracker.translate(&mouse_input(ElementState::Released, MouseButton::Left)),
            Some(ArcballEvent::PointerUp(PointerEvent::new(40.5, 60.0)))
        );
    }

    #[test]
    fn translate_ignores_other_buttons() {
        let mut tracker = PointerTracker::new();
        tracker.translate(&cursor_moved(10.0, 20.0));
        assert_eq!(
            tracker.translate(&mouse_input(ElementState::Pressed, MouseButton::Right)),
            None
        );
        assert!(!tracker.is_pressed());
        assert_eq!(tracker.translate(&cursor_moved(30.0, 20.0)), None);
        assert_eq!(
            tracker.translate(&mouse_input(ElementState::Released, MouseButton::Middle)),
            None
        );
    }

    #[test]
    fn translate_wheel_deltas() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.translate(&mouse_wheel(MouseScrollDelta::LineDelta(0.0, 1.0))),
            Some(ArcballEvent::Scroll(ScrollEvent::new(1.0)))
        );
        assert_eq!(
            tracker.translate(&mouse_wheel(MouseScrollDelta::PixelDelta(
                PhysicalPosition::new(0.0, -3.0)
            ))),
            Some(ArcballEvent::Scroll(ScrollEvent::new(-3.0)))
        );
        // Horizontal-only scrolling does not zoom
        assert_eq!(
            tracker.translate(&mouse_wheel(MouseScrollDelta::LineDelta(2.0, 0.0))),
            None
        );
    }

    #[test]
    fn translate_resized() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.translate(&WindowEvent::Resized(PhysicalSize::new(1280, 720))),
            Some(ArcballEvent::Resize(ResizeEvent::new(1280.0, 720.0)))
        );
        assert_eq!(
            tracker.translate(&WindowEvent::Resized(PhysicalSize::new(0, 0))),
            None
        );
        assert_eq!(tracker.translate(&WindowEvent::Focused(true)), None);
    }
}
