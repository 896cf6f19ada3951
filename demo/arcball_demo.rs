//! Arcball controller demo
//!
//! Run with:
//!   cargo run --example arcball_demo
//!   cargo run --example arcball_demo -- --speed 0.2 --radius-scale 1.5
//!
//! Controls:
//!   Left Mouse - Rotate
//!   Scroll     - Zoom
//!   Space      - Toggle input handling
//!   Escape     - Exit
//!
//! Nothing is rendered; the window title shows the live eye position.

use arcball_camera::{ArcballConfig, ArcballController, Camera, PointerTracker};
use clap::Parser;
use glam::Vec3;
use std::time::{Duration, Instant};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

/// Redraw pacing; `apply` damps once per frame
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Arcball camera controller demo
#[derive(Parser, Debug)]
#[command(name = "arcball_demo", version)]
struct Args {
    /// Damping factor per frame, in (0, 1].
    #[arg(long, default_value = "0.095")]
    speed: f32,

    /// Ratio of the smaller window side to the virtual sphere radius.
    #[arg(long, default_value = "2.25")]
    radius_scale: f32,

    /// Distance change per scroll tick.
    #[arg(long, default_value = "0.25")]
    distance_step: f32,

    /// Closest allowed zoom distance.
    #[arg(long, default_value = "1.0")]
    min_distance: f32,

    /// Farthest allowed zoom distance.
    #[arg(long, default_value = "50.0")]
    max_distance: f32,

    /// Initial window width in pixels.
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Initial window height in pixels.
    #[arg(long, default_value = "720")]
    height: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = ArcballConfig::default()
        .with_speed(args.speed)
        .with_radius_scale(args.radius_scale)
        .with_distance_step(args.distance_step)
        .with_distance_range(args.min_distance, args.max_distance);

    let camera = Camera::look_at(Vec3::new(0.0, 2.0, 8.0), Vec3::ZERO, Vec3::Y);
    let mut controller = match ArcballController::with_config(
        camera,
        args.width as f32,
        args.height as f32,
        config,
    ) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("Invalid arguments: {e}");
            std::process::exit(1);
        }
    };

    println!("Controls:");
    println!("  Left Mouse - Rotate");
    println!("  Scroll     - Zoom");
    println!("  Space      - Toggle input handling");
    println!("  Escape     - Exit");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let window = WindowBuilder::new()
        .with_title("Arcball Demo")
        .with_inner_size(PhysicalSize::new(args.width, args.height))
        .build(&event_loop)
        .expect("Failed to create window");

    let mut tracker = PointerTracker::new();
    let mut frame: u64 = 0;
    let mut next_frame = Instant::now();

    event_loop
        .run(move |event, elwt: &EventLoopWindowTarget<()>| {
            match event {
                Event::WindowEvent { event, .. } => {
                    if let Some(arcball_event) = tracker.translate(&event) {
                        if let Err(e) = controller.handle_event(&arcball_event) {
                            log::warn!("Ignoring event {arcball_event:?}: {e}");
                        }
                    }

                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::RedrawRequested => {
                            controller.apply();
                            frame += 1;

                            if frame % 30 == 0 {
                                let eye = controller.camera().position();
                                window.set_title(&format!(
                                    "Arcball Demo - eye ({:.2}, {:.2}, {:.2}) distance {:.2}",
                                    eye.x,
                                    eye.y,
                                    eye.z,
                                    controller.distance()
                                ));
                            }
                        }
                        WindowEvent::KeyboardInput { event, .. }
                            if event.state == ElementState::Pressed =>
                        {
                            match event.physical_key {
                                PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                                PhysicalKey::Code(KeyCode::Space) => {
                                    if controller.is_enabled() {
                                        controller.disable();
                                    } else {
                                        controller.enable();
                                    }
                                    log::info!(
                                        "Input handling enabled: {}",
                                        controller.is_enabled()
                                    );
                                }
                                _ => {}
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    let now = Instant::now();
                    if now >= next_frame {
                        window.request_redraw();
                        next_frame = now + FRAME_INTERVAL;
                    }
                    elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
                }
                _ => {}
            }
        })
        .expect("Event loop failed");
}
