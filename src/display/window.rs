// Window module - presents emulator frames in a host window.
//
// A winit application owns the running emulator and a pixels surface. Guest
// frames are paced against a deadline derived from the configured frame
// rate: each time the deadline passes, one frame is emulated, converted to
// RGBA and rendered.

use super::framebuffer::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::cpu::CpuError;
use crate::debug::Logger;
use crate::emulator::{Emulator, EmulatorConfig};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Presentation options for the host window.
#[derive(Debug, Clone, Copy)]
pub struct VideoOptions {
    /// Integer upscaling factor applied to the 256x240 guest output
    pub scale: u32,

    /// Time between guest frames; one frame is emulated per tick
    pub frame_interval: Duration,

    /// Park the event loop until the next deadline instead of spinning
    pub wait_between_frames: bool,
}

impl VideoOptions {
    /// Derive presentation options from the emulator configuration.
    /// Degenerate values (zero scale or frame rate) are raised to one.
    pub fn from_config(config: &EmulatorConfig) -> Self {
        VideoOptions {
            scale: config.video.scale.max(1),
            frame_interval: Duration::from_secs_f64(1.0 / config.video.fps.max(1) as f64),
            wait_between_frames: config.video.vsync,
        }
    }

    /// Pixel dimensions of the scaled output surface.
    pub fn surface_size(&self) -> (u32, u32) {
        (
            SCREEN_WIDTH as u32 * self.scale,
            SCREEN_HEIGHT as u32 * self.scale,
        )
    }
}

/// The native window together with its pixel surface.
struct Surface {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

/// winit application driving the emulator.
struct HostApp {
    options: VideoOptions,
    emulator: Emulator,
    trace_logger: Option<Logger>,
    surface: Option<Surface>,
    next_frame_at: Instant,
}

impl HostApp {
    /// Emulate up to the next frame flip, tracing each instruction when a
    /// trace logger is attached.
    fn run_guest_frame(&mut self) -> Result<(), CpuError> {
        match &mut self.trace_logger {
            Some(logger) => {
                while !self.emulator.frame_ready() {
                    let line = self.emulator.trace_line();
                    logger.trace(&line);
                    self.emulator.step()?;
                }
                self.emulator.clear_frame_ready();
                Ok(())
            }
            None => self.emulator.run_frame(),
        }
    }

    /// Convert the finished framebuffer to RGBA and render it.
    fn present(&mut self) -> Result<(), pixels::Error> {
        if let Some(surface) = &mut self.surface {
            self.emulator.frame().to_rgba(surface.pixels.frame_mut());
            surface.pixels.render()?;
        }
        Ok(())
    }
}

impl ApplicationHandler for HostApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }

        let (width, height) = self.options.surface_size();
        let attributes = Window::default_attributes()
            .with_title("ferricom")
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .expect("window creation failed"),
        );
        let inner = window.inner_size();
        let texture = SurfaceTexture::new(inner.width, inner.height, window.clone());
        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, texture)
            .expect("pixel surface creation failed");

        self.surface = Some(Surface { window, pixels });
        self.next_frame_at = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if now < self.next_frame_at {
                    return;
                }

                if let Err(err) = self.run_guest_frame() {
                    eprintln!("emulation halted: {}", err);
                    event_loop.exit();
                    return;
                }
                if let Err(err) = self.present() {
                    eprintln!("render error: {}", err);
                    event_loop.exit();
                    return;
                }

                self.next_frame_at += self.options.frame_interval;
                if self.next_frame_at < now {
                    // Fell behind (window hidden, debugger stop); resync
                    // rather than bursting the missed frames
                    self.next_frame_at = now + self.options.frame_interval;
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(surface) = &self.surface else {
            return;
        };

        if self.options.wait_between_frames {
            // Sleep until the deadline; redraw only once it has passed
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame_at));
            if Instant::now() >= self.next_frame_at {
                surface.window.request_redraw();
            }
        } else {
            surface.window.request_redraw();
        }
    }
}

/// Open the window and drive the emulator until the user closes it.
pub fn run_display(
    options: VideoOptions,
    emulator: Emulator,
    trace_logger: Option<Logger>,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = HostApp {
        options,
        emulator,
        trace_logger,
        surface: None,
        next_frame_at: Instant::now(),
    };
    event_loop.run_app(&mut app)?;

    Ok(())
}
