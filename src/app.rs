//! Window, event loop and frame driver
//!
//! One frame: apply queued input events, derive paddle velocities from
//! the button table, advance the paddles by the previous frame's
//! elapsed time, draw net/ball/paddles/scores, present, and measure
//! this frame's duration in milliseconds for the next one.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::Config;
use crate::consts::{FONT_PATH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::{InputState, KeyAction, classify_key};
use crate::renderer::vertex::colors;
use crate::renderer::{RenderState, ScoreDisplay, load_font, shapes};
use crate::sim::{Ball, Paddle};

/// Run the game loop until quit. Returns after the window closes or
/// with the initialization error that prevented it from opening.
pub fn run() -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;

    let mut app = App::new(Config::default());
    event_loop.run_app(&mut app).context("event loop error")?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Renderer-bound state, created once the window exists
struct Gfx {
    renderer: RenderState,
    score_one: ScoreDisplay,
    score_two: ScoreDisplay,
}

/// The frame driver: owns every entity plus input and timing state
struct App {
    config: Config,
    ball: Ball,
    paddle_one: Paddle,
    paddle_two: Paddle,
    input: InputState,
    /// Duration of the previous frame in milliseconds; the first frame
    /// integrates with 0
    dt: f32,
    window: Option<Arc<Window>>,
    gfx: Option<Gfx>,
    /// Initialization failure, reported by `run` after the loop exits
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            ball: Ball::centered(&config),
            paddle_one: Paddle::left(&config),
            paddle_two: Paddle::right(&config),
            input: InputState::default(),
            dt: 0.0,
            window: None,
            gfx: None,
            fatal: None,
            config,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("Duo Pong")
            .with_inner_size(PhysicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let renderer = RenderState::new(
            window.clone(),
            (self.config.screen_width, self.config.screen_height),
        )?;

        let font = load_font(Path::new(FONT_PATH))?;
        let score_one = ScoreDisplay::new(
            Vec2::new(self.config.screen_width / 4.0, 20.0),
            "0",
            &font,
            &renderer,
        )?;
        let score_two = ScoreDisplay::new(
            Vec2::new(3.0 * self.config.screen_width / 4.0, 20.0),
            "0",
            &font,
            &renderer,
        )?;

        log::info!("window and renderer initialized");

        self.window = Some(window);
        self.gfx = Some(Gfx {
            renderer,
            score_one,
            score_two,
        });
        Ok(())
    }

    /// One iteration of the loop: velocities from input, integrate,
    /// draw, present, measure.
    fn frame(&mut self) {
        let start = Instant::now();

        let speed = self.config.paddle_speed;
        self.paddle_one.velocity = self.input.paddle_one_velocity(speed);
        self.paddle_two.velocity = self.input.paddle_two_velocity(speed);

        self.paddle_one.update(self.dt);
        self.paddle_two.update(self.dt);

        let Some(gfx) = &mut self.gfx else { return };

        let mut vertices = shapes::net(SCREEN_WIDTH, SCREEN_HEIGHT, colors::FOREGROUND);
        vertices.extend(shapes::fill_rect(&self.ball.rect(), colors::FOREGROUND));
        vertices.extend(shapes::fill_rect(&self.paddle_one.rect(), colors::FOREGROUND));
        vertices.extend(shapes::fill_rect(&self.paddle_two.rect(), colors::FOREGROUND));

        match gfx
            .renderer
            .render(&vertices, &[&gfx.score_one, &gfx.score_two])
        {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let (w, h) = gfx.renderer.size;
                gfx.renderer.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => log::error!("out of GPU memory"),
            Err(err) => log::warn!("render error: {err:?}"),
        }

        self.dt = start.elapsed().as_secs_f32() * 1000.0;
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Err(err) = self.init(event_loop) {
            log::error!("initialization failed: {err:#}");
            self.fatal = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("quit requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match classify_key(code, event.state.is_pressed()) {
                        KeyAction::Quit => {
                            log::info!("quit requested");
                            event_loop.exit();
                        }
                        KeyAction::Button(button, held) => self.input.set(button, held),
                        KeyAction::Ignore => {}
                    }
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(gfx) = &mut self.gfx {
                    gfx.renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
