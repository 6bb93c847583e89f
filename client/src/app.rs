//! Window, input and frame loop (winit 0.30).
//!
//! Drives a [`MatchController`] at a fixed 60 Hz and renders its snapshot.

use std::sync::Arc;
use std::time::Instant;

use game_core::{LoopControl, MatchController, MatchState, Params};
use wgpu::SurfaceError;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::clock::FrameClock;
use crate::input::InputCollector;
use crate::renderer::Renderer;

pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    controller: MatchController,
    input: InputCollector,
    clock: FrameClock,
    game_over_shown: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            controller: MatchController::new(),
            input: InputCollector::new(),
            clock: FrameClock::new(Params::FRAME_RATE, Instant::now()),
            game_over_shown: false,
        }
    }

    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop, now: Instant) {
        let elapsed = self.clock.tick(now);
        let input = self.input.take();

        if self.controller.update(&input, elapsed.as_secs_f32()) == LoopControl::Exit {
            log::info!("Close requested, exiting");
            event_loop.exit();
            return;
        }

        let events = self.controller.events();
        if events.left_scored || events.right_scored {
            let score = self.controller.score();
            log::info!("Score {} - {}", score.left, score.right);
        }

        if self.controller.state() == MatchState::Over && !self.game_over_shown {
            self.game_over_shown = true;
            if let (Some(window), Some(winner)) = (&self.window, self.controller.winner()) {
                window.set_title(&format!("Pong - {winner:?} player wins"));
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };
        let snapshot = self.controller.snapshot();
        match renderer.draw(&snapshot) {
            Ok(()) => {}
            Err(SurfaceError::Lost | SurfaceError::Outdated) => renderer.recreate_surface(),
            Err(SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Skipping frame: {e}"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let config = self.controller.config();
        let attributes = Window::default_attributes()
            .with_title("Pong")
            .with_inner_size(LogicalSize::new(config.court_width, config.court_height))
            .with_resizable(false);
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone(), config)) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Renderer init failed: {e:#}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock = FrameClock::new(Params::FRAME_RATE, Instant::now());
        log::info!(
            "Controls: left player Q/A, right player P/L, Esc quits ({:?} per frame)",
            self.clock.frame_duration()
        );
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.input.request_close(),
            WindowEvent::KeyboardInput { event, .. } => {
                self.input
                    .on_key(event.physical_key, event.state.is_pressed(), event.repeat);
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }

        let now = Instant::now();
        if self.clock.is_due(now) {
            self.frame(event_loop, now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
    }
}

/// Create the event loop and run the game until the window closes
pub fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    let score = app.controller().score();
    match app.controller().winner() {
        Some(winner) => log::info!(
            "Final score {} - {}, {:?} player won",
            score.left,
            score.right,
            winner
        ),
        None => log::info!("Match abandoned at {} - {}", score.left, score.right),
    }
    Ok(())
}
