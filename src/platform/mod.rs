//! Window, input and present loop (winit 0.30).
//!
//! `run()` opens the window, owns the [`Game`], turns mouse and keyboard
//! input into [`Action`]s, and redraws the whole scene every frame.

mod renderer;

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowAttributes, WindowId},
};

pub use renderer::Renderer;

use crate::core::GameConfig;
use crate::draw::{draw_game, Canvas};
use crate::game::{Action, Game};
use crate::layout::Layout;

struct App {
    config: GameConfig,
    game: Game,
    canvas: Canvas,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    cursor: Option<PhysicalPosition<f64>>,
    frame_interval: Duration,
    next_frame: Instant,
}

impl App {
    fn new(config: GameConfig, game: Game) -> Self {
        let frame_interval = Duration::from_secs_f64(1.0 / f64::from(config.fps));
        Self {
            config,
            game,
            canvas: Canvas::new(),
            window: None,
            renderer: None,
            cursor: None,
            frame_interval,
            next_frame: Instant::now(),
        }
    }

    fn dispatch(&mut self, action: Action) {
        match self.game.apply(action) {
            Ok(outcome) => log::trace!("{action:?} -> {outcome:?}"),
            Err(e) => log::warn!("{action:?} ignored: {e}"),
        }
    }

    fn click(&mut self, button: MouseButton, surface: PhysicalSize<u32>) {
        if button != MouseButton::Left {
            self.dispatch(Action::ClearSelection);
            return;
        }
        let Some(cursor) = self.cursor else {
            return;
        };
        let (x, y) = to_logical(cursor, surface, &self.config);
        let layout = Layout::new(&self.config, self.game.table().len());
        match layout.hit_test(x, y) {
            Some(index) => self.dispatch(Action::Choose(index)),
            None => log::debug!("click at ({x:.0}, {y:.0}) hit no card"),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        self.canvas.clear();
        draw_game(&mut self.canvas, &self.game);
        renderer.upload(self.canvas.vertices());
        match renderer.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.size();
                renderer.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e:?}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = WindowAttributes::default()
            .with_title("Set")
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("cannot create window: {e}");
                event_loop.exit();
                return;
            }
        };
        let logical = (self.config.window_width, self.config.window_height);
        match pollster::block_on(Renderer::new(window.clone(), logical)) {
            Ok(renderer) => {
                self.renderer = Some(renderer);
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("renderer init failed: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window.id() != window_id {
            return;
        }
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor = Some(position),
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => self.click(button, window.inner_size()),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    event_loop.exit();
                } else if let Some(action) = key_action(event.logical_key.as_ref()) {
                    self.dispatch(action);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame = now + self.frame_interval;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

/// Keyboard shortcuts: Space deals extra cards, T logs the table, H hints.
fn key_action(key: Key<&str>) -> Option<Action> {
    match key {
        Key::Named(NamedKey::Space) => Some(Action::DealExtra),
        Key::Character(c) if c.eq_ignore_ascii_case("t") => Some(Action::LogTable),
        Key::Character(c) if c.eq_ignore_ascii_case("h") => Some(Action::Hint),
        _ => None,
    }
}

/// Map a cursor position on the surface to layout coordinates.
fn to_logical(
    cursor: PhysicalPosition<f64>,
    surface: PhysicalSize<u32>,
    config: &GameConfig,
) -> (f32, f32) {
    let sx = f64::from(config.window_width) / f64::from(surface.width.max(1));
    let sy = f64::from(config.window_height) / f64::from(surface.height.max(1));
    ((cursor.x * sx) as f32, (cursor.y * sy) as f32)
}

/// Open the window and play until it is closed.
pub fn run(config: GameConfig) -> anyhow::Result<()> {
    let game = Game::new(config.clone())?;
    if let Some(seed) = game.seed() {
        log::info!("replay this deal with --seed {seed}");
    }
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, game);
    event_loop.run_app(&mut app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(key_action(Key::Named(NamedKey::Space)), Some(Action::DealExtra));
        assert_eq!(key_action(Key::Character("t")), Some(Action::LogTable));
        assert_eq!(key_action(Key::Character("T")), Some(Action::LogTable));
        assert_eq!(key_action(Key::Character("h")), Some(Action::Hint));
        assert_eq!(key_action(Key::Character("x")), None);
        assert_eq!(key_action(Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn cursor_scales_to_layout() {
        let config = GameConfig::default();
        let hidpi = PhysicalSize::new(2560, 1440);
        let (x, y) = to_logical(PhysicalPosition::new(1000.0, 500.0), hidpi, &config);
        assert_eq!((x, y), (500.0, 250.0));

        let native = PhysicalSize::new(1280, 720);
        let (x, y) = to_logical(PhysicalPosition::new(10.0, 20.0), native, &config);
        assert_eq!((x, y), (10.0, 20.0));
    }
}
