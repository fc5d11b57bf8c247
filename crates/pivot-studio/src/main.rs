use anyhow::Result;
use winit::dpi::LogicalSize;

use pivot_engine::canvas::{Canvas, Surface};
use pivot_engine::core::{App, AppControl, FrameCtx};
use pivot_engine::coords::Viewport;
use pivot_engine::device::GpuInit;
use pivot_engine::input::Key;
use pivot_engine::logging::{LoggingConfig, init_logging};
use pivot_engine::paint::Color;
use pivot_engine::render::QuadRenderer;
use pivot_engine::window::{Runtime, RuntimeConfig};
use pivot_shape::{ShapeRenderer, Trigger};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const BACKGROUND: Color = Color::WHITE;

/// What a key press asks the studio to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Apply(Trigger),
    Quit,
}

fn key_command(key: Key) -> Option<Command> {
    match key {
        Key::T => Some(Command::Apply(Trigger::Translate)),
        Key::R => Some(Command::Apply(Trigger::Rotate)),
        Key::F => Some(Command::Apply(Trigger::Reflect)),
        Key::Escape => Some(Command::Quit),
        _ => None,
    }
}

struct Studio {
    shapes: ShapeRenderer<Canvas>,
    quads: QuadRenderer,
}

impl Studio {
    fn new(size: Viewport) -> Self {
        let mut shapes = ShapeRenderer::new(Canvas::new(size));
        // Show the initial state before any trigger arrives.
        shapes.render();
        Self { shapes, quads: QuadRenderer::new() }
    }

    /// Runs the commands for this frame's key presses, in arrival order.
    fn handle_keys(&mut self, pressed: &[Key]) -> AppControl {
        for &key in pressed {
            match key_command(key) {
                Some(Command::Apply(trigger)) => {
                    log::info!("{trigger}");
                    self.shapes.apply(trigger);
                }
                Some(Command::Quit) => return AppControl::Exit,
                None => {}
            }
        }
        AppControl::Continue
    }
}

impl App for Studio {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();
        if viewport.is_valid() && self.shapes.surface().size() != viewport {
            self.shapes.surface_mut().resize(viewport);
        }

        if self.handle_keys(&ctx.input_frame.keys_pressed) == AppControl::Exit {
            return AppControl::Exit;
        }

        let canvas = self.shapes.surface();
        let quads = &mut self.quads;
        ctx.render(BACKGROUND, |rctx, target| {
            quads.render(rctx, target, canvas.draw_list(), BACKGROUND);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("keys: T translate, R rotate, F reflect, Esc quit");

    let studio = Studio::new(Viewport::new(WIDTH as f32, HEIGHT as f32));
    let config = RuntimeConfig {
        title: "pivot studio".to_string(),
        initial_size: LogicalSize::new(WIDTH, HEIGHT),
    };

    Runtime::run(config, GpuInit::default(), studio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(key_command(Key::T), Some(Command::Apply(Trigger::Translate)));
        assert_eq!(key_command(Key::R), Some(Command::Apply(Trigger::Rotate)));
        assert_eq!(key_command(Key::F), Some(Command::Apply(Trigger::Reflect)));
        assert_eq!(key_command(Key::Escape), Some(Command::Quit));
        assert_eq!(key_command(Key::Unknown(57)), None);
    }

    #[test]
    fn startup_paints_initial_shape() {
        let studio = Studio::new(Viewport::new(640.0, 480.0));
        assert_eq!(studio.shapes.surface().draw_list().len(), 1);
    }

    #[test]
    fn presses_apply_in_order() {
        let mut studio = Studio::new(Viewport::new(640.0, 480.0));
        let pressed = [Key::T, Key::F, Key::Unknown(57)];
        assert_eq!(studio.handle_keys(&pressed), AppControl::Continue);
        assert_eq!(studio.shapes.shape().x(), 110.0);
        assert!(studio.shapes.shape().reflected());
    }

    #[test]
    fn each_press_applies_once() {
        let mut studio = Studio::new(Viewport::new(640.0, 480.0));
        studio.handle_keys(&[Key::R, Key::R]);
        assert!((studio.shapes.shape().angle() - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
        assert_eq!(studio.shapes.surface().draw_list().len(), 1);
    }

    #[test]
    fn escape_stops_processing() {
        let mut studio = Studio::new(Viewport::new(640.0, 480.0));
        assert_eq!(studio.handle_keys(&[Key::Escape, Key::T]), AppControl::Exit);
        assert_eq!(studio.shapes.shape().x(), 100.0);
    }
}
