use std::fmt;

use anyhow::Result;
use pivot_engine::canvas::Surface;

use crate::config::ShapeConfig;
use crate::shape::Shape;

/// The three zero-argument operations external trigger sources can invoke.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trigger {
    Translate,
    Rotate,
    Reflect,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trigger::Translate => "translate",
            Trigger::Rotate => "rotate",
            Trigger::Reflect => "reflect",
        })
    }
}

/// Owns the shape and repaints it on a surface after every mutation.
///
/// Operations run to completion (mutate, then repaint) before returning;
/// `&mut self` rules out overlapping calls.
pub struct ShapeRenderer<S: Surface> {
    shape: Shape,
    config: ShapeConfig,
    surface: S,
}

impl<S: Surface> ShapeRenderer<S> {
    /// Renderer over `surface` with the default shape and steps.
    ///
    /// Nothing is painted until the first operation or [`render`](Self::render).
    pub fn new(surface: S) -> Self {
        let config = ShapeConfig::default();
        Self { shape: config.initial, config, surface }
    }

    pub fn with_config(surface: S, config: ShapeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { shape: config.initial, config, surface })
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Repaints the shape from scratch.
    ///
    /// Clears the whole surface, then fills the shape's local rect under
    /// translate(center) → rotate(angle mod 2π) → mirror. The transform is
    /// scoped to a saved state, so the surface is back at its prior transform
    /// however this returns.
    pub fn render(&mut self) {
        let shape = self.shape;
        let center = shape.center();

        self.surface.clear();

        let mut s = self.surface.saved();
        s.translate(center.x, center.y);
        s.rotate(shape.surface_angle());
        if shape.reflected() {
            s.scale(-1.0, 1.0);
        }
        s.set_fill_style(self.config.fill);
        s.fill_rect(shape.local_rect());
    }

    /// Moves the shape right by one step and repaints. Position is unbounded.
    pub fn translate(&mut self) {
        self.shape.shift_x(self.config.translate_step);
        log::trace!("translate: x = {}", self.shape.x());
        self.render();
    }

    /// Turns the shape clockwise by one step and repaints.
    pub fn rotate(&mut self) {
        self.shape.turn(self.config.rotate_step);
        log::trace!("rotate: angle = {}", self.shape.angle());
        self.render();
    }

    /// Toggles the horizontal mirror and repaints.
    pub fn reflect(&mut self) {
        self.shape.toggle_reflection();
        log::trace!("reflect: reflected = {}", self.shape.reflected());
        self.render();
    }

    pub fn apply(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::Translate => self.translate(),
            Trigger::Rotate => self.rotate(),
            Trigger::Reflect => self.reflect(),
        }
    }
}
