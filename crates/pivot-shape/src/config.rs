use std::f64::consts::FRAC_PI_6;

use anyhow::{ensure, Result};
use pivot_engine::paint::Color;

use crate::shape::Shape;

/// Renderer configuration: starting shape, operation steps, fill color.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeConfig {
    pub initial: Shape,

    /// Added to `x` by each translate.
    pub translate_step: f32,

    /// Added to the angle (radians) by each rotate.
    pub rotate_step: f64,

    pub fill: Color,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            initial: Shape::default(),
            translate_step: 10.0,
            rotate_step: FRAC_PI_6,
            fill: Color::BLUE,
        }
    }
}

impl ShapeConfig {
    /// Checks that stepping can never produce a non-finite position or angle.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.translate_step.is_finite(), "translate step must be finite, got {}", self.translate_step);
        ensure!(self.rotate_step.is_finite(), "rotate step must be finite, got {}", self.rotate_step);
        ensure!(self.fill.is_finite(), "fill color must be finite");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_constants() {
        let cfg = ShapeConfig::default();
        assert_eq!(cfg.translate_step, 10.0);
        assert!((cfg.rotate_step - std::f64::consts::PI / 6.0).abs() < 1e-12);
        assert_eq!(cfg.fill, Color::BLUE);
        assert_eq!(cfg.initial, Shape::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn non_finite_steps_are_rejected() {
        let cfg = ShapeConfig { rotate_step: f64::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());

        let cfg = ShapeConfig { translate_step: f32::INFINITY, ..Default::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("translate step"));
    }
}
