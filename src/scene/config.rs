//! Arcball controller configuration

use crate::{ArcballError, ArcballResult};

pub const DEFAULT_RADIUS_SCALE: f32 = 2.25;
pub const DEFAULT_SPEED: f32 = 0.095;
pub const DEFAULT_DISTANCE_STEP: f32 = 0.25;

/// Configuration for an [`ArcballController`](super::ArcballController)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcballConfig {
    /// Ratio of the smaller viewport side to the virtual sphere radius
    pub radius_scale: f32,
    /// Fraction of the remaining distance to target covered per `apply`
    pub speed: f32,
    /// Distance change per scroll tick
    pub distance_step: f32,
    /// Lower clamp for the scroll distance target
    pub distance_min: f32,
    /// Upper clamp for the scroll distance target
    pub distance_max: f32,
    /// Whether pointer and scroll input is handled
    pub interactive: bool,
}

impl Default for ArcballConfig {
    fn default() -> Self {
        Self {
            radius_scale: DEFAULT_RADIUS_SCALE,
            speed: DEFAULT_SPEED,
            distance_step: DEFAULT_DISTANCE_STEP,
            distance_min: f32::MIN_POSITIVE,
            distance_max: f32::MAX,
            interactive: true,
        }
    }
}

impl ArcballConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius_scale(mut self, scale: f32) -> Self {
        self.radius_scale = scale;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_distance_step(mut self, step: f32) -> Self {
        self.distance_step = step;
        self
    }

    /// Set the allowed distance target range
    pub fn with_distance_range(mut self, min: f32, max: f32) -> Self {
        self.distance_min = min;
        self.distance_max = max;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Check every field against the range the controller accepts
    pub fn validate(&self) -> ArcballResult<()> {
        validate_radius_scale(self.radius_scale)?;
        validate_speed(self.speed)?;
        validate_distance_step(self.distance_step)?;
        validate_distance_range(self.distance_min, self.distance_max)
    }
}

pub(crate) fn validate_radius_scale(scale: f32) -> ArcballResult<()> {
    // The controller stores the reciprocal, which overflows for subnormal scales
    if scale.is_finite() && scale > 0.0 && (1.0 / scale).is_finite() {
        Ok(())
    } else {
        Err(ArcballError::InvalidRadiusScale(scale))
    }
}

pub(crate) fn validate_speed(speed: f32) -> ArcballResult<()> {
    if speed > 0.0 && speed <= 1.0 {
        Ok(())
    } else {
        Err(ArcballError::InvalidSpeed(speed))
    }
}

pub(crate) fn validate_distance_step(step: f32) -> ArcballResult<()> {
    if step.is_finite() && step >= 0.0 {
        Ok(())
    } else {
        Err(ArcballError::InvalidDistanceStep(step))
    }
}

pub(crate) fn validate_distance_range(min: f32, max: f32) -> ArcballResult<()> {
    // NaN on either side fails the comparison as well
    if min <= max {
        Ok(())
    } else {
        Err(ArcballError::InvalidDistanceRange { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ArcballConfig::default();
        assert_eq!(config.radius_scale, 2.25);
        assert_eq!(config.speed, 0.095);
        assert_eq!(config.distance_step, 0.25);
        assert!(config.interactive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_set_fields() {
        let config = ArcballConfig::new()
            .with_radius_scale(2.0)
            .with_speed(0.5)
            .with_distance_step(1.0)
            .with_distance_range(1.0, 20.0)
            .with_interactive(false);
        assert_eq!(config.radius_scale, 2.0);
        assert_eq!(config.speed, 0.5);
        assert_eq!(config.distance_step, 1.0);
        assert_eq!((config.distance_min, config.distance_max), (1.0, 20.0));
        assert!(!config.interactive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            ArcballConfig::new().with_radius_scale(0.0).validate(),
            Err(ArcballError::InvalidRadiusScale(0.0))
        );
        assert_eq!(
            ArcballConfig::new().with_radius_scale(1e-39).validate(),
            Err(ArcballError::InvalidRadiusScale(1e-39))
        );
        assert_eq!(
            ArcballConfig::new().with_speed(0.0).validate(),
            Err(ArcballError::InvalidSpeed(0.0))
        );
        assert_eq!(
            ArcballConfig::new().with_speed(1.5).validate(),
            Err(ArcballError::InvalidSpeed(1.5))
        );
        assert_eq!(
            ArcballConfig::new().with_distance_step(-1.0).validate(),
            Err(ArcballError::InvalidDistanceStep(-1.0))
        );
        assert_eq!(
            ArcballConfig::new().with_distance_range(10.0, 1.0).validate(),
            Err(ArcballError::InvalidDistanceRange { min: 10.0, max: 1.0 })
        );
    }

    #[test]
    fn speed_of_one_is_allowed() {
        assert!(validate_speed(1.0).is_ok());
        assert!(validate_speed(f32::NAN).is_err());
    }
}
