use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Geometry knobs for one rendered wheel. Defaults match the profile-page chart upstream
/// (280px viewport, 90% radius, 60% cutout, flat).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    /// Square chart viewport edge, in px. The legend band is laid out below it.
    pub size: f64,
    /// Outer slice radius as a fraction of `size / 2`.
    pub radius_ratio: f64,
    /// Donut hole radius as a fraction of the outer radius. `0` draws a full pie.
    pub cutout_ratio: f64,
    /// Vertical extrusion of the pseudo-3D side walls, in px. `0` disables the effect.
    pub depth: f64,
    /// Angle of the first segment boundary, in degrees. `-90` is 12 o'clock.
    pub start_angle: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: 280.0,
            radius_ratio: 0.9,
            cutout_ratio: 0.6,
            depth: 0.0,
            start_angle: -90.0,
        }
    }
}

impl ChartConfig {
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Enables the pseudo-3D rendering used by the landing page variant (20px there).
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    pub fn center(&self) -> (f64, f64) {
        (self.size / 2.0, self.size / 2.0)
    }

    pub fn radius(&self) -> f64 {
        (self.size / 2.0) * self.radius_ratio
    }

    pub fn inner_radius(&self) -> f64 {
        self.radius() * self.cutout_ratio
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("size must be positive, got {}", self.size),
            });
        }
        if !(self.radius_ratio.is_finite() && self.radius_ratio > 0.0 && self.radius_ratio <= 1.0)
        {
            return Err(Error::InvalidConfig {
                message: format!("radiusRatio must be in (0, 1], got {}", self.radius_ratio),
            });
        }
        if !(self.cutout_ratio.is_finite() && (0.0..1.0).contains(&self.cutout_ratio)) {
            return Err(Error::InvalidConfig {
                message: format!("cutoutRatio must be in [0, 1), got {}", self.cutout_ratio),
            });
        }
        if !(self.depth.is_finite() && self.depth >= 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("depth must be non-negative, got {}", self.depth),
            });
        }
        if !self.start_angle.is_finite() {
            return Err(Error::InvalidConfig {
                message: "startAngle must be finite".to_string(),
            });
        }
        Ok(())
    }
}
