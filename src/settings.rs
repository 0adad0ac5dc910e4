//! Visual and interaction settings.
//!
//! Every field has a default matching [`crate::consts`], so an empty JSON
//! object (or no configuration at all) yields the stock look. Hosts may pass a
//! partial JSON document to override individual values.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BACKGROUND_COLOR, CONSTRUCTION_ALPHA, CONSTRUCTION_COLOR, CONSTRUCTION_DASH, CONSTRUCTION_RADIUS_FACTOR,
    CONSTRUCTION_WIDTH, CURVE_COLOR, CURVE_WIDTH, ENDPOINT_COLOR, HIT_RADIUS, HOVER_COLOR, HOVER_RADIUS_FACTOR,
    INTERIOR_COLOR, LEVEL_COLORS, OUTLINE_WIDTH,
};
use crate::error::CurveError;

/// Colors used by the renderer, as CSS color strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub curve: String,
    pub construction: String,
    /// First and last control point.
    pub endpoint: String,
    /// Control points between the endpoints.
    pub interior: String,
    /// Hovered or dragged control point.
    pub hover: String,
    /// Construction point color per level; index 0 is unused.
    pub levels: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR.to_owned(),
            curve: CURVE_COLOR.to_owned(),
            construction: CONSTRUCTION_COLOR.to_owned(),
            endpoint: ENDPOINT_COLOR.to_owned(),
            interior: INTERIOR_COLOR.to_owned(),
            hover: HOVER_COLOR.to_owned(),
            levels: LEVEL_COLORS.iter().map(|c| (*c).to_owned()).collect(),
        }
    }
}

impl Palette {
    /// Color for construction points of `level`. Levels past the end of the
    /// palette reuse its last entry.
    #[must_use]
    pub fn level_color(&self, level: usize) -> &str {
        self.levels
            .get(level)
            .or_else(|| self.levels.last())
            .map_or(CURVE_COLOR, String::as_str)
    }

    /// Color of the lone curve point drawn when the construction is hidden.
    #[must_use]
    pub fn final_color(&self) -> &str {
        self.levels.last().map_or(CURVE_COLOR, String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical-space grab radius; also the drawn control point radius.
    pub hit_radius: f64,
    pub construction_radius_factor: f64,
    pub hover_radius_factor: f64,
    pub curve_width: f64,
    pub outline_width: f64,
    pub construction_width: f64,
    pub construction_alpha: f64,
    pub construction_dash: Vec<f64>,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hit_radius: HIT_RADIUS,
            construction_radius_factor: CONSTRUCTION_RADIUS_FACTOR,
            hover_radius_factor: HOVER_RADIUS_FACTOR,
            curve_width: CURVE_WIDTH,
            outline_width: OUTLINE_WIDTH,
            construction_width: CONSTRUCTION_WIDTH,
            construction_alpha: CONSTRUCTION_ALPHA,
            construction_dash: vec![CONSTRUCTION_DASH, CONSTRUCTION_DASH],
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Settings`] on malformed JSON and
    /// [`CurveError::InvalidSetting`] if a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, CurveError> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that radii and widths are usable.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidSetting`] naming the first bad field.
    pub fn validate(&self) -> Result<(), CurveError> {
        positive("hit_radius", self.hit_radius)?;
        positive("construction_radius_factor", self.construction_radius_factor)?;
        positive("hover_radius_factor", self.hover_radius_factor)?;
        positive("curve_width", self.curve_width)?;
        positive("outline_width", self.outline_width)?;
        positive("construction_width", self.construction_width)?;
        if !(0.0..=1.0).contains(&self.construction_alpha) {
            return Err(CurveError::InvalidSetting {
                name: "construction_alpha",
                reason: format!("{} is outside [0, 1]", self.construction_alpha),
            });
        }
        if self.construction_dash.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(CurveError::InvalidSetting {
                name: "construction_dash",
                reason: "segments must be finite and non-negative".to_owned(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn construction_radius(&self) -> f64 {
        self.hit_radius * self.construction_radius_factor
    }

    #[must_use]
    pub fn hover_radius(&self) -> f64 {
        self.hit_radius * self.hover_radius_factor
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), CurveError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CurveError::InvalidSetting { name, reason: format!("{value} is not a positive number") })
    }
}
