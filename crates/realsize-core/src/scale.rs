//! # Scale state
//!
//! `ScaleState` holds the three user/environment inputs that decide how big a
//! real (inch-based) size is on screen:
//!
//! - `scale` — user multiplier applied to every component.
//! - `text_scale` — extra multiplier applied only to font sizes.
//! - `resolution` — pixels per inch of the current display.
//!
//! Two multipliers are derived from them and kept in sync by every setter:
//!
//! ```text
//! size_multiplier = resolution * scale
//! font_multiplier = size_multiplier * text_scale / FONT_FACTOR
//! ```
//!
//! Both are recomputed from the inputs on each change, never incrementally, so
//! a sequence like `set_scale(2.0); set_scale(1.0)` lands on exactly the
//! original multiplier.
//!
//! ```rust
//! use realsize_core::*;
//!
//! let mut state = ScaleState::new(96).unwrap();
//! let px = state.to_pixels(RealDimension::new(1.0, 0.5));
//! assert_eq!(px, PixelDimension::new(96, 48));
//!
//! state.set_scale(2.0);
//! assert_eq!(state.to_pixels(RealDimension::new(1.0, 0.5)), PixelDimension::new(192, 96));
//! ```
//!
//! Degenerate scale values (zero, negative, NaN) are accepted as given and only
//! logged; the conversions stay total but the results are whatever the
//! arithmetic produces (clamped on the pixel side).

use crate::error::{Result, ScaleError};
use crate::{Font, PixelDimension, RealDimension, ScaleConfig};

pub const DEFAULT_SCALE: f32 = 1.0;
pub const DEFAULT_TEXT_SCALE: f32 = 1.0;
/// Typographic points per inch.
pub const FONT_FACTOR: f64 = 72.0;
/// Resolution assumed when nothing better is known.
pub const DEFAULT_RESOLUTION: u32 = 96;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleState {
    scale: f32,
    text_scale: f32,
    resolution: u32,
    size_multiplier: f64,
    font_multiplier: f64,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::unchecked(DEFAULT_RESOLUTION)
    }
}

impl ScaleState {
    /// Default scales at `resolution`. A resolution of 0 is rejected.
    pub fn new(resolution: u32) -> Result<Self> {
        if resolution == 0 {
            return Err(ScaleError::InvalidResolution(resolution));
        }
        Ok(Self::unchecked(resolution))
    }

    pub fn with_config(config: &ScaleConfig, resolution: u32) -> Result<Self> {
        let mut state = Self::new(resolution)?;
        state.set_scale(config.scale);
        state.set_text_scale(config.text_scale);
        Ok(state)
    }

    fn unchecked(resolution: u32) -> Self {
        let mut state = Self {
            scale: DEFAULT_SCALE,
            text_scale: DEFAULT_TEXT_SCALE,
            resolution,
            size_multiplier: 0.0,
            font_multiplier: 0.0,
        };
        state.recompute();
        state
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn text_scale(&self) -> f32 {
        self.text_scale
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Pixels per real inch at the current resolution and scale.
    pub fn size_multiplier(&self) -> f64 {
        self.size_multiplier
    }

    /// Displayed font size per unscaled point.
    pub fn font_multiplier(&self) -> f64 {
        self.font_multiplier
    }

    pub fn set_scale(&mut self, scale: f32) {
        warn_if_degenerate("scale", scale);
        self.scale = scale;
        self.recompute();
    }

    pub fn set_text_scale(&mut self, text_scale: f32) {
        warn_if_degenerate("text scale", text_scale);
        self.text_scale = text_scale;
        self.recompute_font();
    }

    /// Stores a new resolution. Returns `Ok(true)` if it differed from the
    /// current one, `Ok(false)` if nothing changed.
    pub fn set_resolution(&mut self, resolution: u32) -> Result<bool> {
        if resolution == 0 {
            return Err(ScaleError::InvalidResolution(resolution));
        }
        if resolution == self.resolution {
            return Ok(false);
        }
        log::info!(
            "screen resolution changed: {} -> {} ppi",
            self.resolution,
            resolution
        );
        self.resolution = resolution;
        self.recompute();
        Ok(true)
    }

    fn recompute(&mut self) {
        self.size_multiplier = self.resolution as f64 * self.scale as f64;
        self.recompute_font();
    }

    fn recompute_font(&mut self) {
        self.font_multiplier = self.size_multiplier * self.text_scale as f64 / FONT_FACTOR;
        log::debug!(
            "multipliers: size={} font={} (resolution={}, scale={}, text_scale={})",
            self.size_multiplier,
            self.font_multiplier,
            self.resolution,
            self.scale,
            self.text_scale
        );
    }

    // Conversions

    pub fn to_pixels(&self, dim: RealDimension) -> PixelDimension {
        PixelDimension::from_f64(
            dim.width * self.size_multiplier,
            dim.height * self.size_multiplier,
        )
    }

    pub fn to_real(&self, dim: PixelDimension) -> RealDimension {
        RealDimension::new(
            dim.width as f64 / self.size_multiplier,
            dim.height as f64 / self.size_multiplier,
        )
    }

    pub fn to_pixels_opt(&self, dim: Option<RealDimension>) -> Option<PixelDimension> {
        dim.map(|d| self.to_pixels(d))
    }

    pub fn to_real_opt(&self, dim: Option<PixelDimension>) -> Option<RealDimension> {
        dim.map(|d| self.to_real(d))
    }

    pub fn scale_font_size(&self, unscaled: f32) -> f32 {
        (unscaled as f64 * self.font_multiplier) as f32
    }

    pub fn unscale_font_size(&self, scaled: f32) -> f32 {
        (scaled as f64 / self.font_multiplier) as f32
    }

    /// Treats `font`'s size as unscaled and returns a copy at the displayed size.
    pub fn scale_font(&self, font: &Font) -> Font {
        font.derive_size(self.scale_font_size(font.point_size()))
    }
}

fn warn_if_degenerate(what: &str, v: f32) {
    if !(v.is_finite() && v > 0.0) {
        log::warn!("accepting degenerate {what} value {v}");
    }
}
