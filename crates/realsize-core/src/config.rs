use crate::scale::{DEFAULT_RESOLUTION, DEFAULT_SCALE, DEFAULT_TEXT_SCALE};

/// Startup values for a [`ScaleState`](crate::ScaleState).
///
/// `fallback_resolution` is used only when no resolution source can report one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScaleConfig {
    pub scale: f32,
    pub text_scale: f32,
    pub fallback_resolution: u32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            text_scale: DEFAULT_TEXT_SCALE,
            fallback_resolution: DEFAULT_RESOLUTION,
        }
    }
}
