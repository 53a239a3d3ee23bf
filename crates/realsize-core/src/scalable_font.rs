use std::convert::Infallible;
use std::ops::Deref;

use crate::{Font, FontAttributes, FontStyle, FontTransform, Scalable, ScaleState};

/// A [`Font`] whose displayed size follows the scale state.
///
/// The font keeps its unscaled point size next to the displayed one. All
/// `derive_*` methods start from [`unscaled_font`](Self::unscaled_font), so a
/// chain of derivations never compounds the scaling. Cloning keeps the
/// unscaled size as is.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalableFont {
    font: Font,
    unscaled_size: f32,
}

impl ScalableFont {
    /// `size` is the unscaled point size.
    pub fn new(family: impl Into<String>, style: FontStyle, size: f32, state: &ScaleState) -> Self {
        Self::from_font(Font::new(family, style, size), state)
    }

    /// Takes `font`'s size as unscaled.
    pub fn from_font(font: Font, state: &ScaleState) -> Self {
        let unscaled_size = font.point_size();
        let mut out = Self {
            font,
            unscaled_size,
        };
        out.apply(state);
        out
    }

    pub fn from_attributes(attrs: &FontAttributes, state: &ScaleState) -> Self {
        Self::from_font(Font::from_attributes(attrs), state)
    }

    pub fn unscaled_size(&self) -> f32 {
        self.unscaled_size
    }

    /// The font as currently displayed.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Same family, style and transform, at the unscaled size.
    pub fn unscaled_font(&self) -> Font {
        self.font.derive_size(self.unscaled_size)
    }

    pub fn rescale(&mut self, state: &ScaleState) {
        self.apply(state);
    }

    fn apply(&mut self, state: &ScaleState) {
        self.font = self
            .font
            .derive_size(state.scale_font_size(self.unscaled_size));
    }

    pub fn derive_style(&self, style: FontStyle, state: &ScaleState) -> ScalableFont {
        Self::from_font(self.unscaled_font().derive_style(style), state)
    }

    /// `size` becomes the unscaled size of the new font.
    pub fn derive_size(&self, size: f32, state: &ScaleState) -> ScalableFont {
        Self::from_font(self.unscaled_font().derive_size(size), state)
    }

    pub fn derive_style_and_size(
        &self,
        style: FontStyle,
        size: f32,
        state: &ScaleState,
    ) -> ScalableFont {
        Self::from_font(self.unscaled_font().derive_style_and_size(style, size), state)
    }

    pub fn derive_transform(&self, transform: FontTransform, state: &ScaleState) -> ScalableFont {
        Self::from_font(self.unscaled_font().derive_transform(transform), state)
    }

    pub fn derive_style_and_transform(
        &self,
        style: FontStyle,
        transform: FontTransform,
        state: &ScaleState,
    ) -> ScalableFont {
        Self::from_font(
            self.unscaled_font()
                .derive_style_and_transform(style, transform),
            state,
        )
    }

    pub fn derive_attributes(&self, attrs: &FontAttributes, state: &ScaleState) -> ScalableFont {
        Self::from_font(self.unscaled_font().derive_attributes(attrs), state)
    }
}

impl Deref for ScalableFont {
    type Target = Font;

    fn deref(&self) -> &Font {
        &self.font
    }
}

impl AsRef<Font> for ScalableFont {
    fn as_ref(&self) -> &Font {
        &self.font
    }
}

impl Scalable for ScalableFont {
    type Error = Infallible;

    fn rescale(&mut self, state: &ScaleState) -> Result<(), Infallible> {
        ScalableFont::rescale(self, state);
        Ok(())
    }
}
