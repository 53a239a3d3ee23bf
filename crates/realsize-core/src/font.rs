//! Plain font values.
//!
//! `Font` is an immutable description (family, style, point size, transform).
//! Every `derive_*` returns a new value and leaves the receiver untouched.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FontStyle: u8 {
        const BOLD = 0b01;
        const ITALIC = 0b10;
    }
}

impl FontStyle {
    pub const PLAIN: FontStyle = FontStyle::empty();
}

/// Affine transform applied to glyph outlines, as the 2x3 matrix
///
/// ```text
/// [ scale_x  shear_x  translate_x ]
/// [ shear_y  scale_y  translate_y ]
/// ```
///
/// so a point maps to `(scale_x * x + shear_x * y + translate_x,
/// shear_y * x + scale_y * y + translate_y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontTransform {
    pub scale_x: f32,
    pub shear_y: f32,
    pub shear_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Default for FontTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FontTransform {
    pub const IDENTITY: FontTransform = FontTransform {
        scale_x: 1.0,
        shear_y: 0.0,
        shear_x: 0.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn scale(x: f32, y: f32) -> Self {
        Self {
            scale_x: x,
            scale_y: y,
            ..Self::IDENTITY
        }
    }

    pub fn shear(x: f32, y: f32) -> Self {
        Self {
            shear_x: x,
            shear_y: y,
            ..Self::IDENTITY
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Self::IDENTITY
        }
    }

    /// Counter-clockwise rotation in radians (y pointing up).
    pub fn rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            scale_x: cos,
            shear_y: sin,
            shear_x: -sin,
            scale_y: cos,
            ..Self::IDENTITY
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.scale_x * x + self.shear_x * y + self.translate_x,
            self.shear_y * x + self.scale_y * y + self.translate_y,
        )
    }

    /// Matrix product `self * other`: the result applies `other` first, then
    /// `self`.
    pub fn combine(&self, other: &FontTransform) -> FontTransform {
        FontTransform {
            scale_x: self.scale_x * other.scale_x + self.shear_x * other.shear_y,
            shear_y: self.shear_y * other.scale_x + self.scale_y * other.shear_y,
            shear_x: self.scale_x * other.shear_x + self.shear_x * other.scale_y,
            scale_y: self.shear_y * other.shear_x + self.scale_y * other.scale_y,
            translate_x: self.scale_x * other.translate_x
                + self.shear_x * other.translate_y
                + self.translate_x,
            translate_y: self.shear_y * other.translate_x
                + self.scale_y * other.translate_y
                + self.translate_y,
        }
    }
}

/// Partial set of font attributes; `None` keeps the base font's value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontAttributes {
    pub family: Option<String>,
    pub style: Option<FontStyle>,
    pub size: Option<f32>,
    pub transform: Option<FontTransform>,
}

impl FontAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn transform(mut self, transform: FontTransform) -> Self {
        self.transform = Some(transform);
        self
    }
}

pub const DEFAULT_FAMILY: &str = "Default";
pub const DEFAULT_POINT_SIZE: f32 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: String,
    style: FontStyle,
    point_size: f32,
    transform: FontTransform,
}

impl Font {
    pub fn new(family: impl Into<String>, style: FontStyle, point_size: f32) -> Self {
        Self {
            family: family.into(),
            style,
            point_size,
            transform: FontTransform::IDENTITY,
        }
    }

    /// Builds a font from attributes, filling gaps with the defaults.
    pub fn from_attributes(attrs: &FontAttributes) -> Self {
        Self {
            family: attrs
                .family
                .clone()
                .unwrap_or_else(|| DEFAULT_FAMILY.to_string()),
            style: attrs.style.unwrap_or_default(),
            point_size: attrs.size.unwrap_or(DEFAULT_POINT_SIZE),
            transform: attrs.transform.unwrap_or_default(),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn is_bold(&self) -> bool {
        self.style.contains(FontStyle::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.style.contains(FontStyle::ITALIC)
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Point size rounded to the nearest integer.
    pub fn size(&self) -> i32 {
        self.point_size.round() as i32
    }

    pub fn transform(&self) -> FontTransform {
        self.transform
    }

    pub fn derive_style(&self, style: FontStyle) -> Font {
        Font {
            style,
            ..self.clone()
        }
    }

    pub fn derive_size(&self, point_size: f32) -> Font {
        Font {
            point_size,
            ..self.clone()
        }
    }

    pub fn derive_style_and_size(&self, style: FontStyle, point_size: f32) -> Font {
        Font {
            style,
            point_size,
            ..self.clone()
        }
    }

    pub fn derive_transform(&self, transform: FontTransform) -> Font {
        Font {
            transform,
            ..self.clone()
        }
    }

    pub fn derive_style_and_transform(&self, style: FontStyle, transform: FontTransform) -> Font {
        Font {
            style,
            transform,
            ..self.clone()
        }
    }

    pub fn derive_attributes(&self, attrs: &FontAttributes) -> Font {
        Font {
            family: attrs.family.clone().unwrap_or_else(|| self.family.clone()),
            style: attrs.style.unwrap_or(self.style),
            point_size: attrs.size.unwrap_or(self.point_size),
            transform: attrs.transform.unwrap_or(self.transform),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, FontStyle::PLAIN, DEFAULT_POINT_SIZE)
    }
}
