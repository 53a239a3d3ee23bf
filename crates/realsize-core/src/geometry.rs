use std::fmt;

/// A size in device-independent units (inches).
///
/// Equality is exact on both fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealDimension {
    pub width: f64,
    pub height: f64,
}

impl RealDimension {
    pub const ZERO: RealDimension = RealDimension {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl fmt::Display for RealDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RealDimension-[ width={:.6}, height={:.6} ]",
            self.width, self.height
        )
    }
}

/// A size in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelDimension {
    pub width: i32,
    pub height: i32,
}

impl PixelDimension {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Rounds each side to the nearest integer and clamps it into `i32` range.
    ///
    /// Halves round away from zero; NaN becomes 0.
    pub fn from_f64(width: f64, height: f64) -> Self {
        Self {
            width: round_clamped(width),
            height: round_clamped(height),
        }
    }
}

impl fmt::Display for PixelDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}px", self.width, self.height)
    }
}

fn round_clamped(v: f64) -> i32 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

/// One of the three size slots a widget exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeKind {
    Minimum,
    Maximum,
    Preferred,
}

impl SizeKind {
    pub const ALL: [SizeKind; 3] = [SizeKind::Minimum, SizeKind::Maximum, SizeKind::Preferred];

    /// Position of this slot in `ALL`.
    pub const fn index(self) -> usize {
        match self {
            SizeKind::Minimum => 0,
            SizeKind::Maximum => 1,
            SizeKind::Preferred => 2,
        }
    }
}

impl fmt::Display for SizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SizeKind::Minimum => "minimum",
            SizeKind::Maximum => "maximum",
            SizeKind::Preferred => "preferred",
        })
    }
}
