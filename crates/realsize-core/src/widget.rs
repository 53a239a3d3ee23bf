use std::convert::Infallible;

use crate::{Font, PixelDimension, ScaleState, SizeKind};

/// The slice of a toolkit widget the scaling core talks to.
///
/// Errors are the widget's own and are passed through untouched.
pub trait Widget {
    type Error;

    fn size(&self, kind: SizeKind) -> PixelDimension;
    fn set_size(&mut self, kind: SizeKind, size: PixelDimension) -> Result<(), Self::Error>;
    fn set_font(&mut self, font: &Font) -> Result<(), Self::Error>;
}

impl<W: Widget + ?Sized> Widget for &mut W {
    type Error = W::Error;

    fn size(&self, kind: SizeKind) -> PixelDimension {
        (**self).size(kind)
    }
    fn set_size(&mut self, kind: SizeKind, size: PixelDimension) -> Result<(), Self::Error> {
        (**self).set_size(kind, size)
    }
    fn set_font(&mut self, font: &Font) -> Result<(), Self::Error> {
        (**self).set_font(font)
    }
}

/// Anything that re-derives its pixel values from a [`ScaleState`].
pub trait Scalable {
    type Error;

    fn rescale(&mut self, state: &ScaleState) -> Result<(), Self::Error>;
}

/// In-memory widget. Keeps the last assigned sizes and font and counts writes
/// per slot; it never rejects a value.
#[derive(Clone, Debug, Default)]
pub struct HeadlessWidget {
    sizes: [PixelDimension; 3],
    writes: [usize; 3],
    font: Option<Font>,
    font_writes: usize,
}

impl HeadlessWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self, kind: SizeKind) -> usize {
        self.writes[kind.index()]
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    pub fn font_writes(&self) -> usize {
        self.font_writes
    }
}

impl Widget for HeadlessWidget {
    type Error = Infallible;

    fn size(&self, kind: SizeKind) -> PixelDimension {
        self.sizes[kind.index()]
    }

    fn set_size(&mut self, kind: SizeKind, size: PixelDimension) -> Result<(), Infallible> {
        self.sizes[kind.index()] = size;
        self.writes[kind.index()] += 1;
        Ok(())
    }

    fn set_font(&mut self, font: &Font) -> Result<(), Infallible> {
        self.font = Some(font.clone());
        self.font_writes += 1;
        Ok(())
    }
}
