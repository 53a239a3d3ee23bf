//! Scalable widget wrapper.
//!
//! `ScalableWidget` owns a widget and forwards reads to it through `Deref`.
//! The only calls it intercepts are size and font writes, so that real sizes,
//! direct pixel sizes and scalable fonts stay consistent across rescales.
//!
//! Writing through [`ScalableWidget::target_mut`] bypasses the wrapper; after
//! that, the wrapper's records may no longer match the widget.

use std::ops::Deref;

use realsize_core::*;

/// Font assigned to a wrapped widget.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetFont {
    /// Displayed as is on every scale.
    Plain(Font),
    /// Rescaled together with the widget.
    Scalable(ScalableFont),
}

impl WidgetFont {
    pub fn font(&self) -> &Font {
        match self {
            WidgetFont::Plain(f) => f,
            WidgetFont::Scalable(f) => f.font(),
        }
    }
}

impl From<Font> for WidgetFont {
    fn from(f: Font) -> Self {
        WidgetFont::Plain(f)
    }
}

impl From<ScalableFont> for WidgetFont {
    fn from(f: ScalableFont) -> Self {
        WidgetFont::Scalable(f)
    }
}

#[derive(Debug)]
pub struct ScalableWidget<W> {
    scaler: ComponentScaler<W>,
    pixel_sizes: [Option<PixelDimension>; 3],
    scale_pixel_sizes: bool,
    font: Option<WidgetFont>,
}

impl<W: Widget> ScalableWidget<W> {
    pub fn new(target: W) -> Self {
        Self {
            scaler: ComponentScaler::new(target),
            pixel_sizes: [None; 3],
            scale_pixel_sizes: false,
            font: None,
        }
    }

    pub fn target(&self) -> &W {
        self.scaler.target()
    }

    /// Unchecked access to the wrapped widget.
    pub fn target_mut(&mut self) -> &mut W {
        self.scaler.target_mut()
    }

    pub fn into_inner(self) -> W {
        self.scaler.into_inner()
    }

    pub fn scaled_size(&self, kind: SizeKind) -> Option<RealDimension> {
        self.scaler.scaled_size(kind)
    }

    /// Pixel size last set with [`set_pixel_size`](Self::set_pixel_size), if
    /// it has not been replaced by a real size since.
    pub fn pixel_size(&self, kind: SizeKind) -> Option<PixelDimension> {
        self.pixel_sizes[kind.index()]
    }

    pub fn set_scaled_size(
        &mut self,
        kind: SizeKind,
        size: Option<RealDimension>,
        state: &ScaleState,
    ) -> Result<(), W::Error> {
        self.pixel_sizes[kind.index()] = None;
        self.scaler.set_scaled_size(kind, size, state)
    }

    /// Sets a size in pixels. The widget gets exactly `size`; its real
    /// equivalent at the current state is tracked from then on.
    pub fn set_pixel_size(
        &mut self,
        kind: SizeKind,
        size: PixelDimension,
        state: &ScaleState,
    ) -> Result<(), W::Error> {
        self.pixel_sizes[kind.index()] = Some(size);
        self.scaler.record_scaled_size(kind, state.to_real(size), size);
        if self.scaler.target().size(kind) != size {
            log::debug!("{kind} size set to {size}");
            self.scaler.target_mut().set_size(kind, size)?;
        }
        Ok(())
    }

    pub fn set_scaled_minimum_size(
        &mut self,
        size: Option<RealDimension>,
        state: &ScaleState,
    ) -> Result<(), W::Error> {
        self.set_scaled_size(SizeKind::Minimum, size, state)
    }

    pub fn set_scaled_maximum_size(
        &mut self,
        size: Option<RealDimension>,
        state: &ScaleState,
    ) -> Result<(), W::Error> {
        self.set_scaled_size(SizeKind::Maximum, size, state)
    }

    pub fn set_scaled_preferred_size(
        &mut self,
        size: Option<RealDimension>,
        state: &ScaleState,
    ) -> Result<(), W::Error> {
        self.set_scaled_size(SizeKind::Preferred, size, state)
    }

    pub fn set_minimum_size(
        &mut self,
        size: PixelDimension,
        state: &ScaleState,
    ) -> Result<(), W::Error> {
        self.set_pixel_size(SizeKind::Minimum, size, state)
    }

    pub fn set_maximum_size(
        &mut self,
        size: PixelDimension,
        state: &ScaleState,
    ) -> Result<(), W::Error> {
        self.set_pixel_size(SizeKind::Maximum, size, state)
    }

    pub fn set_preferred_size(
        &mut self,
        size: PixelDimension,
        state: &ScaleState,
    ) -> Result<(), W::Error> {
        self.set_pixel_size(SizeKind::Preferred, size, state)
    }

    /// Whether sizes set in pixels keep their real size (`true`) or their
    /// exact pixel value (`false`, the default) when rescaled.
    pub fn scale_pixel_sizes(&mut self, scale: bool) {
        self.scale_pixel_sizes = scale;
    }

    pub fn scales_pixel_sizes(&self) -> bool {
        self.scale_pixel_sizes
    }

    pub fn font(&self) -> Option<&WidgetFont> {
        self.font.as_ref()
    }

    /// Assigns a font to the widget. A scalable font is first brought up to
    /// `state`.
    pub fn set_font(
        &mut self,
        font: impl Into<WidgetFont>,
        state: &ScaleState,
    ) -> Result<(), W::Error> {
        let mut font = font.into();
        if let WidgetFont::Scalable(f) = &mut font {
            f.rescale(state);
        }
        self.scaler.target_mut().set_font(font.font())?;
        self.font = Some(font);
        Ok(())
    }

    /// Re-derives every tracked size, and the font if it is scalable.
    pub fn rescale(&mut self, state: &ScaleState) -> Result<(), W::Error> {
        if !self.scale_pixel_sizes {
            for kind in SizeKind::ALL {
                if let Some(px) = self.pixel_sizes[kind.index()] {
                    self.set_pixel_size(kind, px, state)?;
                }
            }
        }
        self.scaler.rescale(state)?;

        if let Some(WidgetFont::Scalable(f)) = &mut self.font {
            f.rescale(state);
            log::debug!("font rescaled to {}pt", f.point_size());
            self.scaler.target_mut().set_font(f.font())?;
        }
        Ok(())
    }
}

impl<W: Widget> Deref for ScalableWidget<W> {
    type Target = W;

    fn deref(&self) -> &W {
        self.scaler.target()
    }
}

impl<W: Widget> Scalable for ScalableWidget<W> {
    type Error = W::Error;

    fn rescale(&mut self, state: &ScaleState) -> Result<(), W::Error> {
        ScalableWidget::rescale(self, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(w: i32, h: i32) -> PixelDimension {
        PixelDimension::new(w, h)
    }

    #[test]
    fn test_deref_reads_target() {
        let state = ScaleState::new(96).unwrap();
        let mut w = ScalableWidget::new(HeadlessWidget::new());
        w.set_scaled_preferred_size(Some(RealDimension::new(1.0, 0.5)), &state)
            .unwrap();
        assert_eq!(w.size(SizeKind::Preferred), px(96, 48));
        assert_eq!(w.writes(SizeKind::Preferred), 1);
    }

    #[test]
    fn test_pixel_size_kept_on_rescale_by_default() {
        let mut state = ScaleState::new(96).unwrap();
        let mut w = ScalableWidget::new(HeadlessWidget::new());
        w.set_minimum_size(px(50, 20), &state).unwrap();
        assert_eq!(w.size(SizeKind::Minimum), px(50, 20));
        assert_eq!(w.pixel_size(SizeKind::Minimum), Some(px(50, 20)));

        state.set_scale(2.0);
        w.rescale(&state).unwrap();
        assert_eq!(w.size(SizeKind::Minimum), px(50, 20));
        let real = w.scaled_size(SizeKind::Minimum).unwrap();
        assert!((real.width - 50.0 / 192.0).abs() < 1e-12);
    }

    #[test]
    fn test_kept_pixel_size_is_not_rewritten() {
        let mut state = ScaleState::new(96).unwrap();
        let mut w = ScalableWidget::new(HeadlessWidget::new());
        w.set_preferred_size(px(40, 30), &state).unwrap();
        assert_eq!(w.writes(SizeKind::Preferred), 1);

        w.rescale(&state).unwrap();
        w.rescale(&state).unwrap();
        state.set_scale(3.0);
        w.rescale(&state).unwrap();
        assert_eq!(w.size(SizeKind::Preferred), px(40, 30));
        assert_eq!(w.writes(SizeKind::Preferred), 1);
    }

    #[test]
    fn test_kept_pixel_size_restored_after_direct_write() {
        let state = ScaleState::new(96).unwrap();
        let mut w = ScalableWidget::new(HeadlessWidget::new());
        w.set_preferred_size(px(40, 30), &state).unwrap();
        let _ = w.target_mut().set_size(SizeKind::Preferred, px(1, 1));

        w.rescale(&state).unwrap();
        assert_eq!(w.size(SizeKind::Preferred), px(40, 30));
        assert_eq!(w.writes(SizeKind::Preferred), 3);
    }

    #[test]
    fn test_pixel_size_scaled_when_enabled() {
        let mut state = ScaleState::new(96).unwrap();
        let mut w = ScalableWidget::new(HeadlessWidget::new());
        w.scale_pixel_sizes(true);
        assert!(w.scales_pixel_sizes());
        w.set_maximum_size(px(96, 48), &state).unwrap();

        state.set_scale(2.0);
        w.rescale(&state).unwrap();
        assert_eq!(w.size(SizeKind::Maximum), px(192, 96));
    }

    #[test]
    fn test_real_size_clears_pixel_record() {
        let mut state = ScaleState::new(96).unwrap();
        let mut w = ScalableWidget::new(HeadlessWidget::new());
        w.set_preferred_size(px(10, 10), &state).unwrap();
        w.set_scaled_preferred_size(Some(RealDimension::new(1.0, 1.0)), &state)
            .unwrap();
        assert_eq!(w.pixel_size(SizeKind::Preferred), None);

        state.set_scale(0.5);
        w.rescale(&state).unwrap();
        assert_eq!(w.size(SizeKind::Preferred), px(48, 48));
    }

    #[test]
    fn test_untracked_slot_is_not_written() {
        let mut state = ScaleState::new(96).unwrap();
        let mut w = ScalableWidget::new(HeadlessWidget::new());
        let _ = w.target_mut().set_size(SizeKind::Minimum, px(7, 7));

        state.set_scale(4.0);
        w.rescale(&state).unwrap();
        assert_eq!(w.size(SizeKind::Minimum), px(7, 7));
        assert_eq!(w.writes(SizeKind::Minimum), 1);
    }

    #[test]
    fn test_scalable_font_follows_rescale() {
        let mut state = ScaleState::new(96).unwrap();
        let mut w = ScalableWidget::new(HeadlessWidget::new());
        let font = ScalableFont::new("Sans", FontStyle::PLAIN, 12.0, &state);
        w.set_font(font, &state).unwrap();
        assert_eq!(w.target().font().map(Font::size), Some(16));

        state.set_resolution(144).unwrap();
        w.rescale(&state).unwrap();
        assert_eq!(w.target().font().map(Font::size), Some(24));
        match w.font() {
            Some(WidgetFont::Scalable(f)) => assert_eq!(f.unscaled_size(), 12.0),
            other => panic!("unexpected font {other:?}"),
        }
    }

    #[test]
    fn test_plain_font_is_not_rescaled() {
        let mut state = ScaleState::new(96).unwrap();
        let mut w = ScalableWidget::new(HeadlessWidget::new());
        w.set_font(Font::new("Mono", FontStyle::BOLD, 10.0), &state)
            .unwrap();
        state.set_text_scale(3.0);
        w.rescale(&state).unwrap();
        assert_eq!(w.target().font().map(Font::point_size), Some(10.0));
        assert_eq!(w.font_writes(), 1);
    }

    #[test]
    fn test_font_set_at_stale_state_is_refreshed() {
        let old = ScaleState::new(72).unwrap();
        let current = ScaleState::new(144).unwrap();
        let mut w = ScalableWidget::new(HeadlessWidget::new());
        let font = ScalableFont::new("Sans", FontStyle::PLAIN, 10.0, &old);
        assert_eq!(font.point_size(), 10.0);

        w.set_font(font, &current).unwrap();
        assert_eq!(w.target().font().map(Font::point_size), Some(20.0));
    }

    #[test]
    fn test_tracked_by_context() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let ctx = ScaleContext::new(FixedResolution(96)).unwrap();
        let w = Rc::new(RefCell::new(ScalableWidget::new(HeadlessWidget::new())));
        w.borrow_mut()
            .set_scaled_minimum_size(Some(RealDimension::new(2.0, 1.0)), &ctx.state())
            .unwrap();
        ctx.track(&w);

        ctx.set_scale(1.5);
        assert_eq!(w.borrow().size(SizeKind::Minimum), px(288, 144));
    }
}
