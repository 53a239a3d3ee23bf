use crate::{PixelDimension, RealDimension, Scalable, ScaleState, SizeKind, Widget};

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    real: Option<RealDimension>,
    // Last value pushed to the widget; only used to skip redundant writes.
    pushed: Option<PixelDimension>,
}

/// Tracks the real minimum/maximum/preferred sizes of one widget and pushes
/// their pixel equivalents to it.
///
/// Only slots set through this scaler are ever written. A slot left unset (or
/// cleared with `None`) keeps whatever pixel size the widget already has.
#[derive(Debug)]
pub struct ComponentScaler<W> {
    target: W,
    slots: [Slot; 3],
}

impl<W: Widget> ComponentScaler<W> {
    pub fn new(target: W) -> Self {
        Self {
            target,
            slots: [Slot::default(); 3],
        }
    }

    pub fn target(&self) -> &W {
        &self.target
    }

    /// Direct access to the widget. Sizes written through it are not tracked.
    pub fn target_mut(&mut self) -> &mut W {
        &mut self.target
    }

    pub fn into_inner(self) -> W {
        self.target
    }

    pub fn scaled_size(&self, kind: SizeKind) -> Option<RealDimension> {
        self.slots[kind.index()].real
    }

    /// Records `size` for `kind` and pushes its pixel equivalent. `None` clears
    /// the record without touching the widget.
    pub fn set_scaled_size(
        &mut self,
        kind: SizeKind,
        size: Option<RealDimension>,
        state: &ScaleState,
    ) -> Result<(), W::Error> {
        let slot = &mut self.slots[kind.index()];
        slot.real = size;
        slot.pushed = None;
        match size {
            Some(real) => self.push(kind, real, state, true),
            None => Ok(()),
        }
    }

    /// Records `size` for `kind` as already shown by the widget at `applied`
    /// pixels. Nothing is written; a later rescale compares against `applied`.
    pub fn record_scaled_size(
        &mut self,
        kind: SizeKind,
        size: RealDimension,
        applied: PixelDimension,
    ) {
        self.slots[kind.index()] = Slot {
            real: Some(size),
            pushed: Some(applied),
        };
    }

    pub fn scaled_minimum_size(&self) -> Option<RealDimension> {
        self.scaled_size(SizeKind::Minimum)
    }

    pub fn scaled_maximum_size(&self) -> Option<RealDimension> {
        self.scaled_size(SizeKind::Maximum)
    }

    pub fn scaled_preferred_size(&self) -> Option<RealDimension> {
        self.scaled_size(SizeKind::Preferred)
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

    /// Recomputes every tracked slot from `state` and pushes it to the widget.
    pub fn rescale(&mut self, state: &ScaleState) -> Result<(), W::Error> {
        for kind in SizeKind::ALL {
            if let Some(real) = self.slots[kind.index()].real {
                self.push(kind, real, state, false)?;
            }
        }
        Ok(())
    }

    fn push(
        &mut self,
        kind: SizeKind,
        real: RealDimension,
        state: &ScaleState,
        force: bool,
    ) -> Result<(), W::Error> {
        let px = state.to_pixels(real);
        let pushed = self.slots[kind.index()].pushed;
        if !force && pushed == Some(px) && self.target.size(kind) == px {
            return Ok(());
        }
        log::debug!("{kind} size {real} -> {px}");
        self.target.set_size(kind, px)?;
        self.slots[kind.index()].pushed = Some(px);
        Ok(())
    }
}

impl<W: Widget> Scalable for ComponentScaler<W> {
    type Error = W::Error;

    fn rescale(&mut self, state: &ScaleState) -> Result<(), W::Error> {
        ComponentScaler::rescale(self, state)
    }
}
