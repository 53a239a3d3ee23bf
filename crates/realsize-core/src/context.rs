//! # Shared scale context
//!
//! One `ScaleContext` is created by the application root and handed down by
//! clone; every clone sees the same [`ScaleState`]. The context is
//! single-threaded (`Rc`), matching a GUI toolkit's thread affinity.
//!
//! Changing the state never rescales anything on its own. Consumers either call
//! `rescale` on their scalers and fonts after a change, or register an
//! observer:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use realsize_core::*;
//!
//! let ctx = ScaleContext::new(FixedResolution(96)).unwrap();
//! let widget = Rc::new(RefCell::new(ComponentScaler::new(HeadlessWidget::new())));
//! widget
//!     .borrow_mut()
//!     .set_scaled_preferred_size(Some(RealDimension::new(1.0, 1.0)), &ctx.state())
//!     .unwrap();
//! ctx.track(&widget);
//!
//! ctx.set_scale(2.0);
//! assert_eq!(
//!     widget.borrow().target().size(SizeKind::Preferred),
//!     PixelDimension::new(192, 192)
//! );
//! ```
//!
//! Observers run synchronously, after the state has been fully updated and
//! after the context's internal borrow is released, so they may read the
//! context (but should not mutate it).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::error::Result;
use crate::{ResolutionSource, Scalable, ScaleConfig, ScaleState};

slotmap::new_key_type! {
    pub struct ObserverId;
}

// Returns `false` once it has nothing left to observe; it is then removed.
type Observer = Rc<dyn Fn(&ScaleState) -> bool>;

#[derive(Clone)]
pub struct ScaleContext(Rc<RefCell<Inner>>);

struct Inner {
    state: ScaleState,
    source: Box<dyn ResolutionSource>,
    observers: SlotMap<ObserverId, Observer>,
}

impl ScaleContext {
    pub fn new(source: impl ResolutionSource + 'static) -> Result<Self> {
        Self::with_config(&ScaleConfig::default(), source)
    }

    /// Reads the initial resolution from `source`, falling back to
    /// `config.fallback_resolution` if the source fails.
    pub fn with_config(
        config: &ScaleConfig,
        source: impl ResolutionSource + 'static,
    ) -> Result<Self> {
        let resolution = match source.resolution() {
            Ok(r) => r,
            Err(e) => {
                log::warn!(
                    "{e}; using fallback resolution {}",
                    config.fallback_resolution
                );
                config.fallback_resolution
            }
        };
        Ok(Self(Rc::new(RefCell::new(Inner {
            state: ScaleState::with_config(config, resolution)?,
            source: Box::new(source),
            observers: SlotMap::with_key(),
        }))))
    }

    pub fn state(&self) -> ScaleState {
        self.0.borrow().state
    }

    pub fn scale(&self) -> f32 {
        self.0.borrow().state.scale()
    }

    pub fn text_scale(&self) -> f32 {
        self.0.borrow().state.text_scale()
    }

    pub fn resolution(&self) -> u32 {
        self.0.borrow().state.resolution()
    }

    pub fn set_scale(&self, scale: f32) {
        self.0.borrow_mut().state.set_scale(scale);
        self.notify();
    }

    pub fn set_text_scale(&self, text_scale: f32) {
        self.0.borrow_mut().state.set_text_scale(text_scale);
        self.notify();
    }

    /// Asks the resolution source for the current value. Returns whether the
    /// resolution changed; observers are notified only if it did.
    pub fn refresh_resolution(&self) -> Result<bool> {
        let resolution = self.0.borrow().source.resolution()?;
        let changed = self.0.borrow_mut().state.set_resolution(resolution)?;
        if changed {
            self.notify();
        }
        Ok(changed)
    }

    pub fn set_resolution_source(&self, source: impl ResolutionSource + 'static) {
        self.0.borrow_mut().source = Box::new(source);
    }

    pub fn subscribe(&self, f: impl Fn(&ScaleState) + 'static) -> ObserverId {
        self.insert(Rc::new(move |state: &ScaleState| {
            f(state);
            true
        }))
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.0.borrow_mut().observers.remove(id).is_some()
    }

    pub fn observer_count(&self) -> usize {
        self.0.borrow().observers.len()
    }

    /// Rescales `target` on every change. The observer is removed on the first
    /// notification after `target` is dropped, or when unsubscribed.
    ///
    /// A target that is already borrowed when a change comes in is skipped
    /// for that change (with a warning) and picked up again on the next one.
    /// Rescale failures are logged.
    pub fn track<S>(&self, target: &Rc<RefCell<S>>) -> ObserverId
    where
        S: Scalable + 'static,
        S::Error: fmt::Display,
    {
        let weak = Rc::downgrade(target);
        self.insert(Rc::new(move |state: &ScaleState| {
            let Some(target) = weak.upgrade() else {
                return false;
            };
            match target.try_borrow_mut() {
                Ok(mut target) => {
                    if let Err(e) = target.rescale(state) {
                        log::error!("rescale failed: {e}");
                    }
                }
                Err(_) => log::warn!("tracked target is borrowed; skipping rescale"),
            }
            true
        }))
    }

    fn insert(&self, observer: Observer) -> ObserverId {
        self.0.borrow_mut().observers.insert(observer)
    }

    fn notify(&self) {
        let (state, observers): (ScaleState, SmallVec<[(ObserverId, Observer); 8]>) = {
            let inner = self.0.borrow();
            let observers = inner
                .observers
                .iter()
                .map(|(id, observer)| (id, observer.clone()))
                .collect();
            (inner.state, observers)
        };
        let mut finished: SmallVec<[ObserverId; 4]> = SmallVec::new();
        for (id, observer) in observers {
            if !observer(&state) {
                finished.push(id);
            }
        }
        if !finished.is_empty() {
            let mut inner = self.0.borrow_mut();
            for id in finished {
                inner.observers.remove(id);
            }
            log::debug!("{} observers left", inner.observers.len());
        }
    }
}

impl fmt::Debug for ScaleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("ScaleContext")
            .field("state", &inner.state)
            .field("observers", &inner.observers.len())
            .finish()
    }
}
