//! # Real sizes, pixels, and scaling
//!
//! Realsize lets UI code describe sizes in inches (`RealDimension`) and font
//! sizes in unscaled points, and turns them into pixels for the current
//! screen. There are four pieces:
//!
//! - `ScaleState` — scale, text scale, resolution, and the two multipliers
//!   derived from them. All real↔pixel conversions live here.
//! - `ScaleContext` — the single shared handle to that state, with an
//!   explicit observer list.
//! - `ComponentScaler` — per-widget record of real minimum/maximum/preferred
//!   sizes, pushed to the widget as pixels.
//! - `ScalableFont` — a font that remembers its unscaled size.
//!
//! ## Rescaling
//!
//! Nothing rescales by itself. After changing the scale or refreshing the
//! resolution, call `rescale` on every scaler and font, or let the context do
//! it through `ScaleContext::track`:
//!
//! ```rust
//! use realsize_core::*;
//!
//! let ctx = ScaleContext::new(FixedResolution(96)).unwrap();
//! let mut scaler = ComponentScaler::new(HeadlessWidget::new());
//! scaler
//!     .set_scaled_minimum_size(Some(RealDimension::new(0.5, 0.25)), &ctx.state())
//!     .unwrap();
//! assert_eq!(scaler.target().size(SizeKind::Minimum), PixelDimension::new(48, 24));
//!
//! ctx.set_scale(1.5);
//! scaler.rescale(&ctx.state()).unwrap();
//! assert_eq!(scaler.target().size(SizeKind::Minimum), PixelDimension::new(72, 36));
//! ```
//!
//! ## Fonts
//!
//! ```rust
//! use realsize_core::*;
//!
//! let state = ScaleState::new(144).unwrap(); // font multiplier 2.0
//! let font = ScalableFont::new("Serif", FontStyle::PLAIN, 10.0, &state);
//! assert_eq!(font.point_size(), 20.0);
//!
//! let bold = font.derive_style(FontStyle::BOLD, &state);
//! assert_eq!(bold.unscaled_size(), 10.0);
//! assert_eq!(bold.point_size(), 20.0);
//! ```
//!
//! Everything here is single-threaded and synchronous.

pub mod config;
pub mod context;
pub mod error;
pub mod font;
pub mod geometry;
pub mod prelude;
pub mod resolution;
pub mod scalable_font;
pub mod scale;
pub mod scaler;
pub mod widget;


pub use config::*;
pub use context::*;
pub use error::ScaleError;
pub use font::*;
pub use geometry::*;
pub use resolution::*;
pub use scalable_font::*;
pub use scale::*;
pub use scaler::*;
pub use widget::*;
