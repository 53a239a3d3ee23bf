pub use crate::config::ScaleConfig;
pub use crate::context::{ObserverId, ScaleContext};
pub use crate::error::ScaleError;
pub use crate::font::{Font, FontAttributes, FontStyle, FontTransform};
pub use crate::geometry::{PixelDimension, RealDimension, SizeKind};
pub use crate::resolution::{FixedResolution, ResolutionSource};
pub use crate::scalable_font::ScalableFont;
pub use crate::scale::{FONT_FACTOR, ScaleState};
pub use crate::scaler::ComponentScaler;
pub use crate::widget::{HeadlessWidget, Scalable, Widget};
