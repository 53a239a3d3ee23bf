use crate::error::Result;

/// Reports the current screen resolution in pixels per inch.
///
/// This is the only place the scaling core consults the environment. It is
/// queried on explicit [`refresh_resolution`](crate::ScaleContext::refresh_resolution)
/// calls, never polled.
pub trait ResolutionSource {
    fn resolution(&self) -> Result<u32>;
}

impl<F> ResolutionSource for F
where
    F: Fn() -> Result<u32>,
{
    fn resolution(&self) -> Result<u32> {
        self()
    }
}

/// A resolution that never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedResolution(pub u32);

impl ResolutionSource for FixedResolution {
    fn resolution(&self) -> Result<u32> {
        Ok(self.0)
    }
}
