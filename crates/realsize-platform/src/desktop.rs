use std::sync::Arc;

use realsize_core::error::Result;
use realsize_core::{ResolutionSource, ScaleContext};
use winit::event::WindowEvent;
use winit::monitor::MonitorHandle;
use winit::window::Window;

use crate::resolution_from_scale_factor;

/// Resolution of the monitor a window is currently on.
#[derive(Clone, Debug)]
pub struct WindowResolution {
    window: Arc<Window>,
}

impl WindowResolution {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl ResolutionSource for WindowResolution {
    fn resolution(&self) -> Result<u32> {
        let factor = match self.window.current_monitor() {
            Some(monitor) => monitor.scale_factor(),
            None => self.window.scale_factor(),
        };
        Ok(resolution_from_scale_factor(factor)?)
    }
}

/// Resolution of a fixed monitor, e.g. the primary one before any window exists.
#[derive(Clone, Debug)]
pub struct MonitorResolution(pub MonitorHandle);

impl ResolutionSource for MonitorResolution {
    fn resolution(&self) -> Result<u32> {
        Ok(resolution_from_scale_factor(self.0.scale_factor())?)
    }
}

/// Refreshes `ctx` on events that can change the window's resolution.
/// Returns whether the resolution changed.
pub fn handle_window_event(ctx: &ScaleContext, event: &WindowEvent) -> Result<bool> {
    match event {
        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
            log::debug!("ScaleFactorChanged: {scale_factor}");
            ctx.refresh_resolution()
        }
        WindowEvent::Moved(_) => ctx.refresh_resolution(),
        _ => Ok(false),
    }
}
