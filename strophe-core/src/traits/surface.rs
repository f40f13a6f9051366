//! Render surface trait for the watch display

use crate::presentation::intents::RenderIntent;

/// Logical display regions
///
/// The surface decides where and how each region is drawn; the core
/// only addresses them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// Time-of-day string
    Clock,
    /// Poem title
    Title,
    /// Current poem fragment
    Fragment,
}

/// Errors that can occur with the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Surface did not respond in time
    Timeout,
    /// Text did not fit the surface's own buffer
    BufferOverflow,
}

/// Trait for the rendering collaborator
///
/// Showing a region that is already visible, or hiding one that is
/// already hidden, must be a no-op.
pub trait RenderSurface {
    /// Make a region visible
    fn show(&mut self, region: Region) -> Result<(), SurfaceError>;

    /// Hide a region
    fn hide(&mut self, region: Region) -> Result<(), SurfaceError>;

    /// Replace a region's text
    fn set_text(&mut self, region: Region, text: &str) -> Result<(), SurfaceError>;

    /// Apply a single render intent
    fn apply(&mut self, intent: &RenderIntent<'_>) -> Result<(), SurfaceError> {
        match *intent {
            RenderIntent::Show(region) => self.show(region),
            RenderIntent::Hide(region) => self.hide(region),
            RenderIntent::SetText(region, text) => self.set_text(region, text),
        }
    }
}
