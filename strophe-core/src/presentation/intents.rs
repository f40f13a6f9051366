//! Render intents emitted by the presentation machine
//!
//! The machine never draws. Each tick yields a short list of intents
//! that the rendering collaborator maps onto its own layers.

use crate::traits::surface::Region;

/// A single rendering instruction
///
/// Intents are idempotent at the surface: showing a visible region or
/// hiding a hidden one is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderIntent<'a> {
    /// Make a region visible
    Show(Region),
    /// Hide a region
    Hide(Region),
    /// Replace a region's text
    SetText(Region, &'a str),
}
