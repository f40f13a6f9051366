//! Recording surface for host tests

use heapless::{String, Vec};
use strophe_protocol::copy_truncated;

use super::surface::{Region, RenderSurface, SurfaceError};

/// Maximum calls kept by the recorder
pub const MAX_RECORDED_CALLS: usize = 64;

/// Recorded text is clipped to this many bytes
pub const MAX_RECORDED_TEXT: usize = 128;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    /// `show` was called
    Show(Region),
    /// `hide` was called
    Hide(Region),
    /// `set_text` was called with the given (clipped) text
    SetText(Region, String<MAX_RECORDED_TEXT>),
}

impl SurfaceCall {
    /// Build a SetText call for comparisons in tests
    pub fn set_text(region: Region, text: &str) -> Self {
        let mut recorded = String::new();
        copy_truncated(text, &mut recorded);
        SurfaceCall::SetText(region, recorded)
    }
}

/// A surface that records every call
///
/// Stands in for the rendering collaborator when driving the core on
/// the host. Calls past the recorder's capacity are dropped; clear
/// between test stages when driving long sequences.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Calls in arrival order
    pub calls: Vec<SurfaceCall, MAX_RECORDED_CALLS>,
}

impl RecordingSurface {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded calls
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Text of the most recent `set_text` for a region, if any
    pub fn last_text(&self, region: Region) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetText(r, text) if *r == region => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn show(&mut self, region: Region) -> Result<(), SurfaceError> {
        let _ = self.calls.push(SurfaceCall::Show(region));
        Ok(())
    }

    fn hide(&mut self, region: Region) -> Result<(), SurfaceError> {
        let _ = self.calls.push(SurfaceCall::Hide(region));
        Ok(())
    }

    fn set_text(&mut self, region: Region, text: &str) -> Result<(), SurfaceError> {
        let _ = self.calls.push(SurfaceCall::set_text(region, text));
        Ok(())
    }
}
