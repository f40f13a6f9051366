//! Collaborator traits
//!
//! These traits define the interface between the presentation logic and
//! whatever actually draws on the display. The core emits intents; it
//! never touches a rendering API.

pub mod mock;
pub mod surface;

pub use mock::{RecordingSurface, SurfaceCall};
pub use surface::{Region, RenderSurface, SurfaceError};
