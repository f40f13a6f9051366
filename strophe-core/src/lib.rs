//! Board-agnostic core logic for the Strophe poem watch face
//!
//! This crate contains all presentation logic that does not depend on
//! specific display, timer, or transport implementations:
//!
//! - Presentation state machine (the timed phase cycle)
//! - Fragment pagination engine (delimited poem slicing)
//! - Presentation controller (delivery staging, adoption, clock gating)
//! - Render surface traits
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod controller;
pub mod paginate;
pub mod presentation;
pub mod traits;
