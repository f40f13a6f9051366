//! Companion Link Protocol
//!
//! This crate defines the framed message protocol between the watch face
//! and its phone-side companion. The companion pushes fresh poems; the
//! watch asks for one on a fixed schedule. The protocol is designed for
//! simplicity, bounded memory, and robustness against a noisy link.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬──────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH   │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 2B (LE)  │ 1B   │ 0–2180B     │ 1B       │
//! └───────┴──────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Delivery is best-effort in both directions: a corrupted inbound frame
//! is dropped and the link resynchronizes on the next START byte; a
//! failed outbound request is never retried.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use messages::{
    copy_truncated, copy_truncated_bytes, CompanionMessage, PoemDelivery, WatchMessage,
    MAX_BODY_LEN, MAX_TITLE_LEN,
};
