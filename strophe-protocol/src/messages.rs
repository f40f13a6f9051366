//! Message types for the companion link
//!
//! Message types are divided into two categories:
//! - Companion → Watch: poem deliveries
//! - Watch → Companion: poem refresh requests

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use heapless::String;

// Message type IDs: Companion → Watch
pub const MSG_POEM: u8 = 0x01;

// Message type IDs: Watch → Companion
pub const MSG_REQUEST_POEM: u8 = 0x10;

/// Maximum title length in bytes
pub const MAX_TITLE_LEN: usize = 64;

/// Maximum poem body length in bytes
pub const MAX_BODY_LEN: usize = 2048;

/// Copy `src` into a bounded string, truncating at a character boundary
/// when it exceeds the capacity.
pub fn copy_truncated<const N: usize>(src: &str, dst: &mut String<N>) {
    dst.clear();
    let mut len = src.len().min(N);
    while len > 0 && !src.is_char_boundary(len) {
        len -= 1;
    }
    // Cannot fail: len <= N and lands on a character boundary
    let _ = dst.push_str(&src[..len]);
}

/// Decode raw bytes into a bounded string, keeping the longest valid
/// UTF-8 prefix that fits.
pub fn copy_truncated_bytes<const N: usize>(bytes: &[u8], dst: &mut String<N>) {
    match core::str::from_utf8(bytes) {
        Ok(s) => copy_truncated(s, dst),
        Err(e) => {
            let valid = core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or("");
            copy_truncated(valid, dst);
        }
    }
}

/// A poem delivery: a title and a `|`-delimited body, always replaced
/// together so a poem and its title are never mismatched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoemDelivery {
    /// Poem title
    pub title: String<MAX_TITLE_LEN>,
    /// Poem body, fragments separated by `|`
    pub body: String<MAX_BODY_LEN>,
}

impl PoemDelivery {
    /// Build a delivery from raw strings, truncating oversized fields
    pub fn new(title: &str, body: &str) -> Self {
        let mut delivery = Self::default();
        copy_truncated(title, &mut delivery.title);
        copy_truncated(body, &mut delivery.body);
        delivery
    }
}

/// Messages from the Companion to the Watch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionMessage {
    /// A fresh poem with its title
    Poem(PoemDelivery),
}

impl CompanionMessage {
    /// Parse a message from a frame
    ///
    /// Poem payload layout: `[title_len u8][title][body_len u16 LE][body]`.
    /// Both fields must be present; oversized content is truncated rather
    /// than rejected.
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_POEM => {
                let payload = frame.payload.as_slice();
                let title_len = *payload.first().ok_or(FrameError::InvalidFrame)? as usize;
                let rest = &payload[1..];
                if rest.len() < title_len + 2 {
                    return Err(FrameError::InvalidFrame);
                }

                let title_bytes = &rest[..title_len];
                let body_len =
                    u16::from_le_bytes([rest[title_len], rest[title_len + 1]]) as usize;
                let body_start = title_len + 2;
                let body_bytes = rest
                    .get(body_start..body_start + body_len)
                    .ok_or(FrameError::InvalidFrame)?;

                let mut delivery = PoemDelivery::default();
                copy_truncated_bytes(title_bytes, &mut delivery.title);
                copy_truncated_bytes(body_bytes, &mut delivery.body);
                Ok(CompanionMessage::Poem(delivery))
            }
            _ => Err(FrameError::InvalidFrame),
        }
    }

    /// Encode this message into a frame (for testing or companion simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            CompanionMessage::Poem(delivery) => {
                let title_bytes = delivery.title.as_bytes();
                let body_bytes = delivery.body.as_bytes();

                let mut payload = heapless::Vec::<u8, MAX_PAYLOAD_SIZE>::new();
                payload
                    .push(title_bytes.len() as u8)
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .extend_from_slice(title_bytes)
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .extend_from_slice(&(body_bytes.len() as u16).to_le_bytes())
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .extend_from_slice(body_bytes)
                    .map_err(|_| FrameError::PayloadTooLarge)?;

                Frame::new(MSG_POEM, &payload)
            }
        }
    }
}

/// Messages from the Watch to the Companion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchMessage {
    /// Fire-and-forget request for a fresh poem; no payload semantics
    RequestPoem,
}

impl WatchMessage {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Frame {
        match self {
            WatchMessage::RequestPoem => Frame::empty(MSG_REQUEST_POEM),
        }
    }

    /// Parse a message from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_REQUEST_POEM => Ok(WatchMessage::RequestPoem),
            _ => Err(FrameError::InvalidFrame),
        }
    }
}
