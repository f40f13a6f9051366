//! Fragment pagination engine
//!
//! Slices a `|`-delimited poem body into displayable fragments with a
//! forward-only cursor. Only the source buffer and the single current
//! fragment are ever held; each byte is visited at most twice (once by
//! the scan, once by the copy), so paginating a whole poem is O(n).

use heapless::String;
use strophe_protocol::{copy_truncated, MAX_BODY_LEN};

/// Fragment delimiter byte within a poem body
pub const FRAGMENT_DELIMITER: u8 = b'|';

/// Maximum materialized fragment length in bytes
pub const MAX_FRAGMENT_LEN: usize = MAX_BODY_LEN;

/// Forward-only read position over the poem body
///
/// `begin` never decreases between rewinds, and
/// `begin <= end <= source length` holds at all times. `end` is the
/// exclusive end of the current fragment: one past its delimiter, or
/// the end of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaginationCursor {
    /// Byte offset where the current fragment starts
    pub begin: usize,
    /// Byte offset one past the current fragment
    pub end: usize,
    /// Set once the scan has reached the end of the body
    pub exhausted: bool,
}

/// Result of a single pagination step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdvanceOutcome {
    /// A fragment is ready and more may follow
    FragmentReady,
    /// The end of the body was reached; the exposed fragment is the last
    Exhausted,
}

/// Streaming paginator over a delimited poem body
#[derive(Debug, Default)]
pub struct Paginator {
    source: String<MAX_BODY_LEN>,
    fragment: String<MAX_FRAGMENT_LEN>,
    cursor: PaginationCursor,
}

impl Paginator {
    /// Create an empty paginator
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new poem body, truncating oversized input, and rewind
    pub fn set_source(&mut self, body: &str) {
        copy_truncated(body, &mut self.source);
        self.rewind();
    }

    /// Reset the cursor to the top of the body
    ///
    /// Clears the exhausted flag and discards the current fragment; the
    /// body itself is kept.
    pub fn rewind(&mut self) {
        self.cursor = PaginationCursor::default();
        self.fragment.clear();
    }

    /// Step to the next fragment
    ///
    /// Scans forward from the end of the previous fragment to the next
    /// delimiter or the end of the body. The delimiter stays at the end
    /// of the exposed fragment, so concatenating every fragment in order
    /// reproduces the body byte for byte.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let len = self.source.len();

        // Clamp rather than read past the end if the cursor is ever
        // beyond the body.
        if self.cursor.end >= len {
            self.cursor.begin = len;
            self.cursor.end = len;
            self.cursor.exhausted = true;
            self.fragment.clear();
            return AdvanceOutcome::Exhausted;
        }

        self.cursor.begin = self.cursor.end;

        let remainder = &self.source.as_bytes()[self.cursor.begin..];
        let outcome = match remainder.iter().position(|&b| b == FRAGMENT_DELIMITER) {
            Some(offset) => {
                self.cursor.end = self.cursor.begin + offset + 1;
                AdvanceOutcome::FragmentReady
            }
            None => {
                self.cursor.end = len;
                self.cursor.exhausted = true;
                AdvanceOutcome::Exhausted
            }
        };

        copy_truncated(
            &self.source[self.cursor.begin..self.cursor.end],
            &mut self.fragment,
        );
        outcome
    }

    /// The currently exposed fragment
    pub fn fragment(&self) -> &str {
        self.fragment.as_str()
    }

    /// Check whether the body has been fully consumed
    pub fn is_exhausted(&self) -> bool {
        self.cursor.exhausted
    }

    /// The current cursor position
    pub fn cursor(&self) -> PaginationCursor {
        self.cursor
    }

    /// Length of the installed body in bytes
    pub fn source_len(&self) -> usize {
        self.source.len()
    }
}
