//! Brace-depth framing over a raw byte stream.
//!
//! The server writes bare JSON objects back to back with no delimiter or
//! length prefix. A frame ends when the count of `{` minus `}` returns to
//! zero after the first `{`. Braces inside string values are counted too,
//! so a payload string such as `"a}b"` desynchronizes the stream; the paired
//! server relies on the same rule, so it cannot change without a protocol
//! version bump.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

/// Upper bound on a single buffered frame (64 KiB).
pub const MAX_FRAME_LEN: usize = 64 * 1024;

/// Errors produced while framing or parsing messages.
#[derive(Debug)]
pub enum FrameError {
    /// A complete frame was not valid JSON for the expected message type.
    Malformed(serde_json::Error),
    /// A `}` arrived with no open object.
    Unbalanced,
    /// The frame grew past [`MAX_FRAME_LEN`] without closing.
    TooLarge(usize),
    /// Serialization of an outbound message failed.
    Encode(serde_json::Error),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Malformed(e) => write!(f, "Malformed frame: {}", e),
            FrameError::Unbalanced => write!(f, "Unbalanced closing brace in stream"),
            FrameError::TooLarge(len) => {
                write!(f, "Frame too large: {} bytes (max: {})", len, MAX_FRAME_LEN)
            }
            FrameError::Encode(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Malformed(e) | FrameError::Encode(e) => Some(e),
            FrameError::Unbalanced | FrameError::TooLarge(_) => None,
        }
    }
}

/// Serialize one message into the bytes of a single write.
pub fn encode<T: Serialize>(msg: &T) -> Result<Vec<u8>, FrameError> {
    serde_json::to_vec(msg).map_err(FrameError::Encode)
}

/// Incremental decoder: feed it whatever the socket returned and collect the
/// messages completed by those bytes.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buf: Vec<u8>,
    depth: usize,
    inside: bool,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume `bytes`, returning one entry per frame completed by them, in
    /// stream order. A failed entry leaves the decoder reset and ready for
    /// the next frame, but callers are expected to treat it as fatal.
    pub fn feed<T: DeserializeOwned>(&mut self, bytes: &[u8]) -> Vec<Result<T, FrameError>> {
        let mut out = Vec::new();
        for &byte in bytes {
            if !self.inside && byte.is_ascii_whitespace() {
                continue;
            }
            match byte {
                b'{' => {
                    self.depth += 1;
                    self.inside = true;
                }
                b'}' => {
                    if self.depth == 0 {
                        self.reset();
                        out.push(Err(FrameError::Unbalanced));
                        continue;
                    }
                    self.depth -= 1;
                }
                _ => {}
            }
            self.buf.push(byte);

            if self.inside && self.depth == 0 {
                let frame = std::mem::take(&mut self.buf);
                self.inside = false;
                out.push(serde_json::from_slice(&frame).map_err(FrameError::Malformed));
            } else if self.buf.len() > MAX_FRAME_LEN {
                let len = self.buf.len();
                self.reset();
                out.push(Err(FrameError::TooLarge(len)));
            }
        }
        out
    }

    /// Bytes of an incomplete frame currently held.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Drop any partial frame.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.depth = 0;
        self.inside = false;
    }
}
