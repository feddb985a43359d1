//! Transport seams between the session and the byte stream.
//!
//! The connection is split in two halves: the receiver loop owns an
//! [`Inbound`], the writer task owns an [`Outbound`]. Neither half ever
//! touches session state.

use crate::protocol::{ClientMessage, ServerMessage};

#[async_trait::async_trait]
pub trait Inbound: Send {
    /// Wait for the next decoded message. `Ok(None)` means the peer closed
    /// the stream.
    async fn recv(&mut self) -> anyhow::Result<Option<ServerMessage>>;
}

#[async_trait::async_trait]
pub trait Outbound: Send {
    /// Write one message as a single frame.
    async fn send(&mut self, msg: &ClientMessage) -> anyhow::Result<()>;
}

pub mod in_memory;
pub mod stream;
pub mod tcp;

pub use stream::{FrameReader, FrameWriter};
pub use tcp::TcpTransport;
