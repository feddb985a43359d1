//! In-process stand-in for the server connection.

use tokio::io::{DuplexStream, ReadHalf, WriteHalf};

use crate::transport::{FrameReader, FrameWriter};

/// Buffer size of each direction of the in-memory pipe.
pub const DEFAULT_CAPACITY: usize = 64 * 1024;

/// Client halves of an in-memory connection, plus the raw peer stream
/// standing in for the server.
pub struct InMemoryTransport {
    pub reader: FrameReader<ReadHalf<DuplexStream>>,
    pub writer: FrameWriter<WriteHalf<DuplexStream>>,
    pub server: DuplexStream,
}

impl InMemoryTransport {
    pub fn pair() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (client, server) = tokio::io::duplex(capacity);
        let (read, write) = tokio::io::split(client);
        Self {
            reader: FrameReader::new(read),
            writer: FrameWriter::new(write),
            server,
        }
    }
}
