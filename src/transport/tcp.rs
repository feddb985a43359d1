use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpStream, ToSocketAddrs};

use crate::transport::{FrameReader, FrameWriter};

/// TCP connection to the match server, split into its two halves once the
/// session starts.
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| anyhow::anyhow!("Connection failed: {}", e))?;
        // Frames are small and interactive.
        stream.set_nodelay(true)?;
        Ok(Self::new(stream))
    }

    pub fn into_split(self) -> (FrameReader<OwnedReadHalf>, FrameWriter<OwnedWriteHalf>) {
        let (read, write) = self.stream.into_split();
        (FrameReader::new(read), FrameWriter::new(write))
    }
}
