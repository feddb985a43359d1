//! [`Inbound`]/[`Outbound`] over any tokio byte stream.

use std::collections::VecDeque;

use log::debug;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::protocol::{encode, ClientMessage, FrameDecoder, FrameError, ServerMessage};
use crate::transport::{Inbound, Outbound};

/// Read size per socket call.
const READ_CHUNK: usize = 1024;

pub struct FrameReader<R> {
    reader: R,
    decoder: FrameDecoder,
    pending: VecDeque<Result<ServerMessage, FrameError>>,
    chunk: Box<[u8]>,
}

impl<R: AsyncRead + Unpin + Send> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            decoder: FrameDecoder::new(),
            pending: VecDeque::new(),
            chunk: vec![0u8; READ_CHUNK].into_boxed_slice(),
        }
    }
}

#[async_trait::async_trait]
impl<R: AsyncRead + Unpin + Send> Inbound for FrameReader<R> {
    async fn recv(&mut self) -> anyhow::Result<Option<ServerMessage>> {
        loop {
            if let Some(next) = self.pending.pop_front() {
                return next.map(Some).map_err(anyhow::Error::new);
            }

            let n = self.reader.read(&mut self.chunk).await.map_err(|e| {
                if e.kind() == std::io::ErrorKind::ConnectionReset {
                    anyhow::anyhow!("Connection reset by peer")
                } else {
                    anyhow::anyhow!("Read error: {}", e)
                }
            })?;
            if n == 0 {
                if self.decoder.buffered() > 0 {
                    debug!(
                        "stream closed with {} bytes of an unfinished frame",
                        self.decoder.buffered()
                    );
                }
                return Ok(None);
            }
            let frames = self.decoder.feed::<ServerMessage>(&self.chunk[..n]);
            self.pending.extend(frames);
        }
    }
}

pub struct FrameWriter<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin + Send> FrameWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[async_trait::async_trait]
impl<W: AsyncWrite + Unpin + Send> Outbound for FrameWriter<W> {
    async fn send(&mut self, msg: &ClientMessage) -> anyhow::Result<()> {
        let data = encode(msg)?;
        self.writer.write_all(&data).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::BrokenPipe
                || e.kind() == std::io::ErrorKind::ConnectionReset
            {
                anyhow::anyhow!("Connection closed by peer")
            } else {
                anyhow::anyhow!("Write error: {}", e)
            }
        })?;
        self.writer
            .flush()
            .await
            .map_err(|e| anyhow::anyhow!("Write error: {}", e))?;
        Ok(())
    }
}
