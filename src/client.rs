//! Connection glue owned by the UI loop.
//!
//! A [`Client`] owns the [`Session`] and two background tasks: the
//! [`ReceiverLoop`] feeding an event channel, and a writer draining an
//! outbound channel. The UI loop calls [`Client::pump`] once per tick and
//! [`Client::command`] for user input; neither ever waits on the network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::ClientConfig;
use crate::protocol::ClientMessage;
use crate::receiver::ReceiverLoop;
use crate::session::{Command, Session, SessionEvent, SessionSnapshot};
use crate::transport::{Inbound, Outbound, TcpTransport};

pub struct Client {
    session: Session,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    outbound: mpsc::UnboundedSender<ClientMessage>,
    running: Arc<AtomicBool>,
    tasks: Vec<JoinHandle<()>>,
}

impl Client {
    /// Open a TCP connection to `config.server_addr` and start the
    /// background tasks. A failed connect is fatal; there is no retry.
    pub async fn connect(config: ClientConfig) -> anyhow::Result<Self> {
        let transport = TcpTransport::connect(&config.server_addr).await?;
        info!("connected to {}", config.server_addr);
        let (reader, writer) = transport.into_split();
        Ok(Self::spawn(reader, writer, config))
    }

    /// Start the receiver and writer tasks over an already open connection.
    /// Must be called inside a tokio runtime.
    pub fn spawn<I, O>(inbound: I, outbound: O, config: ClientConfig) -> Self
    where
        I: Inbound + 'static,
        O: Outbound + 'static,
    {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();

        let receiver = ReceiverLoop::new(inbound, event_tx);
        let receiver_task = tokio::spawn(async move {
            receiver.run().await;
        });
        let writer_task = tokio::spawn(run_writer(outbound, out_rx));

        Self {
            session: Session::new(config),
            events: event_rx,
            outbound: out_tx,
            running: Arc::new(AtomicBool::new(true)),
            tasks: vec![receiver_task, writer_task],
        }
    }

    /// Apply every event received since the last call, in arrival order.
    /// Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            let disconnected = matches!(event, SessionEvent::Disconnected(_));
            self.session.handle_event(event);
            applied += 1;
            if disconnected {
                self.running.store(false, Ordering::SeqCst);
            }
        }
        applied
    }

    /// Apply a user command and queue its request, if any. Returns `true`
    /// when a request was queued. Delivery is best effort.
    pub fn command(&mut self, command: Command) -> bool {
        let Some(msg) = self.session.apply(command) else {
            return false;
        };
        debug!("queueing {}", msg.kind());
        if let Err(e) = self.outbound.send(msg) {
            warn!("writer gone, dropping {}", e.0.kind());
            return false;
        }
        true
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn take_notifications(&mut self) -> Vec<String> {
        self.session.take_notifications()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Shared flag the UI loop checks once per tick. Clearing it asks the
    /// loop to exit.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Stop both background tasks.
    pub fn shutdown(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Write queued messages in order. A failed write is logged and skipped.
async fn run_writer<O: Outbound>(mut outbound: O, mut queue: mpsc::UnboundedReceiver<ClientMessage>) {
    while let Some(msg) = queue.recv().await {
        debug!("sending {}", msg.kind());
        if let Err(e) = outbound.send(&msg).await {
            warn!("failed to send {}: {}", msg.kind(), e);
        }
    }
    debug!("writer stopped");
}
