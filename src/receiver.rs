//! Receiver loop: the only reader of the connection.
//!
//! It never touches the session. Each decoded message becomes a
//! [`SessionEvent`] on an unbounded channel drained by the UI loop, so the
//! session sees messages in exactly the order the decoder produced them.
//! The loop always ends by sending one [`SessionEvent::Disconnected`].

use log::{debug, error};
use tokio::sync::mpsc;

use crate::session::SessionEvent;
use crate::transport::Inbound;

pub struct ReceiverLoop<I: Inbound> {
    inbound: I,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl<I: Inbound> ReceiverLoop<I> {
    pub fn new(inbound: I, events: mpsc::UnboundedSender<SessionEvent>) -> Self {
        Self { inbound, events }
    }

    /// Read until the stream closes or fails. Returns the disconnect reason
    /// that was delivered.
    pub async fn run(mut self) -> String {
        let reason = loop {
            match self.inbound.recv().await {
                Ok(Some(msg)) => {
                    debug!("received {}", msg.kind());
                    if self.events.send(SessionEvent::Message(msg)).is_err() {
                        debug!("session dropped, stopping receiver");
                        return "Session closed".to_string();
                    }
                }
                Ok(None) => break "Disconnected from server".to_string(),
                Err(e) => break format!("Connection lost: {}", e),
            }
        };
        error!("{}", reason);
        let _ = self.events.send(SessionEvent::Disconnected(reason.clone()));
        reason
    }
}
