//! One-shot result channels between a worker and the orchestrator.
//!
//! A result travels as a fixed-width big-endian payload of [`INT_SIZE`]
//! bytes. The receiving side never blocks: it either has nothing yet, or it
//! resolves to a value or to "undefined". A payload shorter than the fixed
//! width, or a channel closed without any payload, resolves to undefined.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tracing::{debug, warn};

use duocalc_core::constants::INT_SIZE;

/// Create a connected sender/receiver pair.
#[must_use]
pub fn result_channel() -> (ResultSender, ResultReceiver) {
    let (tx, rx) = crossbeam_channel::bounded(1);
    (ResultSender { tx }, ResultReceiver { rx })
}

/// Encode a result as its wire payload.
#[must_use]
pub fn encode_payload(value: i32) -> [u8; INT_SIZE] {
    value.to_be_bytes()
}

/// Decode a wire payload.
///
/// Only the first [`INT_SIZE`] bytes are read; fewer than that is a partial
/// transmission and decodes to `None`.
#[must_use]
pub fn decode_payload(payload: &[u8]) -> Option<i32> {
    let bytes: [u8; INT_SIZE] = payload.get(..INT_SIZE)?.try_into().ok()?;
    Some(i32::from_be_bytes(bytes))
}

/// Write side of a result channel. Consumed by the single send.
#[derive(Debug)]
pub struct ResultSender {
    tx: Sender<Vec<u8>>,
}

impl ResultSender {
    /// Transmit `value`.
    pub fn send(self, value: i32) {
        self.send_raw(&encode_payload(value));
    }

    /// Transmit an arbitrary payload.
    pub fn send_raw(self, payload: &[u8]) {
        if self.tx.send(payload.to_vec()).is_err() {
            debug!("result receiver already dropped");
        }
    }
}

/// Outcome of a non-blocking receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryReceive {
    /// Nothing has arrived yet.
    Pending,
    /// The channel resolved, to a value or to undefined.
    Ready(Option<i32>),
}

/// Read side of a result channel.
#[derive(Debug)]
pub struct ResultReceiver {
    rx: Receiver<Vec<u8>>,
}

impl ResultReceiver {
    /// Check for a result without blocking.
    pub fn try_receive(&self) -> TryReceive {
        match self.rx.try_recv() {
            Ok(payload) => {
                let value = decode_payload(&payload);
                if value.is_none() {
                    warn!(
                        len = payload.len(),
                        expected = INT_SIZE,
                        "partial result payload"
                    );
                }
                TryReceive::Ready(value)
            }
            Err(TryRecvError::Empty) => TryReceive::Pending,
            Err(TryRecvError::Disconnected) => {
                debug!("result channel closed without a payload");
                TryReceive::Ready(None)
            }
        }
    }

    pub(crate) fn inner(&self) -> &Receiver<Vec<u8>> {
        &self.rx
    }
}
