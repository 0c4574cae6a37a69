//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus is the seam between the cart and whatever actually ships events
//! to the telemetry backend. It makes minimal assumptions:
//!
//! - **Transport-agnostic**: in-memory channels in tests, a batching
//!   uploader in a real host — the cart cannot tell the difference.
//! - **Fire-and-forget**: the cart never blocks on delivery and never
//!   fails a user operation because the sink is unhappy.
//! - **At-least-once**: a transport may re-deliver; consumers must be
//!   idempotent (envelopes carry a unique event id for dedup).
//! - **No persistence**: the bus distributes, it does not store.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to an event stream.
///
/// Each subscription gets a copy of every message published to the bus
/// (broadcast semantics). Subscriptions are consumed from a single thread;
/// messages arrive in publish order for a single publisher.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain everything currently queued without blocking.
    pub fn drain(&self) -> Vec<M> {
        let mut out = Vec::new();
        while let Ok(message) = self.try_recv() {
            out.push(message);
        }
        out
    }
}

/// Event sink contract (pub/sub abstraction).
///
/// `publish()` can fail (transport down, queue full). The caller decides
/// what a failure means; the cart logs and drops, because losing a
/// telemetry event must never break the host application.
///
/// The trait requires `Send + Sync` so one sink can be shared by every
/// cart and tracker a host creates.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
