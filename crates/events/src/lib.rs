//! `telecart-events` — event sink abstraction for tracked telemetry.
//!
//! The cart produces tracked events; this crate defines what an event is,
//! the envelope it travels in, and the pub/sub seam the host plugs a
//! transport into. No transport lives here — the in-memory bus exists for
//! tests and development hosts.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
