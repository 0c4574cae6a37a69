use serde::{Deserialize, Serialize};
use uuid::Uuid;

use telecart_core::{Environment, SessionId};

/// Envelope for a tracked event, carrying session-scoped metadata.
///
/// This is the unit handed to the sink.
///
/// Notes:
/// - `event_id` is unique per dispatch; consumers dedup on it.
/// - `sequence_number` is monotonically increasing per cart, so the
///   backend can detect gaps and reorder within a session.
/// - `environment` lets the pipeline segregate development traffic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    session_id: SessionId,
    environment: Environment,

    /// Monotonically increasing position in the session's event stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        event_id: Uuid,
        session_id: SessionId,
        environment: Environment,
        sequence_number: u64,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            session_id,
            environment,
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
