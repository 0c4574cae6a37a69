use chrono::{DateTime, Utc};

/// A tracked event.
///
/// Events are:
/// - **immutable** (treat them as facts about what the user did)
/// - **versioned** (schema evolution between SDK and backend)
/// - named by a **stable type string** the pipeline routes on
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "commerce.cart.item_added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
