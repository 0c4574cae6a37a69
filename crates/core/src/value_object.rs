//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and defined entirely by their attribute
/// values: a product built twice with the same name, sku and price is the
/// same value, and "modifying" one means building a new value. This keeps
/// them safe to clone into events and to compare structurally in tests.
///
/// The trait requires:
/// - **Clone**: values are copied into events and snapshots freely
/// - **PartialEq**: structural comparison (the cart's *membership* equality
///   is a separate, pluggable concern)
/// - **Debug**: values show up in logs and assertions
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
