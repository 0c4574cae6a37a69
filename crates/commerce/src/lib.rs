//! Commerce cart module of the telemetry SDK.
//!
//! This crate contains the in-memory cart a host application mutates as the
//! user shops, plus the tracked-event payloads it dispatches to the sink.
//! All logic is deterministic and synchronous (no IO, no async, no storage).

pub mod cart;
pub mod comparator;
pub mod config;
pub mod event;
pub mod product;
pub mod transaction;

pub use cart::Cart;
pub use comparator::{EqualityComparator, NameAndSku};
pub use config::CartConfig;
pub use event::{
    CartItemAdded, CartItemRemoved, CheckoutStarted, CommerceEvent, ProductPurchased,
    PurchaseRefunded,
};
pub use product::{Product, ProductBuilder};
pub use transaction::TransactionAttributes;
