use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use telecart_core::{CommerceError, CommerceResult};
use telecart_events::{Event, EventBus, EventEnvelope};

use crate::comparator::{EqualityComparator, NameAndSku};
use crate::config::CartConfig;
use crate::event::{
    CartItemAdded, CartItemRemoved, CheckoutStarted, CommerceEvent, ProductPurchased,
    PurchaseRefunded,
};
use crate::product::Product;
use crate::transaction::TransactionAttributes;

/// Wire shape of the cart blob: `{"pl":[...]}`.
#[derive(Debug, Serialize, Deserialize)]
struct CartSnapshot {
    pl: Vec<Product>,
}

/// Ordered, mutable collection of products scoped to one session.
///
/// The cart tracks pending purchase intent and dispatches a tracked event
/// for every add/remove/checkout/purchase/refund, wrapped in an
/// [`EventEnvelope`] and published to the sink `B`. Dispatch is
/// fire-and-forget: a failing sink is logged and ignored, and an opted-out
/// cart dispatches nothing while keeping full local state.
///
/// Entry identity (merge on add, match on remove) is decided by the
/// current [`EqualityComparator`]; the default compares name and sku.
pub struct Cart<B> {
    config: CartConfig,
    sink: B,
    comparator: Box<dyn EqualityComparator>,
    products: Vec<Product>,
    sequence: u64,
}

impl<B> Cart<B>
where
    B: EventBus<EventEnvelope<CommerceEvent>>,
{
    pub fn new(config: CartConfig, sink: B) -> Self {
        Self {
            config,
            sink,
            comparator: Box::new(NameAndSku),
            products: Vec::new(),
            sequence: 0,
        }
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Ordered read-only view of the cart contents.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product whose name matches exactly.
    pub fn product_named(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name() == name)
    }

    /// Add a product.
    ///
    /// If an existing entry matches per the current comparator, its
    /// quantity is incremented by the incoming quantity instead of
    /// appending a second entry.
    pub fn add(&mut self, product: Product) -> &mut Self {
        let position = self
            .products
            .iter()
            .position(|existing| self.comparator.matches(existing, &product));

        match position {
            Some(index) => {
                let quantity = self.products[index]
                    .quantity()
                    .saturating_add(product.quantity());
                debug!(sku = product.sku(), quantity, "merged duplicate cart entry");
                self.products[index] = self.products[index].with_quantity(quantity);
            }
            None => self.products.push(product.clone()),
        }

        self.track(CommerceEvent::CartItemAdded(CartItemAdded {
            product,
            occurred_at: Utc::now(),
        }));
        self
    }

    /// Add several products at once; `None` entries are silently skipped.
    pub fn add_all<I>(&mut self, products: I) -> &mut Self
    where
        I: IntoIterator<Item = Option<Product>>,
    {
        for product in products.into_iter().flatten() {
            self.add(product);
        }
        self
    }

    /// Remove the first entry matching `product` per the current
    /// comparator. Returns whether anything was removed; the relative
    /// order of the remaining entries is preserved.
    pub fn remove(&mut self, product: &Product) -> bool {
        let position = self
            .products
            .iter()
            .position(|existing| self.comparator.matches(existing, product));

        match position {
            Some(index) => {
                let removed = self.products.remove(index);
                self.track(CommerceEvent::CartItemRemoved(CartItemRemoved {
                    product: removed,
                    occurred_at: Utc::now(),
                }));
                true
            }
            None => {
                debug!(sku = product.sku(), "remove skipped, no matching entry");
                false
            }
        }
    }

    /// Remove several products at once; `None` entries are silently
    /// skipped.
    pub fn remove_all<I>(&mut self, products: I) -> &mut Self
    where
        I: IntoIterator<Item = Option<Product>>,
    {
        for product in products.into_iter().flatten() {
            self.remove(&product);
        }
        self
    }

    /// Remove the entry at `index`. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> &mut Self {
        if index >= self.products.len() {
            debug!(index, len = self.products.len(), "remove_at out of range, ignoring");
            return self;
        }

        let removed = self.products.remove(index);
        self.track(CommerceEvent::CartItemRemoved(CartItemRemoved {
            product: removed,
            occurred_at: Utc::now(),
        }));
        self
    }

    /// Empty the cart. Idempotent, chainable, emits nothing.
    pub fn clear(&mut self) -> &mut Self {
        self.products.clear();
        self
    }

    /// Emit checkout intent with no step/option detail.
    pub fn checkout(&mut self) -> &mut Self {
        self.emit_checkout(None, None)
    }

    /// Emit checkout intent for a specific step.
    ///
    /// Arguments are normalized, never fatal: a negative step and a blank
    /// options string are both treated as absent.
    pub fn checkout_with(&mut self, step: i32, options: Option<&str>) -> &mut Self {
        let step = u32::try_from(step).ok();
        let options = options
            .map(str::trim)
            .filter(|options| !options.is_empty())
            .map(str::to_owned);
        self.emit_checkout(step, options)
    }

    fn emit_checkout(&mut self, step: Option<u32>, options: Option<String>) -> &mut Self {
        self.track(CommerceEvent::CheckoutStarted(CheckoutStarted {
            step,
            options,
            products: self.products.clone(),
            occurred_at: Utc::now(),
        }));
        self
    }

    /// Record a completed purchase: one event per product in the cart.
    ///
    /// Fails with [`CommerceError::InvalidTransaction`] when `attributes`
    /// is absent or carries no usable transaction id; the cart is left
    /// unmodified. On success the cart is emptied only when `clear_cart`
    /// is set.
    pub fn purchase(
        &mut self,
        attributes: Option<&TransactionAttributes>,
        clear_cart: bool,
    ) -> CommerceResult<&mut Self> {
        let transaction = Self::usable(attributes)?.clone();

        for product in self.products.clone() {
            self.track(CommerceEvent::ProductPurchased(ProductPurchased {
                transaction: transaction.clone(),
                product,
                occurred_at: Utc::now(),
            }));
        }

        if clear_cart {
            self.products.clear();
        }
        Ok(self)
    }

    /// Record a refund against the current product set.
    ///
    /// Same validation as [`Cart::purchase`]; never alters the cart.
    pub fn refund(
        &mut self,
        attributes: Option<&TransactionAttributes>,
    ) -> CommerceResult<&mut Self> {
        let transaction = Self::usable(attributes)?.clone();

        self.track(CommerceEvent::PurchaseRefunded(PurchaseRefunded {
            transaction,
            products: self.products.clone(),
            occurred_at: Utc::now(),
        }));
        Ok(self)
    }

    fn usable(
        attributes: Option<&TransactionAttributes>,
    ) -> CommerceResult<&TransactionAttributes> {
        let attributes = attributes.ok_or_else(|| {
            CommerceError::invalid_transaction("transaction attributes are required")
        })?;
        if !attributes.has_transaction_id() {
            return Err(CommerceError::invalid_transaction(
                "transaction id must not be blank",
            ));
        }
        Ok(attributes)
    }

    /// Swap the entry-identity policy for subsequent operations.
    ///
    /// `None` restores the default name+sku policy. Existing entries are
    /// never re-merged.
    pub fn set_equality_comparator(
        &mut self,
        comparator: Option<Box<dyn EqualityComparator>>,
    ) -> &mut Self {
        self.comparator = comparator.unwrap_or_else(|| Box::new(NameAndSku));
        self
    }

    /// Replace the cart contents from a blob produced by `to_string()`.
    ///
    /// Loading is rehydration, not shopping: it emits no tracked events.
    /// On parse failure the cart contents are left untouched.
    pub fn load_from_str(&mut self, blob: &str) -> CommerceResult<&mut Self> {
        let snapshot: CartSnapshot = serde_json::from_str(blob)
            .map_err(|e| CommerceError::serialization(e.to_string()))?;
        self.products = snapshot.pl;
        Ok(self)
    }

    fn track(&mut self, event: CommerceEvent) {
        if self.config.opt_out() {
            debug!(event_type = event.event_type(), "cart opted out, dropping event");
            return;
        }

        self.sequence += 1;
        let envelope = EventEnvelope::new(
            Uuid::now_v7(),
            self.config.session_id(),
            self.config.environment(),
            self.sequence,
            event,
        );

        // Telemetry loss must never break the host.
        if let Err(error) = self.sink.publish(envelope) {
            warn!(?error, "failed to publish tracked event");
        }
    }
}

impl<B> fmt::Display for Cart<B> {
    /// Compact JSON blob: `{"pl":[ ...products... ]}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = CartSnapshot {
            pl: self.products.clone(),
        };
        let blob = serde_json::to_string(&snapshot).map_err(|_| fmt::Error)?;
        f.write_str(&blob)
    }
}

impl<B> fmt::Debug for Cart<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cart")
            .field("config", &self.config)
            .field("products", &self.products)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}
