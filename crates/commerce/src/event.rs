use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use telecart_events::Event;

use crate::product::Product;
use crate::transaction::TransactionAttributes;

/// Event: a product was added to the cart (or merged into an entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemAdded {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: a cart entry was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemRemoved {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: checkout intent, with the cart snapshot at that moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutStarted {
    pub step: Option<u32>,
    pub options: Option<String>,
    pub products: Vec<Product>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: one product of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPurchased {
    pub transaction: TransactionAttributes,
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: a purchase was refunded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRefunded {
    pub transaction: TransactionAttributes,
    pub products: Vec<Product>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommerceEvent {
    CartItemAdded(CartItemAdded),
    CartItemRemoved(CartItemRemoved),
    CheckoutStarted(CheckoutStarted),
    ProductPurchased(ProductPurchased),
    PurchaseRefunded(PurchaseRefunded),
}

impl Event for CommerceEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CommerceEvent::CartItemAdded(_) => "commerce.cart.item_added",
            CommerceEvent::CartItemRemoved(_) => "commerce.cart.item_removed",
            CommerceEvent::CheckoutStarted(_) => "commerce.cart.checkout",
            CommerceEvent::ProductPurchased(_) => "commerce.transaction.purchase",
            CommerceEvent::PurchaseRefunded(_) => "commerce.transaction.refund",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CommerceEvent::CartItemAdded(e) => e.occurred_at,
            CommerceEvent::CartItemRemoved(e) => e.occurred_at,
            CommerceEvent::CheckoutStarted(e) => e.occurred_at,
            CommerceEvent::ProductPurchased(e) => e.occurred_at,
            CommerceEvent::PurchaseRefunded(e) => e.occurred_at,
        }
    }
}
