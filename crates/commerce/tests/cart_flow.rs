//! Black-box test: a full shopping session driven against the in-memory
//! sink, asserting the envelope stream the backend would receive.

use std::sync::Arc;

use telecart_commerce::{Cart, CartConfig, CommerceEvent, Product, TransactionAttributes};
use telecart_core::{Environment, SessionId};
use telecart_events::{Event, EventBus, EventEnvelope, InMemoryEventBus};

type Bus = Arc<InMemoryEventBus<EventEnvelope<CommerceEvent>>>;

fn product(name: &str, sku: &str, price: u64) -> Product {
    Product::builder(name, sku).unit_price(price).build().unwrap()
}

#[test]
fn shopping_session_produces_the_expected_event_stream() {
    telecart_observability::init();

    let session_id = SessionId::new();
    let bus: Bus = Arc::new(InMemoryEventBus::new());
    let subscription = bus.subscribe();

    let mut cart = Cart::new(
        CartConfig::new(session_id).with_environment(Environment::Development),
        Arc::clone(&bus),
    );

    // Browse: two items in, one swapped out, duplicate merged.
    cart.add(product("Espresso Cup", "CUP-001", 450));
    cart.add(product("Moka Pot", "POT-010", 3200));
    cart.add(product("Espresso Cup", "CUP-001", 450));
    cart.remove(&product("Moka Pot", "POT-010", 3200));

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.products()[0].quantity(), 2);

    // Checkout and purchase, clearing the cart.
    cart.checkout_with(1, Some("standard shipping"));
    let attributes = TransactionAttributes::new("txn-42")
        .with_revenue(900)
        .with_affiliation("web");
    cart.purchase(Some(&attributes), true).unwrap();
    assert!(cart.is_empty());

    let envelopes = subscription.drain();
    let types: Vec<&str> = envelopes
        .iter()
        .map(|envelope| envelope.payload().event_type())
        .collect();
    assert_eq!(
        types,
        [
            "commerce.cart.item_added",
            "commerce.cart.item_added",
            "commerce.cart.item_added",
            "commerce.cart.item_removed",
            "commerce.cart.checkout",
            "commerce.transaction.purchase",
        ]
    );

    // Envelope metadata: same session, development traffic, gapless.
    for (i, envelope) in envelopes.iter().enumerate() {
        assert_eq!(envelope.session_id(), session_id);
        assert_eq!(envelope.environment(), Environment::Development);
        assert_eq!(envelope.sequence_number(), i as u64 + 1);
    }

    // The purchase event covers the single (merged) entry.
    match envelopes.last().unwrap().payload() {
        CommerceEvent::ProductPurchased(e) => {
            assert_eq!(e.product.sku(), "CUP-001");
            assert_eq!(e.product.quantity(), 2);
            assert_eq!(e.transaction.transaction_id(), Some("txn-42"));
        }
        other => panic!("expected ProductPurchased, got {other:?}"),
    }
}

#[test]
fn cart_state_survives_the_string_blob_while_events_do_not_replay() {
    telecart_observability::init();

    let bus: Bus = Arc::new(InMemoryEventBus::new());
    let mut cart = Cart::new(CartConfig::new(SessionId::new()), Arc::clone(&bus));

    cart.add(product("Espresso Cup", "CUP-001", 450));
    cart.add(product("Moka Pot", "POT-010", 3200));
    let blob = cart.to_string();

    // A fresh cart (new session, same sink) rehydrates silently.
    let subscription = bus.subscribe();
    let mut restored = Cart::new(CartConfig::new(SessionId::new()), Arc::clone(&bus));
    restored.load_from_str(&blob).unwrap();

    assert_eq!(restored.products(), cart.products());
    assert!(subscription.try_recv().is_err());
}
