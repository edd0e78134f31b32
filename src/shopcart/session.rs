//! # Cart Session
//!
//! A storefront shares one cart between many views (navbar badge, product
//! cards, cart panel). Instead of an ambient global, the application builds a
//! [`CartSession`] at start-up and hands it to whoever needs the cart.
//!
//! The session is the only way to reach the [`CartLedger`]. Asking for the
//! ledger before [`CartSession::begin`] (or after [`CartSession::end`]) returns
//! [`CartError::NotInitialized`], so callers have to deal with the
//! "no cart yet" case explicitly.

use crate::error::{CartError, Result};
use crate::ledger::CartLedger;
use crate::store::KeyValueStore;
use tracing::debug;

pub struct CartSession<S: KeyValueStore> {
    ledger: Option<CartLedger<S>>,
}

impl<S: KeyValueStore> Default for CartSession<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: KeyValueStore> CartSession<S> {
    /// An inactive session. Every ledger access fails until [`Self::begin`].
    pub fn new() -> Self {
        Self { ledger: None }
    }

    /// Load the cart stored under `key` and make it available.
    /// Replaces the ledger of an already active session.
    pub fn begin(&mut self, store: S, key: impl Into<String>) {
        let ledger = CartLedger::load(store, key);
        debug!(key = ledger.key(), "cart session started");
        self.ledger = Some(ledger);
    }

    pub fn with_ledger(ledger: CartLedger<S>) -> Self {
        Self {
            ledger: Some(ledger),
        }
    }

    pub fn is_active(&self) -> bool {
        self.ledger.is_some()
    }

    pub fn cart(&self) -> Result<&CartLedger<S>> {
        self.ledger.as_ref().ok_or(CartError::NotInitialized)
    }

    pub fn cart_mut(&mut self) -> Result<&mut CartLedger<S>> {
        self.ledger.as_mut().ok_or(CartError::NotInitialized)
    }

    /// Close the session, handing back the ledger if there was one.
    pub fn end(&mut self) -> Option<CartLedger<S>> {
        let ledger = self.ledger.take();
        if ledger.is_some() {
            debug!("cart session ended");
        }
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, ProductId};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn inactive_session_refuses_access() {
        let mut session: CartSession<InMemoryStore> = CartSession::new();
        assert!(!session.is_active());
        assert!(matches!(session.cart(), Err(CartError::NotInitialized)));
        assert!(matches!(session.cart_mut(), Err(CartError::NotInitialized)));
    }

    #[test]
    fn begin_loads_stored_cart() {
        let fixture = StoreFixture::new().with_items("shopping-cart", &[(7, 2)]);
        let mut session = CartSession::new();
        session.begin(fixture.store, "shopping-cart");

        let cart = session.cart().unwrap();
        assert_eq!(cart.get_quantity(ProductId(7)), 2);
        assert_eq!(cart.cart_quantity(), 2);
    }

    #[test]
    fn mutations_go_through_the_session() {
        let mut session = CartSession::new();
        session.begin(InMemoryStore::new(), "shopping-cart");

        session.cart_mut().unwrap().increase_quantity(ProductId(1));
        assert_eq!(session.cart().unwrap().get_quantity(ProductId(1)), 1);
    }

    #[test]
    fn with_ledger_starts_active() {
        let ledger = CartLedger::from_items(
            InMemoryStore::new(),
            "shopping-cart",
            vec![LineItem::new(ProductId(3), 4)],
        );
        let mut session = CartSession::with_ledger(ledger);

        assert!(session.is_active());
        assert_eq!(session.cart().unwrap().cart_quantity(), 4);
        assert_eq!(session.cart_mut().unwrap().decrease_quantity(ProductId(3)), 3);
    }

    #[test]
    fn end_deactivates() {
        let mut session = CartSession::new();
        session.begin(InMemoryStore::new(), "shopping-cart");
        assert!(session.end().is_some());
        assert!(session.end().is_none());
        assert!(matches!(session.cart(), Err(CartError::NotInitialized)));
    }
}
