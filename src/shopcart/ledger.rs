//! # Cart Ledger
//!
//! The ledger owns the cart's line items and the open/closed flag of the cart
//! panel. It is the only place that mutates line items.
//!
//! ## Rules
//!
//! - At most one [`LineItem`] per product id; insertion order is kept.
//! - A line item's quantity is always at least 1. Anything that would bring it
//!   to 0 removes the item instead.
//! - [`CartLedger::cart_quantity`] is derived on every call, never stored.
//!
//! ## Persistence
//!
//! Every mutation that changes the items writes the full list back through the
//! [`KeyValueStore`]. Operations that change nothing (decreasing or removing a
//! product that isn't in the cart) skip the write. The open flag is never
//! persisted.
//!
//! The ledger itself never fails. If a write fails, the in-memory state still
//! advances, the failure is logged and parked for [`CartLedger::take_write_failure`].
//!
//! ## Change notification
//!
//! Consumers that display cart state (a badge, a panel) register with
//! [`CartLedger::subscribe`] and are called with a [`CartView`] after every
//! state change.

use crate::error::CartError;
use crate::model::{LineItem, ProductId};
use crate::store::{self, KeyValueStore};
use tracing::{debug, warn};

/// Handle returned by [`CartLedger::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Read-only view of the cart handed to subscribers.
#[derive(Debug, Clone, Copy)]
pub struct CartView<'a> {
    pub items: &'a [LineItem],
    pub is_open: bool,
}

impl CartView<'_> {
    pub fn cart_quantity(&self) -> u32 {
        total_quantity(self.items)
    }
}

type Listener = Box<dyn FnMut(&CartView<'_>)>;

pub struct CartLedger<S: KeyValueStore> {
    store: S,
    key: String,
    items: Vec<LineItem>,
    is_open: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    write_failure: Option<CartError>,
}

impl<S: KeyValueStore> CartLedger<S> {
    /// Seed a ledger from whatever is stored under `key` (empty if nothing usable is stored).
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut items: Vec<LineItem> = store::read(&store, &key, Vec::new());
        let before = items.len();
        items.retain(|item| item.quantity > 0);
        if items.len() != before {
            warn!(key = %key, dropped = before - items.len(), "ignoring zero-quantity line items");
        }
        debug!(key = %key, items = items.len(), "loaded cart");
        Self::from_items(store, key, items)
    }

    /// Seed a ledger with `items` without reading the store.
    pub fn from_items(store: S, key: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            store,
            key: key.into(),
            items,
            is_open: false,
            listeners: Vec::new(),
            next_subscription: 0,
            write_failure: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_quantity(&self, id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map_or(0, |item| item.quantity)
    }

    /// Add one unit of `id`, inserting it at the end if absent. Returns the new quantity.
    pub fn increase_quantity(&mut self, id: ProductId) -> u32 {
        let quantity = match self.position(id) {
            Some(pos) => {
                let item = &mut self.items[pos];
                item.quantity = item.quantity.saturating_add(1);
                item.quantity
            }
            None => {
                self.items.push(LineItem::new(id, 1));
                1
            }
        };
        debug!(%id, quantity, "increased quantity");
        self.commit();
        quantity
    }

    /// Remove one unit of `id`; the line item goes away when it reaches 0.
    /// Returns the new quantity (0 if removed or never present).
    pub fn decrease_quantity(&mut self, id: ProductId) -> u32 {
        let Some(pos) = self.position(id) else {
            debug!(%id, "decrease on product not in cart");
            return 0;
        };

        let quantity = if self.items[pos].quantity <= 1 {
            self.items.remove(pos);
            0
        } else {
            self.items[pos].quantity -= 1;
            self.items[pos].quantity
        };
        debug!(%id, quantity, "decreased quantity");
        self.commit();
        quantity
    }

    /// Drop the line item for `id`. Returns the quantity that was removed.
    pub fn remove_from_cart(&mut self, id: ProductId) -> u32 {
        let Some(pos) = self.position(id) else {
            debug!(%id, "remove on product not in cart");
            return 0;
        };

        let removed = self.items.remove(pos);
        debug!(%id, quantity = removed.quantity, "removed from cart");
        self.commit();
        removed.quantity
    }

    pub fn open_cart(&mut self) {
        self.is_open = true;
        self.notify();
    }

    pub fn close_cart(&mut self) {
        self.is_open = false;
        self.notify();
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn cart_quantity(&self) -> u32 {
        total_quantity(&self.items)
    }

    pub fn cart_items(&self) -> &[LineItem] {
        &self.items
    }

    /// Register `listener` to be called after every state change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartView<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// The most recent failed write, if any. Clears it.
    pub fn take_write_failure(&mut self) -> Option<CartError> {
        self.write_failure.take()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn commit(&mut self) {
        if let Err(e) = store::write(&self.store, &self.key, &self.items) {
            warn!(key = %self.key, error = %e, "failed to persist cart");
            self.write_failure = Some(e);
        }
        self.notify();
    }

    fn notify(&mut self) {
        let view = CartView {
            items: &self.items,
            is_open: self.is_open,
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&view);
        }
    }
}

/// Saturates at `u32::MAX`; stored quantities are not bounded.
fn total_quantity(items: &[LineItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |total, item| total.saturating_add(item.quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const KEY: &str = "shopping-cart";

    fn empty_ledger() -> CartLedger<InMemoryStore> {
        CartLedger::load(InMemoryStore::new(), KEY)
    }

    fn ledger_with(items: &[(u64, u32)]) -> CartLedger<InMemoryStore> {
        let fixture = StoreFixture::new().with_items(KEY, items);
        CartLedger::load(fixture.store, KEY)
    }

    fn stored(ledger: &CartLedger<InMemoryStore>) -> Vec<LineItem> {
        store::read(ledger.store(), KEY, Vec::new())
    }

    #[test]
    fn unknown_product_has_zero_quantity() {
        let ledger = ledger_with(&[(1, 3)]);
        assert_eq!(ledger.get_quantity(ProductId(2)), 0);
    }

    #[test]
    fn increase_on_empty_inserts_single_item() {
        let mut ledger = empty_ledger();
        assert_eq!(ledger.increase_quantity(ProductId(7)), 1);

        assert_eq!(ledger.cart_items(), &[LineItem::new(ProductId(7), 1)]);
        assert_eq!(ledger.cart_quantity(), 1);
    }

    #[test]
    fn increase_existing_adds_one() {
        let mut ledger = ledger_with(&[(7, 2)]);
        let before = ledger.get_quantity(ProductId(7));
        ledger.increase_quantity(ProductId(7));
        assert_eq!(ledger.get_quantity(ProductId(7)), before + 1);
        assert_eq!(ledger.cart_items().len(), 1);
    }

    #[test]
    fn new_products_append_in_insertion_order() {
        let mut ledger = empty_ledger();
        ledger.increase_quantity(ProductId(3));
        ledger.increase_quantity(ProductId(1));
        ledger.increase_quantity(ProductId(3));
        ledger.increase_quantity(ProductId(2));

        let ids: Vec<u64> = ledger.cart_items().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn decrease_last_unit_removes_item() {
        let mut ledger = ledger_with(&[(7, 1)]);
        assert_eq!(ledger.decrease_quantity(ProductId(7)), 0);

        assert!(ledger.cart_items().is_empty());
        assert_eq!(ledger.cart_quantity(), 0);
        assert!(stored(&ledger).is_empty());
    }

    #[test]
    fn decrease_keeps_item_above_one() {
        let mut ledger = ledger_with(&[(7, 3), (8, 1)]);
        assert_eq!(ledger.decrease_quantity(ProductId(7)), 2);
        assert_eq!(
            ledger.cart_items(),
            &[LineItem::new(ProductId(7), 2), LineItem::new(ProductId(8), 1)]
        );
    }

    #[test]
    fn decrease_on_empty_is_a_no_op() {
        let mut ledger = empty_ledger();
        assert_eq!(ledger.decrease_quantity(ProductId(9)), 0);
        assert!(ledger.cart_items().is_empty());
        assert_eq!(ledger.store().write_count(), 0);
    }

    #[test]
    fn remove_drops_whole_item() {
        let mut ledger = ledger_with(&[(7, 2)]);
        assert_eq!(ledger.remove_from_cart(ProductId(7)), 2);
        assert!(ledger.cart_items().is_empty());
        assert!(stored(&ledger).is_empty());
    }

    #[test]
    fn remove_absent_leaves_others_alone() {
        let mut ledger = ledger_with(&[(1, 1), (2, 5)]);
        let writes = ledger.store().write_count();

        assert_eq!(ledger.remove_from_cart(ProductId(3)), 0);
        assert_eq!(ledger.cart_quantity(), 6);
        assert_eq!(ledger.store().write_count(), writes);
    }

    #[test]
    fn every_change_is_written_through() {
        let mut ledger = empty_ledger();
        ledger.increase_quantity(ProductId(1));
        ledger.increase_quantity(ProductId(1));
        ledger.increase_quantity(ProductId(2));
        ledger.decrease_quantity(ProductId(1));

        assert_eq!(stored(&ledger), ledger.cart_items());
        assert_eq!(ledger.store().write_count(), 4);
    }

    #[test]
    fn reload_restores_items_but_not_open_flag() {
        let store = InMemoryStore::new();
        {
            let mut ledger = CartLedger::load(&store, KEY);
            ledger.increase_quantity(ProductId(4));
            ledger.increase_quantity(ProductId(9));
            ledger.increase_quantity(ProductId(4));
            ledger.open_cart();
        }

        let reloaded = CartLedger::load(&store, KEY);
        assert_eq!(
            reloaded.cart_items(),
            &[LineItem::new(ProductId(4), 2), LineItem::new(ProductId(9), 1)]
        );
        assert!(!reloaded.is_open());
    }

    #[test]
    fn corrupt_store_starts_empty() {
        let fixture = StoreFixture::new().with_raw(KEY, "not json at all");
        let ledger = CartLedger::load(fixture.store, KEY);
        assert!(ledger.cart_items().is_empty());
    }

    #[test]
    fn zero_quantity_records_are_dropped_on_load() {
        let fixture = StoreFixture::new().with_raw(
            KEY,
            r#"[{"id":1,"quantity":0},{"id":2,"quantity":3}]"#,
        );
        let ledger = CartLedger::load(fixture.store, KEY);

        assert_eq!(ledger.cart_items(), &[LineItem::new(ProductId(2), 3)]);
        assert_eq!(ledger.get_quantity(ProductId(1)), 0);
    }

    #[test]
    fn huge_stored_quantities_saturate_the_total() {
        let fixture = StoreFixture::new().with_raw(
            KEY,
            r#"[{"id":1,"quantity":4294967295},{"id":2,"quantity":1}]"#,
        );
        let ledger = CartLedger::load(fixture.store, KEY);

        assert_eq!(ledger.cart_quantity(), u32::MAX);
        let view = CartView {
            items: ledger.cart_items(),
            is_open: false,
        };
        assert_eq!(view.cart_quantity(), u32::MAX);
    }

    #[test]
    fn open_and_close_are_not_persisted() {
        let mut ledger = empty_ledger();
        assert!(!ledger.is_open());
        ledger.open_cart();
        assert!(ledger.is_open());
        ledger.close_cart();
        assert!(!ledger.is_open());
        assert_eq!(ledger.store().write_count(), 0);
    }

    #[test]
    fn failed_write_still_updates_memory() {
        let mut ledger = empty_ledger();
        ledger.store().set_simulate_write_error(true);

        assert_eq!(ledger.increase_quantity(ProductId(5)), 1);
        assert_eq!(ledger.get_quantity(ProductId(5)), 1);
        assert!(matches!(
            ledger.take_write_failure(),
            Some(CartError::Store(_))
        ));
        assert!(ledger.take_write_failure().is_none());
    }

    #[test]
    fn subscribers_see_each_change() {
        let mut ledger = empty_ledger();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        ledger.subscribe(move |view| sink.borrow_mut().push((view.cart_quantity(), view.is_open)));

        ledger.increase_quantity(ProductId(1));
        ledger.increase_quantity(ProductId(1));
        ledger.open_cart();
        ledger.remove_from_cart(ProductId(1));

        assert_eq!(
            *seen.borrow(),
            vec![(1, false), (2, false), (2, true), (0, true)]
        );
    }

    #[test]
    fn no_op_changes_do_not_notify() {
        let mut ledger = empty_ledger();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        ledger.subscribe(move |_| *counter.borrow_mut() += 1);

        ledger.decrease_quantity(ProductId(1));
        ledger.remove_from_cart(ProductId(1));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut ledger = empty_ledger();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = ledger.subscribe(move |_| *counter.borrow_mut() += 1);

        ledger.increase_quantity(ProductId(1));
        assert!(ledger.unsubscribe(id));
        assert!(!ledger.unsubscribe(id));
        ledger.increase_quantity(ProductId(1));

        assert_eq!(*calls.borrow(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Increase(u64),
        Decrease(u64),
        Remove(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u64..6).prop_map(Op::Increase),
            (0u64..6).prop_map(Op::Decrease),
            (0u64..6).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_sequence(ops in prop::collection::vec(op(), 0..60)) {
            let store = InMemoryStore::new();
            let mut ledger = CartLedger::load(&store, KEY);

            for op in &ops {
                match *op {
                    Op::Increase(id) => {
                        let before = ledger.get_quantity(ProductId(id));
                        ledger.increase_quantity(ProductId(id));
                        prop_assert_eq!(ledger.get_quantity(ProductId(id)), before + 1);
                    }
                    Op::Decrease(id) => {
                        let before = ledger.get_quantity(ProductId(id));
                        ledger.decrease_quantity(ProductId(id));
                        prop_assert_eq!(ledger.get_quantity(ProductId(id)), before.saturating_sub(1));
                    }
                    Op::Remove(id) => {
                        ledger.remove_from_cart(ProductId(id));
                        prop_assert_eq!(ledger.get_quantity(ProductId(id)), 0);
                    }
                }

                let items = ledger.cart_items();
                let sum: u32 = items.iter().map(|i| i.quantity).sum();
                prop_assert_eq!(ledger.cart_quantity(), sum);
                prop_assert!(items.iter().all(|i| i.quantity >= 1));
                for (n, item) in items.iter().enumerate() {
                    prop_assert!(items[n + 1..].iter().all(|other| other.id != item.id));
                }
            }

            let reloaded = CartLedger::load(&store, KEY);
            prop_assert_eq!(reloaded.cart_items(), ledger.cart_items());
        }
    }
}
