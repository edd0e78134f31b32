use crate::commands::{report_write_failure, CartSummary, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ledger::CartLedger;
use crate::model::{LineItem, ProductId};
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(ledger: &mut CartLedger<S>, ids: &[ProductId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let quantity = ledger.increase_quantity(id);
        let message = if quantity == 1 {
            format!("Added product {} to cart", id)
        } else {
            format!("Product {}: {} in cart", id, quantity)
        };
        result.add_message(CmdMessage::success(message));
        result.affected_items.push(LineItem::new(id, quantity));
    }

    report_write_failure(ledger, &mut result);
    Ok(result.with_summary(CartSummary::of(ledger)))
}
