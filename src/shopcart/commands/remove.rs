use crate::commands::{report_write_failure, CartSummary, CmdMessage, CmdResult};
use crate::error::Result;
use crate::ledger::CartLedger;
use crate::model::{LineItem, ProductId};
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(ledger: &mut CartLedger<S>, ids: &[ProductId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let removed = ledger.remove_from_cart(id);
        if removed == 0 {
            result.add_message(CmdMessage::info(format!(
                "Product {} is not in the cart",
                id
            )));
            continue;
        }
        result.add_message(CmdMessage::success(format!(
            "Removed product {} from cart ({} units)",
            id, removed
        )));
        result.affected_items.push(LineItem::new(id, removed));
    }

    report_write_failure(ledger, &mut result);
    Ok(result.with_summary(CartSummary::of(ledger)))
}
