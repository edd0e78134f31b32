use crate::commands::{CartSummary, CmdResult, ProductCard};
use crate::error::Result;
use crate::ledger::CartLedger;
use crate::model::ProductId;
use crate::store::KeyValueStore;

/// Product-card state for each of `ids`.
pub fn quantity<S: KeyValueStore>(ledger: &CartLedger<S>, ids: &[ProductId]) -> Result<CmdResult> {
    let cards = ids
        .iter()
        .map(|&id| ProductCard {
            id,
            quantity: ledger.get_quantity(id),
        })
        .collect();
    Ok(CmdResult::default().with_cards(cards))
}

pub fn list<S: KeyValueStore>(ledger: &CartLedger<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_summary(CartSummary::of(ledger)))
}
