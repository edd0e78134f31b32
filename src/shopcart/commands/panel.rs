use crate::commands::{CartSummary, CmdResult};
use crate::error::Result;
use crate::ledger::CartLedger;
use crate::store::KeyValueStore;

pub fn open<S: KeyValueStore>(ledger: &mut CartLedger<S>) -> Result<CmdResult> {
    ledger.open_cart();
    Ok(CmdResult::default().with_summary(CartSummary::of(ledger)))
}

pub fn close<S: KeyValueStore>(ledger: &mut CartLedger<S>) -> Result<CmdResult> {
    ledger.close_cart();
    Ok(CmdResult::default().with_summary(CartSummary::of(ledger)))
}
