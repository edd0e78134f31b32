use crate::config::CartConfig;
use crate::ledger::CartLedger;
use crate::model::{LineItem, ProductId};
use crate::store::KeyValueStore;
use std::path::PathBuf;

pub mod config;
pub mod decrease;
pub mod increase;
pub mod panel;
pub mod remove;
pub mod view;

#[derive(Debug, Clone)]
pub struct CartPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a product card needs: the product and how many are in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub quantity: u32,
}

/// Cart-wide state for the badge and the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub items: Vec<LineItem>,
    pub cart_quantity: u32,
    pub is_open: bool,
}

impl CartSummary {
    pub fn of<S: KeyValueStore>(ledger: &CartLedger<S>) -> Self {
        Self {
            items: ledger.cart_items().to_vec(),
            cart_quantity: ledger.cart_quantity(),
            is_open: ledger.is_open(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<LineItem>,
    pub cards: Vec<ProductCard>,
    pub summary: Option<CartSummary>,
    pub config: Option<CartConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_cards(mut self, cards: Vec<ProductCard>) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_summary(mut self, summary: CartSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_config(mut self, config: CartConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Turn a write failure parked on the ledger into a warning on `result`.
pub(crate) fn report_write_failure<S: KeyValueStore>(
    ledger: &mut CartLedger<S>,
    result: &mut CmdResult,
) {
    if let Some(e) = ledger.take_write_failure() {
        result.add_message(CmdMessage::warning(format!(
            "Cart could not be saved: {}",
            e
        )));
    }
}
