//! # Rendering Module
//!
//! Turns API results into terminal text. Every function returns a `String` so
//! the shell can write to any sink and tests can compare output directly.
//!
//! The three storefront views:
//! - **navbar**: page links plus the cart badge with the total quantity
//! - **product card**: `+ Add To Cart` while the product isn't in the cart,
//!   otherwise `[-] N in cart [+]` and a `Remove` button
//! - **cart panel**: the line items in insertion order and the total

use colored::Colorize;
use shopcart::api::{CartSummary, CmdMessage, MessageLevel, ProductCard};

pub const NAV_WIDTH: usize = 60;
const NAV_LINKS: &str = "Home   Store   About";
const CART_LABEL: &str = "Cart";
const PANEL_RULE: &str = "────────────────────────────";

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn render_navbar(cart_quantity: u32) -> String {
    let badge = format!(" {} ", cart_quantity);
    let used = NAV_LINKS.len() + CART_LABEL.len() + 1 + badge.len();
    let padding = NAV_WIDTH.saturating_sub(used).max(1);

    format!(
        "{}{}{} {}\n",
        NAV_LINKS,
        " ".repeat(padding),
        CART_LABEL.bold(),
        badge.white().on_red()
    )
}

pub(super) fn render_card(card: &ProductCard) -> String {
    let mut out = format!("{}\n", format!("Product {}", card.id).bold());
    if card.quantity == 0 {
        out.push_str(&format!("  {}\n", "[+ Add To Cart]".blue()));
    } else {
        out.push_str(&format!(
            "  {}  {} in cart  {}\n",
            "[-]".blue(),
            card.quantity.to_string().bold(),
            "[+]".blue()
        ));
        out.push_str(&format!("  {}\n", "[Remove]".red()));
    }
    out
}

pub(super) fn render_cards(cards: &[ProductCard]) -> String {
    cards
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn render_cart_panel(summary: &CartSummary) -> String {
    let mut out = format!("{}\n{}\n", "Cart".bold(), PANEL_RULE);

    if summary.items.is_empty() {
        out.push_str(&format!("  {}\n", "Your cart is empty.".dimmed()));
    } else {
        let id_width = summary
            .items
            .iter()
            .map(|item| item.id.to_string().len())
            .max()
            .unwrap_or(0);
        for item in &summary.items {
            out.push_str(&format!(
                "  Product {:<width$}  x{}\n",
                item.id.to_string(),
                item.quantity,
                width = id_width
            ));
        }
    }

    out.push_str(&format!("{}\n", PANEL_RULE));
    out.push_str(&format!("  Total items: {}\n", summary.cart_quantity));
    out
}
