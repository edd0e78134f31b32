//! Interactive cart session.
//!
//! One cart session stays open for the whole run, so the panel's open/closed
//! state behaves as in a storefront page: `open` shows the panel and keeps it
//! on screen, redrawn after every change, until `close`.
//!
//! Redraws are driven by a ledger subscription rather than by each handler:
//! any change to the cart marks the view dirty and the loop repaints once the
//! command finishes.

use super::render::{render_cards, render_cart_panel, render_messages, render_navbar};
use super::setup::{ShellCommand, ShellLine};
use clap::Parser;
use shopcart::api::{CartApi, CartSummary};
use shopcart::error::{CartError, Result};
use shopcart::store::KeyValueStore;
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

pub(super) fn run_shell<S, R, W>(api: &mut CartApi<S>, input: R, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    let subscription = api
        .session_mut()
        .cart_mut()?
        .subscribe(move |_| flag.set(true));

    write!(out, "{}", render_navbar(api.cart_quantity()?)).map_err(CartError::Io)?;

    for line in input.lines() {
        let line = line.map_err(CartError::Io)?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                write!(out, "{}", e).map_err(CartError::Io)?;
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }

        if let Err(e) = dispatch(api, command, out) {
            writeln!(out, "Error: {}", e).map_err(CartError::Io)?;
        }

        if dirty.replace(false) {
            let summary = api
                .cart()?
                .summary
                .unwrap_or_else(empty_summary);
            write!(out, "{}", render_navbar(summary.cart_quantity)).map_err(CartError::Io)?;
            if summary.is_open {
                write!(out, "{}", render_cart_panel(&summary)).map_err(CartError::Io)?;
            }
        }
    }

    api.session_mut().cart_mut()?.unsubscribe(subscription);
    Ok(())
}

fn dispatch<S: KeyValueStore, W: Write>(
    api: &mut CartApi<S>,
    command: ShellCommand,
    out: &mut W,
) -> Result<()> {
    let text = match command {
        ShellCommand::Add { ids } => render_messages(&api.increase_quantity(&ids)?.messages),
        ShellCommand::Dec { ids } => render_messages(&api.decrease_quantity(&ids)?.messages),
        ShellCommand::Rm { ids } => render_messages(&api.remove_from_cart(&ids)?.messages),
        ShellCommand::Card { ids } => render_cards(&api.product_cards(&ids)?.cards),
        ShellCommand::List => match api.cart()?.summary {
            Some(summary) => render_cart_panel(&summary),
            None => String::new(),
        },
        ShellCommand::Open => {
            api.open_cart()?;
            String::new()
        }
        ShellCommand::Close => {
            api.close_cart()?;
            String::new()
        }
        ShellCommand::Badge => render_navbar(api.cart_quantity()?),
        ShellCommand::Quit => String::new(),
    };
    write!(out, "{}", text).map_err(CartError::Io)
}

fn empty_summary() -> CartSummary {
    CartSummary {
        items: Vec::new(),
        cart_quantity: 0,
        is_open: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart::api::CartPaths;
    use shopcart::model::ProductId;
    use shopcart::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn test_api() -> CartApi<InMemoryStore> {
        CartApi::start(
            InMemoryStore::new(),
            "shopping-cart",
            CartPaths {
                data_dir: PathBuf::from("memory://"),
            },
        )
    }

    fn run_script(api: &mut CartApi<InMemoryStore>, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_shell(api, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn commands_change_the_cart() {
        let mut api = test_api();
        run_script(&mut api, "add 7\nadd 7 3\ndec 3\n");

        let ledger = api.session().cart().unwrap();
        assert_eq!(ledger.get_quantity(ProductId(7)), 2);
        assert_eq!(ledger.get_quantity(ProductId(3)), 0);
    }

    #[test]
    fn navbar_redrawn_after_changes() {
        let mut api = test_api();
        let out = run_script(&mut api, "add 1\nadd 1\n");
        assert!(out.contains("Cart  0"));
        assert!(out.contains("Cart  1"));
        assert!(out.contains("Cart  2"));
    }

    #[test]
    fn open_panel_follows_changes_until_closed() {
        let mut api = test_api();
        let out = run_script(&mut api, "open\nadd 5\nclose\nadd 6\n");

        assert!(out.contains("Product 5  x1"));
        assert_eq!(out.matches("Total items:").count(), 2);
        assert!(!api.session().cart().unwrap().is_open());
    }

    #[test]
    fn quit_stops_reading() {
        let mut api = test_api();
        run_script(&mut api, "add 1\nquit\nadd 2\n");
        assert_eq!(api.cart_quantity().unwrap(), 1);
    }

    #[test]
    fn bad_input_does_not_end_session() {
        let mut api = test_api();
        let out = run_script(&mut api, "add x\nfly\nadd 4\n");
        assert!(out.contains("Error: Api Error: Invalid product id: x"));
        assert_eq!(api.cart_quantity().unwrap(), 1);
    }

    #[test]
    fn card_shows_controls() {
        let mut api = test_api();
        let out = run_script(&mut api, "card 9\nadd 9\ncard 9\n");
        assert!(out.contains("[+ Add To Cart]"));
        assert!(out.contains("1 in cart"));
    }
}
