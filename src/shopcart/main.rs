//! # Shopcart CLI
//!
//! The binary is intentionally thin: the terminal client lives in `cli/`, and
//! this file only invokes `cli::run()` and handles process termination.
//!
//! The CLI plays the part of the storefront views. `badge` is the navigation
//! bar with the cart counter, `card` shows a product card's quantity controls,
//! `list` is the cart panel, and `shell` keeps one cart session open for a
//! sequence of clicks typed on stdin.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
