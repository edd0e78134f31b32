//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for cart operations, whichever UI drives them: the navbar badge,
//! a product card and the cart panel all go through the same methods.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Guards access** to the cart through the [`CartSession`]; a facade whose
//!   session has not begun answers every cart call with
//!   [`CartError::NotInitialized`]
//! - **Normalizes inputs** (product id strings → [`ProductId`])
//! - **Dispatches** to the matching `commands::*` function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business rules live in the ledger and the commands, not here.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `CartApi<FileStore>`
//! - Testing: `CartApi<InMemoryStore>`

use crate::commands;
use crate::error::{CartError, Result};
use crate::model::ProductId;
use crate::session::CartSession;
use crate::store::KeyValueStore;

/// The main API facade for cart operations.
pub struct CartApi<S: KeyValueStore> {
    session: CartSession<S>,
    paths: commands::CartPaths,
}

impl<S: KeyValueStore> CartApi<S> {
    pub fn new(session: CartSession<S>, paths: commands::CartPaths) -> Self {
        Self { session, paths }
    }

    /// Begin a session on `store` and wrap it in a facade.
    pub fn start(store: S, key: impl Into<String>, paths: commands::CartPaths) -> Self {
        let mut session = CartSession::new();
        session.begin(store, key);
        Self::new(session, paths)
    }

    pub fn increase_quantity<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::increase::run(self.session.cart_mut()?, &ids)
    }

    pub fn decrease_quantity<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::decrease::run(self.session.cart_mut()?, &ids)
    }

    pub fn remove_from_cart<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::remove::run(self.session.cart_mut()?, &ids)
    }

    pub fn product_cards<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::view::quantity(self.session.cart()?, &ids)
    }

    pub fn cart(&self) -> Result<commands::CmdResult> {
        commands::view::list(self.session.cart()?)
    }

    pub fn cart_quantity(&self) -> Result<u32> {
        Ok(self.session.cart()?.cart_quantity())
    }

    pub fn open_cart(&mut self) -> Result<commands::CmdResult> {
        commands::panel::open(self.session.cart_mut()?)
    }

    pub fn close_cart(&mut self) -> Result<commands::CmdResult> {
        commands::panel::close(self.session.cart_mut()?)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn session(&self) -> &CartSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut CartSession<S> {
        &mut self.session
    }

    pub fn paths(&self) -> &commands::CartPaths {
        &self.paths
    }
}

/// Parse product ids given as text. Rejects the whole batch on the first bad id.
pub fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ProductId>> {
    if inputs.is_empty() {
        return Err(CartError::Api("No product ids given".to_string()));
    }
    inputs
        .iter()
        .map(|s| {
            s.as_ref()
                .parse::<ProductId>()
                .map_err(|_| CartError::Api(format!("Invalid product id: {}", s.as_ref())))
        })
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CartPaths, CartSummary, CmdMessage, CmdResult, MessageLevel, ProductCard,
};
