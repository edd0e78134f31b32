use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a product in the storefront catalog.
///
/// The catalog itself lives elsewhere; the cart only ever stores the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        ProductId(value)
    }
}

/// One product/quantity pairing in the cart.
///
/// Serialized as `{"id": 7, "quantity": 2}`, which is also the persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(id: ProductId, quantity: u32) -> Self {
        Self { id, quantity }
    }
}
