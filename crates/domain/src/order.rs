//! Assembling the final order payload from the cart.

use common::ProductId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;

/// Errors raised while assembling an order payload.
///
/// These are recovered locally and never reach the network; the cart
/// and catalog are untouched when assembly fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The client name is empty after trimming whitespace.
    #[error("client name is required")]
    EmptyClientName,

    /// The cart has no lines.
    #[error("cart has no lines")]
    EmptyCart,
}

/// One payload line, referencing a product by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product the line refers to.
    pub produit_id: ProductId,

    /// Requested quantity.
    pub quantite: u32,
}

/// The finalized invoice data sent to the remote order API.
///
/// Built only at submission time and never mutated afterwards. Field
/// names match the upstream save endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Trimmed, non-empty client name.
    pub nom_client: String,

    /// Cart lines in insertion order.
    pub produits: Vec<OrderLine>,
}

/// Builds the order payload for the given client and cart.
///
/// The client name is trimmed; an empty result or an empty cart fails
/// validation. On success the payload carries one line per cart line,
/// preserving cart order. Pure — submitting the payload and the
/// subsequent state reset belong to the calling surface.
pub fn build_order(client_name: &str, cart: &Cart) -> Result<OrderPayload, ValidationError> {
    let nom_client = client_name.trim();
    if nom_client.is_empty() {
        return Err(ValidationError::EmptyClientName);
    }
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    Ok(OrderPayload {
        nom_client: nom_client.to_string(),
        produits: cart
            .lines()
            .map(|line| OrderLine {
                produit_id: line.product.id,
                quantite: line.quantite,
            })
            .collect(),
    })
}
