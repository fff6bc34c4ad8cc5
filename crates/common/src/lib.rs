//! Shared types for the POS invoicing core.

mod types;

pub use types::{CategoryId, ProductId};
