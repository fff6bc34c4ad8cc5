//! Core state for the POS invoice-creation screen.
//!
//! This crate provides the pure parts of the screen:
//! - Catalog store with product and category snapshots
//! - Filter engine deriving the visible product subset
//! - Cart ledger with its derived, always-recomputed total
//! - Order payload assembly with local validation
//!
//! Everything here is synchronous and side-effect free; fetching the
//! catalog and submitting orders live behind the collaborator seams in
//! the `checkout` crate.

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod order;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Category, Product};
pub use filter::{CatalogFilter, filter_catalog};
pub use order::{OrderLine, OrderPayload, ValidationError, build_order};
