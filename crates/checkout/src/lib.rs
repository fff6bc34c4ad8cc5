//! Orchestration surface for the POS invoice-creation screen.
//!
//! This crate connects the pure core in `domain` to its external
//! collaborators:
//! 1. Load the catalog at screen entry
//! 2. Offer the filtered, in-stock subset for sale
//! 3. Mutate the cart ledger on user actions
//! 4. Assemble, validate, and submit the invoice; reset and refresh on
//!    success
//!
//! The remote API is consumed only through the [`services`] seams; no
//! HTTP client, rendering, or routing lives here.

pub mod config;
pub mod error;
pub mod screen;
pub mod services;

pub use config::CheckoutConfig;
pub use error::{CheckoutError, TransportError};
pub use screen::InvoiceScreen;
pub use services::{
    CatalogSource, InMemoryCatalogSource, InMemoryOrderGateway, Notice, NoticeKind, Notifier,
    OrderGateway, RecordingNotifier,
};
