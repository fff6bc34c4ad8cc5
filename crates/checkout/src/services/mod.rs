//! External collaborator traits and in-memory implementations.
//!
//! The remote POS API and the toast presenter are consumed through
//! these seams only; the concrete HTTP client lives outside this crate.

pub mod catalog;
pub mod notify;
pub mod orders;

pub use catalog::{CatalogSource, InMemoryCatalogSource};
pub use notify::{Notice, NoticeKind, Notifier, RecordingNotifier};
pub use orders::{InMemoryOrderGateway, OrderGateway};
