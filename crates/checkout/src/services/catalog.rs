//! Catalog source trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::Catalog;

use crate::error::TransportError;

/// Trait for fetching the product catalog from the remote API.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the full catalog (products and categories).
    ///
    /// Fails with [`TransportError`] on network failure or a
    /// non-success response; callers must leave their prior catalog
    /// unchanged in that case.
    async fn fetch_catalog(&self) -> Result<Catalog, TransportError>;
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    catalog: Catalog,
    fail_on_fetch: bool,
    fetch_count: u32,
}

/// In-memory catalog source for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

impl InMemoryCatalogSource {
    /// Creates a source serving an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source serving the given catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let source = Self::default();
        source.set_catalog(catalog);
        source
    }

    /// Replaces the catalog served by subsequent fetches.
    pub fn set_catalog(&self, catalog: Catalog) {
        self.state.write().unwrap().catalog = catalog;
    }

    /// Configures the source to fail on subsequent fetch calls.
    pub fn set_fail_on_fetch(&self, fail: bool) {
        self.state.write().unwrap().fail_on_fetch = fail;
    }

    /// Returns how many fetches have been attempted.
    pub fn fetch_count(&self) -> u32 {
        self.state.read().unwrap().fetch_count
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, TransportError> {
        let mut state = self.state.write().unwrap();
        state.fetch_count += 1;

        if state.fail_on_fetch {
            return Err(TransportError::Network("connection refused".to_string()));
        }

        Ok(state.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ProductId;
    use domain::Product;

    fn catalog_with_one_product() -> Catalog {
        Catalog::new(
            vec![Product {
                id: ProductId::new(1),
                nom: "Chaise".to_string(),
                prix_vente: 500.0,
                quantite: 3,
                categorie_id: None,
                image: None,
            }],
            vec![],
        )
    }

    #[tokio::test]
    async fn test_fetch_returns_configured_catalog() {
        let source = InMemoryCatalogSource::with_catalog(catalog_with_one_product());

        let catalog = source.fetch_catalog().await.unwrap();
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_fail_on_fetch() {
        let source = InMemoryCatalogSource::new();
        source.set_fail_on_fetch(true);

        let result = source.fetch_catalog().await;
        assert!(matches!(result, Err(TransportError::Network(_))));
        assert_eq!(source.fetch_count(), 1);

        source.set_fail_on_fetch(false);
        assert!(source.fetch_catalog().await.is_ok());
        assert_eq!(source.fetch_count(), 2);
    }
}
