//! The invoice-creation screen controller.

use common::{CategoryId, ProductId};
use domain::{Cart, Catalog, CatalogFilter, Product, ValidationError, build_order, filter_catalog};

use crate::config::CheckoutConfig;
use crate::error::CheckoutError;
use crate::services::catalog::CatalogSource;
use crate::services::notify::{NoticeKind, Notifier};
use crate::services::orders::OrderGateway;

/// User-facing notice messages surfaced through the notifier.
const MSG_SERVER_ERROR: &str = "Erreur serveur.";
const MSG_SAVE_FAILED: &str = "Erreur lors de l'enregistrement.";
const MSG_INVOICE_SAVED: &str = "Facture enregistrée avec succès !";
const MSG_CLIENT_NAME_REQUIRED: &str = "Veuillez entrer le nom du client.";
const MSG_CART_EMPTY: &str = "Veuillez ajouter au moins un produit.";

fn validation_message(error: ValidationError) -> &'static str {
    match error {
        ValidationError::EmptyClientName => MSG_CLIENT_NAME_REQUIRED,
        ValidationError::EmptyCart => MSG_CART_EMPTY,
    }
}

/// Controller owning all mutable state of the invoice-creation screen.
///
/// Holds the catalog store, the cart ledger, the filter state, and the
/// client-name field, and drives the load → filter → mutate → submit
/// flow through the collaborator seams. Single-owner, single-threaded:
/// every mutation goes through `&mut self`, so a displayed total is
/// always derived from the mutation that preceded it.
pub struct InvoiceScreen<C, O, N>
where
    C: CatalogSource,
    O: OrderGateway,
    N: Notifier,
{
    config: CheckoutConfig,
    catalog_source: C,
    orders: O,
    notifier: N,

    catalog: Catalog,
    cart: Cart,
    filter: CatalogFilter,
    client_name: String,
}

impl<C, O, N> InvoiceScreen<C, O, N>
where
    C: CatalogSource,
    O: OrderGateway,
    N: Notifier,
{
    /// Creates a screen with an empty catalog and cart.
    pub fn new(config: CheckoutConfig, catalog_source: C, orders: O, notifier: N) -> Self {
        Self {
            config,
            catalog_source,
            orders,
            notifier,
            catalog: Catalog::default(),
            cart: Cart::new(),
            filter: CatalogFilter::default(),
            client_name: String::new(),
        }
    }

    /// Loads the catalog at screen entry.
    ///
    /// On failure the previous (possibly empty) catalog is retained and
    /// a notice is surfaced.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), CheckoutError> {
        match self.catalog_source.fetch_catalog().await {
            Ok(catalog) => {
                tracing::info!(
                    products = catalog.products.len(),
                    categories = catalog.categories.len(),
                    "catalog loaded"
                );
                self.catalog = catalog;
                Ok(())
            }
            Err(e) => {
                metrics::counter!("catalog_fetch_failed").increment(1);
                tracing::warn!(error = %e, "catalog fetch failed");
                self.notifier.notify(NoticeKind::Error, MSG_SERVER_ERROR);
                Err(e.into())
            }
        }
    }

    /// Updates the free-text search.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    /// Selects a category, or clears the selection with `None`.
    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.filter.category = category;
    }

    /// Updates the client-name field.
    pub fn set_client_name(&mut self, name: impl Into<String>) {
        self.client_name = name.into();
    }

    /// Derives the products currently offered for sale.
    ///
    /// Recomputed on every read from the catalog store and the current
    /// filter state; out-of-stock products are never offered.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_catalog(&self.catalog.products, &self.filter)
    }

    /// Adds one unit of a catalog product to the cart.
    ///
    /// Unknown and out-of-stock products are rejected by policy and
    /// leave the ledger untouched; returns whether a line was added or
    /// incremented.
    pub fn add_product(&mut self, id: ProductId) -> bool {
        let Some(product) = self.catalog.product(id) else {
            tracing::debug!(%id, "add ignored: unknown product");
            return false;
        };
        if !product.in_stock() {
            tracing::debug!(%id, "add ignored: out of stock");
            return false;
        }

        let product = product.clone();
        self.cart.add(&product);
        true
    }

    /// Removes a product's line from the cart entirely.
    pub fn remove_product(&mut self, id: ProductId) {
        self.cart.remove(id);
    }

    /// Returns the cart total, recomputed from the ledger.
    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// Resolves a product's display image against the configured API
    /// base URL. Malformed image data yields `None`.
    pub fn image_url(&self, product: &Product) -> Option<String> {
        product
            .primary_image()
            .map(|path| self.config.image_url(&path))
    }

    /// Submits the invoice.
    ///
    /// Validation failures surface a notice and leave everything
    /// untouched. A gateway failure keeps the cart and client name so
    /// the user can retry. On success the cart and client name are
    /// cleared and the catalog is refreshed to pick up stock changes; a
    /// refresh failure keeps the previous catalog without undoing the
    /// completed submission.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<(), CheckoutError> {
        metrics::counter!("invoice_submissions_total").increment(1);
        let start = std::time::Instant::now();

        let payload = match build_order(&self.client_name, &self.cart) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(error = %e, "submission rejected by validation");
                self.notifier
                    .notify(NoticeKind::Error, validation_message(e));
                return Err(e.into());
            }
        };

        if let Err(e) = self.orders.submit_order(&payload).await {
            metrics::counter!("invoice_submit_failed").increment(1);
            tracing::warn!(error = %e, "invoice submission failed");
            self.notifier.notify(NoticeKind::Error, MSG_SAVE_FAILED);
            return Err(e.into());
        }

        metrics::histogram!("invoice_submit_duration_seconds")
            .record(start.elapsed().as_secs_f64());
        tracing::info!(lines = payload.produits.len(), "invoice saved");
        self.notifier.notify(NoticeKind::Success, MSG_INVOICE_SAVED);

        self.cart.clear();
        self.client_name.clear();

        // Refresh the catalog so freed or consumed stock becomes
        // visible. The submission already succeeded; a refresh failure
        // only surfaces a notice and keeps the previous catalog.
        match self.catalog_source.fetch_catalog().await {
            Ok(catalog) => {
                metrics::counter!("catalog_refreshes_total").increment(1);
                self.catalog = catalog;
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog refresh failed");
                self.notifier.notify(NoticeKind::Error, MSG_SERVER_ERROR);
            }
        }

        Ok(())
    }

    /// Returns the catalog store.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the cart ledger.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns the current client-name field.
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Returns the current filter state.
    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }
}
