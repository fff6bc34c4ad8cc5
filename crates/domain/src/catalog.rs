//! Product catalog snapshots as served by the remote API.

use common::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// A product as received from the catalog endpoint.
///
/// Field names follow the upstream wire format. The snapshot is
/// immutable once fetched; stock changes only become visible through a
/// catalog refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream product id.
    pub id: ProductId,

    /// Display name.
    pub nom: String,

    /// Unit sale price. Non-negative.
    pub prix_vente: f64,

    /// Available stock. Zero means the product is out of stock and
    /// must not be offered for sale.
    pub quantite: u32,

    /// Category reference, if the product is categorized.
    #[serde(default)]
    pub categorie_id: Option<CategoryId>,

    /// Raw image field: a JSON-encoded list of image paths, served as
    /// a string. May be absent or malformed.
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Returns true if at least one unit is in stock.
    pub fn in_stock(&self) -> bool {
        self.quantite > 0
    }

    /// Decodes the embedded image-path list.
    ///
    /// The upstream API stores the list as a JSON string inside the
    /// product row. Absent or malformed data yields an empty list,
    /// never an error.
    pub fn image_paths(&self) -> Vec<String> {
        self.image
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    /// Returns the first image path, if any.
    pub fn primary_image(&self) -> Option<String> {
        self.image_paths().into_iter().next()
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Upstream category id.
    pub id: CategoryId,

    /// Display name.
    pub nom: String,
}

/// The catalog store: all products and categories available for sale.
///
/// Replaced wholesale on fetch and on the post-submission refresh;
/// never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Products available for sale, in upstream order.
    #[serde(default)]
    pub products: Vec<Product>,

    /// Known categories.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Creates a catalog from fetched products and categories.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Looks up a product snapshot by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a category by id.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Returns true if no products have been loaded.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
