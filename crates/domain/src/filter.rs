//! Pure filtering of the catalog into the visible product subset.

use common::CategoryId;

use crate::catalog::Product;

/// The filter state driving which products are offered for sale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Free-text search over product names. Empty matches everything.
    pub search_text: String,

    /// Selected category, if any. `None` matches every category.
    pub category: Option<CategoryId>,
}

impl CatalogFilter {
    /// Returns true if the product should be offered under this filter.
    ///
    /// A product matches when its name contains the search text
    /// case-insensitively, its category equals the selected one (or no
    /// category is selected), and it has stock. An uncategorized
    /// product never matches a selected category, and out-of-stock
    /// products are always excluded.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = product
            .nom
            .to_lowercase()
            .contains(&self.search_text.to_lowercase());
        let matches_category = self
            .category
            .is_none_or(|selected| product.categorie_id == Some(selected));

        matches_search && matches_category && product.in_stock()
    }
}

/// Derives the visible product subset, preserving input order.
///
/// Pure; the catalog is never modified and no error path exists.
pub fn filter_catalog<'a>(products: &'a [Product], filter: &CatalogFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ProductId;

    fn product(id: i64, nom: &str, stock: u32, category: Option<i64>) -> Product {
        Product {
            id: ProductId::new(id),
            nom: nom.to_string(),
            prix_vente: 100.0,
            quantite: stock,
            categorie_id: category.map(CategoryId::new),
            image: None,
        }
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.as_i64()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all_in_stock() {
        let products = vec![
            product(1, "Chaise", 3, Some(1)),
            product(2, "Table", 0, Some(1)),
            product(3, "Armoire", 2, None),
        ];

        let visible = filter_catalog(&products, &CatalogFilter::default());
        assert_eq!(ids(&visible), vec![1, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = vec![
            product(1, "Chaise de bureau", 1, None),
            product(2, "Table", 1, None),
        ];

        let filter = CatalogFilter {
            search_text: "CHAISE".to_string(),
            category: None,
        };
        assert_eq!(ids(&filter_catalog(&products, &filter)), vec![1]);

        let filter = CatalogFilter {
            search_text: "bureau".to_string(),
            category: None,
        };
        assert_eq!(ids(&filter_catalog(&products, &filter)), vec![1]);
    }

    #[test]
    fn test_category_filter() {
        let products = vec![
            product(1, "Chaise", 1, Some(1)),
            product(2, "Clavier", 1, Some(2)),
            product(3, "Divers", 1, None),
        ];

        let filter = CatalogFilter {
            search_text: String::new(),
            category: Some(CategoryId::new(2)),
        };
        assert_eq!(ids(&filter_catalog(&products, &filter)), vec![2]);
    }

    #[test]
    fn test_uncategorized_product_never_matches_a_selected_category() {
        let products = vec![product(1, "Divers", 1, None)];

        let filter = CatalogFilter {
            search_text: String::new(),
            category: Some(CategoryId::new(1)),
        };
        assert!(filter_catalog(&products, &filter).is_empty());
    }

    #[test]
    fn test_out_of_stock_never_visible() {
        let products = vec![product(1, "Chaise", 0, Some(1))];

        // No combination of search/category filters may surface it.
        let filters = [
            CatalogFilter::default(),
            CatalogFilter {
                search_text: "chaise".to_string(),
                category: None,
            },
            CatalogFilter {
                search_text: String::new(),
                category: Some(CategoryId::new(1)),
            },
        ];
        for filter in filters {
            assert!(filter_catalog(&products, &filter).is_empty());
        }
    }

    #[test]
    fn test_order_preserved() {
        let products = vec![
            product(3, "Chaise haute", 1, None),
            product(1, "Chaise basse", 1, None),
            product(2, "Chaise pliante", 1, None),
        ];

        let filter = CatalogFilter {
            search_text: "chaise".to_string(),
            category: None,
        };
        assert_eq!(ids(&filter_catalog(&products, &filter)), vec![3, 1, 2]);
    }
}
