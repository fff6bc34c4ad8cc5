//! The cart ledger: product selections for the invoice being built.

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// One selected product and its requested quantity.
///
/// The product is a snapshot taken when the line was first added;
/// incrementing the quantity never refreshes the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product snapshot as it was when added.
    pub product: Product,

    /// Requested quantity, always at least 1.
    pub quantite: u32,
}

impl CartLine {
    /// Returns the line total (unit price times quantity).
    pub fn line_total(&self) -> f64 {
        self.product.prix_vente * f64::from(self.quantite)
    }
}

/// Ordered collection of cart lines, keyed by product id.
///
/// Invariants: at most one line per product id; a line's quantity never
/// reaches 0 in place (removal deletes the line); iteration order is
/// the order products were first added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of the product.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented, otherwise a new line with quantity 1 is appended.
    /// The increment is not bounded by the snapshot's available stock;
    /// gating additions on stock is the caller's responsibility.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantite += 1;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantite: 1,
            });
        }
    }

    /// Removes the whole line for the given product, regardless of its
    /// quantity. Unknown ids are a no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Returns the line for a product, if present.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantite).sum()
    }

    /// Recomputes the cart total from scratch.
    ///
    /// The total is a derived view: it is never stored, so it cannot
    /// drift from the lines regardless of mutation history.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, prix: f64) -> Product {
        Product {
            id: ProductId::new(id),
            nom: format!("Produit {id}"),
            prix_vente: prix,
            quantite: 3,
            categorie_id: None,
            image: None,
        }
    }

    #[test]
    fn test_add_new_product_appends_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 500.0));

        assert_eq!(cart.len(), 1);
        let line = cart.line(ProductId::new(1)).unwrap();
        assert_eq!(line.quantite, 1);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 500.0);
        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(p.id).unwrap().quantite, 2);
        assert_eq!(cart.total(), 1000.0);
    }

    #[test]
    fn test_increment_keeps_original_snapshot() {
        let mut cart = Cart::new();
        let mut p = product(1, 500.0);
        cart.add(&p);

        // A later add with drifted snapshot fields only bumps the count.
        p.prix_vente = 900.0;
        p.nom = "Renamed".to_string();
        cart.add(&p);

        let line = cart.line(p.id).unwrap();
        assert_eq!(line.quantite, 2);
        assert_eq!(line.product.prix_vente, 500.0);
        assert_eq!(line.product.nom, "Produit 1");
    }

    #[test]
    fn test_quantity_equals_number_of_adds() {
        let mut cart = Cart::new();
        let a = product(1, 100.0);
        let b = product(2, 200.0);

        for _ in 0..5 {
            cart.add(&a);
        }
        for _ in 0..3 {
            cart.add(&b);
        }

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.line(a.id).unwrap().quantite, 5);
        assert_eq!(cart.line(b.id).unwrap().quantite, 3);
        assert_eq!(cart.total_quantity(), 8);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = Cart::new();
        let p = product(1, 500.0);
        cart.add(&p);
        cart.add(&p);
        cart.add(&product(2, 100.0));

        cart.remove(p.id);

        assert_eq!(cart.len(), 1);
        assert!(cart.line(p.id).is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.remove(ProductId::new(99));
        assert!(cart.is_empty());

        cart.add(&product(1, 500.0));
        cart.remove(ProductId::new(99));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&product(3, 1.0));
        cart.add(&product(1, 1.0));
        cart.add(&product(2, 1.0));
        cart.add(&product(1, 1.0)); // increment must not reorder

        let order: Vec<i64> = cart.lines().map(|l| l.product.id.as_i64()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_total_empty_cart_is_zero() {
        assert_eq!(Cart::new().total(), 0.0);
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        let mut cart = Cart::new();
        let a = product(1, 500.0);
        let b = product(2, 250.5);
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.total(), 2.0 * 500.0 + 250.5);
    }

    #[test]
    fn test_add_then_remove_restores_total() {
        let mut cart = Cart::new();
        cart.add(&product(1, 500.0));
        let before = cart.total();

        let extra = product(2, 321.0);
        cart.add(&extra);
        cart.add(&extra);
        cart.remove(extra.id);

        assert_eq!(cart.total(), before);
    }

    #[test]
    fn test_increment_not_bounded_by_stock() {
        // The ledger itself does not check the snapshot's remaining
        // stock when incrementing; that gate lives with the caller.
        let mut cart = Cart::new();
        let p = product(1, 10.0); // quantite (stock) is 3
        for _ in 0..10 {
            cart.add(&p);
        }
        assert_eq!(cart.line(p.id).unwrap().quantite, 10);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, 500.0));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
