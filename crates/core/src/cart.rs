//! Per-session shopping cart.
//!
//! A cart is an insertion-ordered list of lines, at most one per product.
//! Every line holds a quantity of at least one: any change that would take a
//! line to zero removes it instead. All operations are total.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::Price;

/// A product paired with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in first-added order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line or appends a new one with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
    }

    /// Remove the line for `id`. No-op if absent.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero or less removes the line. Setting a positive
    /// quantity on an absent product does nothing. Quantities above
    /// `u32::MAX` are capped at `u32::MAX`.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == id) {
            line.quantity = quantity;
        }
    }

    /// Total units across all lines (the header badge), saturating at
    /// `u32::MAX`.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::Catalog;

    fn product(catalog: &Catalog, id: &str) -> Product {
        catalog.find_by_id(id).unwrap().clone()
    }

    fn quantities(cart: &Cart) -> Vec<(String, u32)> {
        cart.lines()
            .iter()
            .map(|line| (line.product.id.to_string(), line.quantity))
            .collect()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal().amount(), Decimal::ZERO);
    }

    #[test]
    fn test_add_distinct_products_appends_lines() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        for id in ["3", "12", "19", "1"] {
            cart.add(&product(&catalog, id));
        }

        assert_eq!(
            quantities(&cart),
            vec![
                ("3".to_string(), 1),
                ("12".to_string(), 1),
                ("19".to_string(), 1),
                ("1".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_add_counts_repeats() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        let adds = ["5", "8", "5", "5", "8", "20"];
        for id in adds {
            cart.add(&product(&catalog, id));
        }

        assert_eq!(cart.lines().len(), 3);
        for line in cart.lines() {
            let expected = adds.iter().filter(|&&id| line.product.id == id).count();
            assert_eq!(line.quantity as usize, expected);
        }
    }

    #[test]
    fn test_add_same_product_twice_is_one_line() {
        let catalog = Catalog::seeded().unwrap();
        let tee = product(&catalog, "1");
        let mut cart = Cart::new();
        cart.add(&tee);
        cart.add(&tee);

        assert_eq!(quantities(&cart), vec![("1".to_string(), 2)]);
    }

    #[test]
    fn test_remove() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add(&product(&catalog, "1"));
        cart.add(&product(&catalog, "2"));

        cart.remove("1");
        assert_eq!(quantities(&cart), vec![("2".to_string(), 1)]);

        let before = cart.clone();
        cart.remove("404");
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add(&product(&catalog, "1"));
        cart.add(&product(&catalog, "2"));

        cart.update_quantity("1", 0);
        assert!(cart.line("1").is_none());

        cart.update_quantity("2", -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add(&product(&catalog, "9"));

        cart.update_quantity("9", 4);
        assert_eq!(cart.line("9").unwrap().quantity, 4);

        cart.update_quantity("9", 1);
        assert_eq!(cart.line("9").unwrap().quantity, 1);
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add(&product(&catalog, "1"));
        let before = cart.clone();

        cart.update_quantity("7", 3);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_keeps_order() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        for id in ["1", "2", "3"] {
            cart.add(&product(&catalog, id));
        }
        cart.update_quantity("1", 5);

        let order: Vec<String> = quantities(&cart).into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_oversized_quantity_is_capped() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add(&product(&catalog, "1"));
        cart.add(&product(&catalog, "7"));

        cart.update_quantity("1", i64::MAX);
        assert_eq!(cart.line("1").unwrap().quantity, u32::MAX);
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_derived_totals() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add(&product(&catalog, "12")); // $35
        cart.add(&product(&catalog, "21")); // $15
        cart.update_quantity("21", 3);

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.subtotal().amount(), Decimal::from(35 + 15 * 3));

        let by_lines: Decimal = cart.lines().iter().map(|l| l.line_total().amount()).sum();
        assert_eq!(cart.subtotal().amount(), by_lines);
    }

    #[test]
    fn test_checkout_scenario() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add(&product(&catalog, "1"));
        cart.add(&product(&catalog, "1"));
        cart.add(&product(&catalog, "7"));

        assert_eq!(
            quantities(&cart),
            vec![("1".to_string(), 2), ("7".to_string(), 1)]
        );
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal().amount(), Decimal::from(210));
        assert_eq!(cart.subtotal().to_string(), "$210.00");
    }

    #[test]
    fn test_serde_round_trip_preserves_lines() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add(&product(&catalog, "26"));
        cart.add(&product(&catalog, "26"));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
