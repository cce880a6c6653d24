//! In-memory cart keyed by plant id.
//!
//! Lines stay in the order plants were first added. Adding a plant that
//! already has a line bumps its quantity instead of appending, so the cart
//! never holds two lines for one id.

use crate::catalog::{Plant, PlantId, Price};

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub plant: Plant,
    pub quantity: u32,
}

impl CartLine {
    pub fn id(&self) -> PlantId {
        self.plant.id
    }

    pub fn line_total(&self) -> Price {
        self.plant.price.times(self.quantity)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `plant`; returns the line's new quantity.
    pub fn add(&mut self, plant: &Plant) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id() == plant.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine {
            plant: plant.clone(),
            quantity: 1,
        });
        1
    }

    /// Remove the line at `index`. Out-of-range indexes leave the cart
    /// untouched and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<CartLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line_for(&self, id: PlantId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn plant(id: u64, name: &str, price: u64) -> Plant {
        Plant {
            id: PlantId(id),
            name: name.to_string(),
            category: Category::from("Tree"),
            price: Price::from_major(price),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn repeated_add_aggregates_into_one_line() {
        let mut cart = CartStore::new();
        let a = plant(1, "A", 100);
        assert_eq!(cart.add(&a), 1);
        assert_eq!(cart.add(&a), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), Price::from_major(200));
    }

    #[test]
    fn remove_keeps_relative_order_of_the_rest() {
        let mut cart = CartStore::new();
        for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
            cart.add(&plant(id, name, 10));
        }
        let removed = cart.remove(1).expect("line present");
        assert_eq!(removed.plant.name, "B");
        let names: Vec<&str> = cart.lines().iter().map(|l| l.plant.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn out_of_range_remove_is_a_no_op() {
        let mut cart = CartStore::new();
        cart.add(&plant(1, "A", 10));
        assert!(cart.remove(5).is_none());
        assert_eq!(cart.len(), 1);
        assert!(CartStore::new().remove(0).is_none());
    }

    #[test]
    fn totals_follow_price_times_quantity() {
        let mut cart = CartStore::new();
        let a = plant(1, "A", 100);
        let b = plant(2, "B", 250);
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);
        assert_eq!(cart.total(), Price::from_major(450));
        assert_eq!(cart.item_count(), 3);
        cart.remove(0);
        assert_eq!(cart.total(), Price::from_major(250));
        assert_eq!(cart.line_for(PlantId(2)).map(|l| l.quantity), Some(1));
    }
}
