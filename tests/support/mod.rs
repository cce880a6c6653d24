#![allow(dead_code)]

use anyhow::Result;
use plantcart::{CartView, CategoryEntry, PlantCard, PlantDetail, Surface};
use serde_json::{Value, json};

// Surface double that records every render so tests can assert on the
// sequence of views the storefront produced.
#[derive(Default)]
pub struct RecordingSurface {
    pub loading: Vec<bool>,
    pub categories: Vec<Vec<CategoryEntry>>,
    pub catalogs: Vec<Vec<PlantCard>>,
    pub details: Vec<Option<PlantDetail>>,
    pub carts: Vec<CartView>,
}

impl RecordingSurface {
    pub fn last_catalog(&self) -> &[PlantCard] {
        self.catalogs.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_categories(&self) -> &[CategoryEntry] {
        self.categories.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_cart(&self) -> Option<&CartView> {
        self.carts.last()
    }

    pub fn active_labels(&self) -> Vec<String> {
        self.last_categories()
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.label.clone())
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_loading(&mut self, visible: bool) -> Result<()> {
        self.loading.push(visible);
        Ok(())
    }

    fn render_categories(&mut self, entries: &[CategoryEntry]) -> Result<()> {
        self.categories.push(entries.to_vec());
        Ok(())
    }

    fn render_catalog(&mut self, cards: &[PlantCard]) -> Result<()> {
        self.catalogs.push(cards.to_vec());
        Ok(())
    }

    fn render_detail(&mut self, detail: Option<&PlantDetail>) -> Result<()> {
        self.details.push(detail.cloned());
        Ok(())
    }

    fn render_cart(&mut self, cart: &CartView) -> Result<()> {
        self.carts.push(cart.clone());
        Ok(())
    }
}

/// Catalog payload shaped like the live endpoint's response.
pub fn sample_payload() -> Value {
    json!({
        "status": true,
        "message": "all plants fetched",
        "plants": [
            {
                "id": 1,
                "image": "https://img.test/mango.png",
                "name": "Mango Tree",
                "description": "A fast-growing tropical tree that produces delicious, juicy mangoes during summer. Its dense green canopy offers shade.",
                "category": "Fruit Tree",
                "price": 500
            },
            {
                "id": 2,
                "image": "https://img.test/guava.png",
                "name": "Guava Tree",
                "description": "Hardy and easy to grow.",
                "category": "Fruit Tree",
                "price": 350
            },
            {
                "id": 3,
                "image": "https://img.test/neem.png",
                "name": "Neem Tree",
                "description": "Known for medicinal leaves.",
                "category": "Medicinal Tree",
                "price": 400
            },
            {
                "id": 4,
                "image": "https://img.test/bamboo.png",
                "name": "Golden Bamboo",
                "description": "Decorative bamboo for gardens.",
                "category": "Bamboo",
                "price": 180.5
            }
        ]
    })
}

/// Two-plant catalog from the cart walkthrough: A costs 100, B costs 250.
pub fn two_plant_payload() -> Value {
    json!([
        {"id": 10, "name": "A", "category": "Shrub", "price": 100},
        {"id": 20, "name": "B", "category": "Shrub", "price": 250}
    ])
}
