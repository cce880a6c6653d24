//! Indexed view of a loaded plant list.
//!
//! The cart is keyed by plant id, so the index keeps only the first record
//! for each id and drops records with blank names, logging what it skipped.
//! Categories are derived in first-seen order so the rendered filters match
//! the order plants arrive from the API.

use crate::catalog::{Category, Plant, PlantId};
use std::collections::{BTreeMap, HashSet};

/// Which part of the catalog is on display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, plant: &Plant) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => plant.category == *category,
        }
    }
}

/// Distinct category labels, each exactly once, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    labels: Vec<Category>,
}

impl CategoryIndex {
    pub fn from_plants(plants: &[Plant]) -> Self {
        let mut seen: HashSet<&Category> = HashSet::new();
        let mut labels = Vec::new();
        for plant in plants {
            if seen.insert(&plant.category) {
                labels.push(plant.category.clone());
            }
        }
        Self { labels }
    }

    pub fn labels(&self) -> &[Category] {
        &self.labels
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.labels.contains(category)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Plant list plus derived lookups. Empty until a load succeeds.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    plants: Vec<Plant>,
    by_id: BTreeMap<PlantId, usize>,
    categories: CategoryIndex,
}

impl Catalog {
    /// Build the index. Later records reusing an id and records with blank
    /// names are skipped.
    pub fn new(records: Vec<Plant>) -> Self {
        let mut by_id = BTreeMap::new();
        let mut plants = Vec::with_capacity(records.len());
        for plant in records {
            if plant.name.trim().is_empty() {
                tracing::warn!(id = %plant.id, "skipping plant with a blank name");
                continue;
            }
            if by_id.contains_key(&plant.id) {
                tracing::warn!(id = %plant.id, name = %plant.name, "skipping duplicate plant id");
                continue;
            }
            by_id.insert(plant.id, plants.len());
            plants.push(plant);
        }
        let categories = CategoryIndex::from_plants(&plants);
        Self {
            plants,
            by_id,
            categories,
        }
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn plant(&self, id: PlantId) -> Option<&Plant> {
        self.by_id.get(&id).map(|&position| &self.plants[position])
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    /// Plants visible under `filter`, in catalog order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Plant> {
        self.plants.iter().filter(|plant| filter.matches(plant)).collect()
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}
