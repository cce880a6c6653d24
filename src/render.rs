//! Pure view-model builders for the catalog, category list, detail view and
//! cart. Surfaces only ever see these types; nothing here holds state.

use crate::cart::CartStore;
use crate::catalog::{Category, CategoryFilter, CategoryIndex, Plant, PlantId, Price};

/// Label of the entry that restores the full catalog.
pub const ALL_CATEGORIES_LABEL: &str = "All Trees";
pub const DEFAULT_CURRENCY: &str = "৳";
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub currency: String,
    /// Card descriptions longer than this many chars are cut; 0 disables.
    pub description_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }
}

impl RenderOptions {
    pub fn money(&self, price: Price) -> String {
        format!("{} {}", self.currency, price)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryEntry {
    pub label: String,
    pub filter: CategoryFilter,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlantCard {
    pub id: PlantId,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub price: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlantDetail {
    pub id: PlantId,
    pub name: String,
    pub image: String,
    pub category: String,
    pub price: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartRow {
    /// 1-based position, as accepted by the `remove` command.
    pub position: usize,
    pub id: PlantId,
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub total: String,
    pub total_price: Price,
}

/// "All" entry first, then one entry per category. At most one entry is
/// active; none is when `active` names a category the index does not know.
pub fn category_entries(index: &CategoryIndex, active: &CategoryFilter) -> Vec<CategoryEntry> {
    let mut entries = Vec::with_capacity(index.len() + 1);
    entries.push(CategoryEntry {
        label: ALL_CATEGORIES_LABEL.to_string(),
        filter: CategoryFilter::All,
        active: *active == CategoryFilter::All,
    });
    entries.extend(index.labels().iter().map(|label: &Category| {
        let filter = CategoryFilter::Only(label.clone());
        CategoryEntry {
            label: label.to_string(),
            active: *active == filter,
            filter,
        }
    }));
    entries
}

pub fn catalog_cards(plants: &[&Plant], options: &RenderOptions) -> Vec<PlantCard> {
    plants
        .iter()
        .map(|plant| PlantCard {
            id: plant.id,
            name: plant.name.clone(),
            image: plant.image.clone(),
            description: truncate_description(&plant.description, options.description_limit),
            category: plant.category.to_string(),
            price: options.money(plant.price),
        })
        .collect()
}

pub fn plant_detail(plant: &Plant, options: &RenderOptions) -> PlantDetail {
    PlantDetail {
        id: plant.id,
        name: plant.name.clone(),
        image: plant.image.clone(),
        category: plant.category.to_string(),
        price: options.money(plant.price),
        description: plant.description.clone(),
    }
}

pub fn cart_view(cart: &CartStore, options: &RenderOptions) -> CartView {
    let rows = cart
        .lines()
        .iter()
        .enumerate()
        .map(|(index, line)| CartRow {
            position: index + 1,
            id: line.id(),
            name: line.plant.name.clone(),
            quantity: line.quantity,
            line_total: options.money(line.line_total()),
        })
        .collect();
    let total_price = cart.total();
    CartView {
        rows,
        total: options.money(total_price),
        total_price,
    }
}

/// Shorten `text` to at most `limit` chars, backing off to the last word
/// boundary and appending an ellipsis.
pub fn truncate_description(text: &str, limit: usize) -> String {
    let text = text.trim();
    if limit == 0 || text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    let ends_on_word = text.chars().nth(limit).is_some_and(char::is_whitespace);
    let kept = match cut.rfind(char::is_whitespace) {
        _ if ends_on_word => cut.as_str(),
        Some(boundary) if boundary > 0 => &cut[..boundary],
        _ => cut.as_str(),
    };
    format!("{}…", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_descriptions_are_untouched() {
        assert_eq!(truncate_description("A tall tree.", 100), "A tall tree.");
        assert_eq!(truncate_description("anything", 0), "anything");
    }

    #[test]
    fn long_descriptions_cut_on_word_boundary() {
        let text = "Mango trees bear sweet fruit every summer";
        assert_eq!(truncate_description(text, 20), "Mango trees bear…");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let text = "আম গাছ মিষ্টি ফল দেয়";
        let out = truncate_description(text, 7);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= 8);
    }

    #[test]
    fn word_ending_exactly_at_the_limit_is_kept() {
        assert_eq!(truncate_description("ab cd ef", 5), "ab cd…");
        assert_eq!(truncate_description("ab cde f", 5), "ab…");
    }

    #[test]
    fn unbroken_word_is_hard_cut() {
        assert_eq!(truncate_description("abcdefghij", 4), "abcd…");
    }

    #[test]
    fn category_entries_mark_exactly_one_active() {
        let index = CategoryIndex::default();
        let entries = category_entries(&index, &CategoryFilter::All);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].active);
    }

    #[test]
    fn money_prefixes_currency() {
        let options = RenderOptions::default();
        assert_eq!(options.money(Price::from_major(450)), "৳ 450");
    }
}
