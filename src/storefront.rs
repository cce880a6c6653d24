//! Storefront controller.
//!
//! Owns every piece of session state (catalog, active filter, open detail,
//! cart) and the surface they are rendered to. State changes only through
//! `load` and `dispatch`, and each change re-renders exactly the views it
//! affects.

use crate::cart::CartStore;
use crate::catalog::{Catalog, CategoryFilter, Plant, PlantId};
use crate::event::Event;
use crate::loader::CatalogLoader;
use crate::render::{self, RenderOptions};
use crate::surface::Surface;
use anyhow::Result;

/// What a dispatched event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Filtered { shown: usize },
    DetailOpened(PlantId),
    DetailClosed,
    CartChanged,
    Ignored,
}

pub struct Storefront<S: Surface> {
    catalog: Catalog,
    filter: CategoryFilter,
    detail: Option<PlantId>,
    cart: CartStore,
    options: RenderOptions,
    surface: S,
}

impl<S: Surface> Storefront<S> {
    pub fn new(surface: S, options: RenderOptions) -> Self {
        Self {
            catalog: Catalog::default(),
            filter: CategoryFilter::All,
            detail: None,
            cart: CartStore::new(),
            options,
            surface,
        }
    }

    /// Fetch the catalog with the loading indicator up, then render it.
    ///
    /// Load failures are logged and swallowed; the catalog stays empty. Only
    /// surface errors are returned. Returns whether a catalog was installed.
    pub async fn load(&mut self, loader: &CatalogLoader) -> Result<bool> {
        self.surface.set_loading(true)?;
        let fetched = loader.fetch().await;
        self.surface.set_loading(false)?;

        match fetched.map(Catalog::new) {
            Ok(catalog) => {
                tracing::info!(
                    source = %loader.source().describe(),
                    plants = catalog.len(),
                    categories = catalog.categories().len(),
                    "catalog loaded"
                );
                self.install(catalog)?;
                Ok(true)
            }
            Err(err) => {
                tracing::error!(
                    source = %loader.source().describe(),
                    "Error fetching plants: {err:#}"
                );
                Ok(false)
            }
        }
    }

    /// Replace the catalog with an already-loaded plant list and render it.
    pub fn load_plants(&mut self, plants: Vec<Plant>) -> Result<()> {
        self.install(Catalog::new(plants))
    }

    fn install(&mut self, catalog: Catalog) -> Result<()> {
        self.catalog = catalog;
        self.filter = CategoryFilter::All;
        self.detail = None;
        self.render_categories()?;
        self.render_catalog()?;
        Ok(())
    }

    pub fn dispatch(&mut self, event: Event) -> Result<Outcome> {
        match event {
            Event::ShowAll => self.apply_filter(CategoryFilter::All),
            Event::SelectCategory(category) => {
                if !self.catalog.categories().contains(&category) {
                    tracing::warn!(category = %category, "selected category is not in the catalog");
                }
                self.apply_filter(CategoryFilter::Only(category))
            }
            Event::OpenDetail(id) => {
                let Some(plant) = self.catalog.plant(id) else {
                    tracing::warn!(%id, "detail requested for unknown plant");
                    return Ok(Outcome::Ignored);
                };
                let detail = render::plant_detail(plant, &self.options);
                self.detail = Some(id);
                self.surface.render_detail(Some(&detail))?;
                Ok(Outcome::DetailOpened(id))
            }
            Event::CloseDetail => {
                if self.detail.take().is_none() {
                    return Ok(Outcome::Ignored);
                }
                self.surface.render_detail(None)?;
                Ok(Outcome::DetailClosed)
            }
            Event::AddToCart(id) => {
                let Some(plant) = self.catalog.plant(id) else {
                    tracing::warn!(%id, "add-to-cart for unknown plant");
                    return Ok(Outcome::Ignored);
                };
                let quantity = self.cart.add(plant);
                tracing::debug!(%id, quantity, "cart line updated");
                self.render_cart()?;
                Ok(Outcome::CartChanged)
            }
            Event::RemoveFromCart(index) => match self.cart.remove(index) {
                Some(line) => {
                    tracing::debug!(id = %line.id(), index, "cart line removed");
                    self.render_cart()?;
                    Ok(Outcome::CartChanged)
                }
                None => {
                    tracing::debug!(index, lines = self.cart.len(), "remove index out of range");
                    Ok(Outcome::Ignored)
                }
            },
        }
    }

    fn apply_filter(&mut self, filter: CategoryFilter) -> Result<Outcome> {
        self.filter = filter;
        self.render_categories()?;
        let shown = self.render_catalog()?;
        Ok(Outcome::Filtered { shown })
    }

    fn render_categories(&mut self) -> Result<()> {
        let entries = render::category_entries(self.catalog.categories(), &self.filter);
        self.surface.render_categories(&entries)
    }

    fn render_catalog(&mut self) -> Result<usize> {
        let visible = self.catalog.filter(&self.filter);
        let cards = render::catalog_cards(&visible, &self.options);
        self.surface.render_catalog(&cards)?;
        Ok(cards.len())
    }

    fn render_cart(&mut self) -> Result<()> {
        let view = render::cart_view(&self.cart, &self.options);
        self.surface.render_cart(&view)
    }

    /// Re-render the cart without changing it.
    pub fn show_cart(&mut self) -> Result<()> {
        self.render_cart()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn open_detail(&self) -> Option<PlantId> {
        self.detail
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
