//! Presentation surface: the collaborator that displays rendered views.

use crate::render::{CartView, CategoryEntry, PlantCard, PlantDetail};
use anyhow::{Context, Result};
use std::io::Write;

/// Receives full-replace renders from the storefront.
pub trait Surface {
    fn set_loading(&mut self, visible: bool) -> Result<()>;
    fn render_categories(&mut self, entries: &[CategoryEntry]) -> Result<()>;
    fn render_catalog(&mut self, cards: &[PlantCard]) -> Result<()>;
    /// `None` closes the detail view.
    fn render_detail(&mut self, detail: Option<&PlantDetail>) -> Result<()>;
    fn render_cart(&mut self, cart: &CartView) -> Result<()>;
}

/// Plain-text surface writing to any `Write` sink.
pub struct TextSurface<W: Write> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TextSurface<W> {
    fn set_loading(&mut self, visible: bool) -> Result<()> {
        if visible {
            writeln!(self.out, "Loading catalog…").context("writing loading indicator")?;
        }
        self.out.flush().context("flushing output")
    }

    fn render_categories(&mut self, entries: &[CategoryEntry]) -> Result<()> {
        writeln!(self.out, "Categories:")?;
        for entry in entries {
            let marker = if entry.active { '*' } else { ' ' };
            writeln!(self.out, " {marker} {}", entry.label)?;
        }
        Ok(())
    }

    fn render_catalog(&mut self, cards: &[PlantCard]) -> Result<()> {
        if cards.is_empty() {
            writeln!(self.out, "No plants to show.")?;
            return Ok(());
        }
        for card in cards {
            writeln!(self.out, "[{}] {}  ({})  {}", card.id, card.name, card.category, card.price)?;
            if !card.description.is_empty() {
                writeln!(self.out, "    {}", card.description)?;
            }
        }
        Ok(())
    }

    fn render_detail(&mut self, detail: Option<&PlantDetail>) -> Result<()> {
        let Some(detail) = detail else {
            return Ok(());
        };
        writeln!(self.out, "== {} ==", detail.name)?;
        if !detail.image.is_empty() {
            writeln!(self.out, "Image: {}", detail.image)?;
        }
        writeln!(self.out, "Category: {}", detail.category)?;
        writeln!(self.out, "Price: {}", detail.price)?;
        if !detail.description.is_empty() {
            writeln!(self.out, "{}", detail.description)?;
        }
        Ok(())
    }

    fn render_cart(&mut self, cart: &CartView) -> Result<()> {
        writeln!(self.out, "Cart:")?;
        if cart.rows.is_empty() {
            writeln!(self.out, "  (empty)")?;
        }
        for row in &cart.rows {
            writeln!(
                self.out,
                "  {}. {} x{} — {}",
                row.position, row.name, row.quantity, row.line_total
            )?;
        }
        writeln!(self.out, "Total: {}", cart.total)?;
        Ok(())
    }
}
