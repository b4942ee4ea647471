//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! aura-cli catalog list --category men
//! aura-cli catalog show 5
//! aura-cli catalog search rose
//! aura-cli catalog featured --limit 3
//! ```

use std::io::{self, Write};

use aura_scents_core::Category;
use aura_scents_storefront::models::Product;
use aura_scents_storefront::state::AppState;
use aura_scents_storefront::views::ProductView;

use super::{CliError, Output};

/// List the catalog, optionally restricted to one category.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn list(state: &AppState, category: Option<Category>, out: Output) -> Result<(), CliError> {
    let catalog = state.catalog();
    let products: Vec<&Product> = match category {
        Some(category) => catalog.by_category(category).collect(),
        None => catalog.all().iter().collect(),
    };
    emit_products(state, &products, out)
}

/// Show one product in detail.
///
/// # Errors
///
/// Returns [`CliError::ProductNotFound`] for an unknown ID.
pub fn show(state: &AppState, id: &str, out: Output) -> Result<(), CliError> {
    let product = state
        .catalog()
        .find_by_id(id)
        .ok_or_else(|| CliError::ProductNotFound(id.to_owned()))?;
    let view = ProductView::new(product, state.wishlist());

    out.emit(&view, |w| {
        writeln!(w, "{} ({})", view.name, view.size)?;
        writeln!(w, "  {}", product.description)?;
        writeln!(w, "  Category: {}", product.category)?;
        writeln!(w, "  Notes:    {}", view.notes)?;
        write!(w, "  Price:    {}", view.price)?;
        if let (Some(original), Some(percent)) = (&view.original_price, view.discount_percent) {
            write!(w, " (was {original}, {percent}% off)")?;
        }
        writeln!(w)?;
        writeln!(
            w,
            "  Rating:   {:.1} ({} reviews)",
            view.rating, view.review_count
        )?;
        if view.is_wishlisted {
            writeln!(w, "  In your wishlist")?;
        }
        Ok(())
    })
}

/// Search names and scent notes.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn search(state: &AppState, query: &str, out: Output) -> Result<(), CliError> {
    let products: Vec<&Product> = state.catalog().search(query).collect();
    tracing::debug!(query, hits = products.len(), "catalog search");
    emit_products(state, &products, out)
}

/// Show the top-rated products.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn featured(state: &AppState, limit: usize, out: Output) -> Result<(), CliError> {
    let products = state.catalog().featured(limit);
    emit_products(state, &products, out)
}

fn emit_products(state: &AppState, products: &[&Product], out: Output) -> Result<(), CliError> {
    let views: Vec<ProductView> = products
        .iter()
        .map(|product| ProductView::new(product, state.wishlist()))
        .collect();

    out.emit(&views, |w| {
        if views.is_empty() {
            return writeln!(w, "No products found.");
        }
        for view in &views {
            write_row(w, view)?;
        }
        Ok(())
    })
}

fn write_row(w: &mut dyn Write, view: &ProductView) -> io::Result<()> {
    let heart = if view.is_wishlisted { "*" } else { " " };
    writeln!(
        w,
        "{heart} {:>3}  {:<28} {:<7} {:>10}  {:.1}",
        view.id, view.name, view.category, view.price, view.rating
    )
}
