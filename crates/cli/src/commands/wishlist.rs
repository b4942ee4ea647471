//! Wishlist command.

use std::io::Write;

use aura_scents_storefront::state::AppState;
use aura_scents_storefront::views::WishlistView;
use aura_scents_storefront::wishlist::Toggle;

use super::{CliError, Output};

/// Toggle the given IDs, then show the wishlist.
///
/// Unknown IDs are skipped with a warning.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn show(state: &mut AppState, toggle: &[String], out: Output) -> Result<(), CliError> {
    for id in toggle {
        match state.wishlist_mut().toggle(id) {
            Toggle::Added => tracing::info!(product_id = %id, "added to wishlist"),
            Toggle::Removed => tracing::info!(product_id = %id, "removed from wishlist"),
            Toggle::Unknown => tracing::warn!(product_id = %id, "no such product"),
        }
    }

    let view = WishlistView::from(state.wishlist());
    out.emit(&view, |w| {
        if view.items.is_empty() {
            return writeln!(w, "Your wishlist is empty.");
        }
        writeln!(w, "Wishlist ({} items)", view.count)?;
        for item in &view.items {
            writeln!(w, "  {:>3}  {:<28} {:>10}", item.id, item.name, item.price)?;
        }
        Ok(())
    })
}
