//! Order history command.

use std::io::{self, Write};

use aura_scents_storefront::state::AppState;
use aura_scents_storefront::views::OrderView;

use super::{CliError, Output};

/// Show every order, newest first.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn list(state: &AppState, out: Output) -> Result<(), CliError> {
    let views: Vec<OrderView> = state
        .orders()
        .recent()
        .into_iter()
        .map(OrderView::from)
        .collect();

    out.emit(&views, |w| {
        if views.is_empty() {
            return writeln!(w, "No orders yet.");
        }
        for view in &views {
            write_order(w, view)?;
        }
        Ok(())
    })
}

/// Write one order as a text block.
pub fn write_order(w: &mut dyn Write, view: &OrderView) -> io::Result<()> {
    writeln!(w, "{}  {}  {}", view.id, view.placed_on, view.status)?;
    for item in &view.items {
        writeln!(
            w,
            "    {} x {:<28} {:>10}",
            item.quantity, item.name, item.line_price
        )?;
    }
    writeln!(w, "    Total: {} ({} items)", view.total, view.item_count)?;
    writeln!(w, "    Ship to: {}", view.shipping_address)?;
    writeln!(w, "    Paid by: {}", view.payment_method)
}
