use crate::models::catalog::CatalogEntry;
use crate::models::holding::Holding;
use crate::models::summary::PortfolioSummary;

/// Output seam between the controller and whatever actually draws the page.
///
/// The controller decides *what* is visible and *when* it changes; the
/// renderer decides how it looks. Implementations are expected to be cheap
/// to call repeatedly: every interaction re-renders its whole view region.
pub trait Renderer {
    /// Populate the asset picker with the fetched catalog. Implementations
    /// show a "none selected" placeholder entry first.
    fn render_catalog(&mut self, entries: &[CatalogEntry]);

    /// Draw the holdings list. An empty slice means the empty state.
    fn render_holdings(&mut self, holdings: &[&Holding]);

    /// Draw the summary panel; `summary.trend()` picks the change color.
    fn render_summary(&mut self, summary: &PortfolioSummary);

    /// Show the inline add-form error. The controller clears it again via
    /// [`clear_form_error`](Self::clear_form_error) after a fixed delay.
    fn show_form_error(&mut self, message: &str);

    fn clear_form_error(&mut self);

    /// Blocking alert; used by the edit path.
    fn show_alert(&mut self, message: &str);

    /// Open the edit modal pre-filled with the holding's current amount.
    fn open_edit_modal(&mut self, holding: &Holding);

    fn close_edit_modal(&mut self);

    /// Clear the add form fields after a successful add.
    fn reset_add_form(&mut self);
}
