//! Pagination controls under a table.

use aisle_business::{PAGE_SIZE_CHOICES, TableState};
use egui::Ui;

/// Previous/next buttons, a page indicator, and the page-size selector.
///
/// Hidden entirely when everything fits on one page.
pub fn pager(ui: &mut Ui, id: &str, state: &mut TableState, total: usize) {
    let page_count = state.page_count(total);
    if page_count <= 1 {
        return;
    }

    ui.horizontal(|ui| {
        let page = state.page();

        if ui.add_enabled(page > 1, egui::Button::new("◀")).clicked() {
            state.set_page(page - 1);
        }
        ui.label(format!("Page {page} of {page_count}"));
        if ui
            .add_enabled(page < page_count, egui::Button::new("▶"))
            .clicked()
        {
            state.set_page(page + 1);
        }

        ui.separator();

        let mut page_size = state.page_size();
        egui::ComboBox::from_id_salt((id, "page_size"))
            .selected_text(format!("{page_size} per page"))
            .show_ui(ui, |ui| {
                for choice in PAGE_SIZE_CHOICES {
                    ui.selectable_value(&mut page_size, choice, format!("{choice} per page"));
                }
            });
        if page_size != state.page_size() {
            // Also resets to the first page.
            state.set_page_size(page_size);
        }
    });
}
