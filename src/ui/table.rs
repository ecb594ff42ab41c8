use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::CategoryColors;
use crate::data::loader::SOURCE_COLUMN;
use crate::data::model::LeadTable;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Lead table (central panel)
// ---------------------------------------------------------------------------

/// Render `table` with a sticky header. Source-column cells are tinted with
/// their category colour.
pub fn lead_table(ui: &mut Ui, id: &str, table: &LeadTable, colors: &CategoryColors) {
    if table.columns.is_empty() {
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt(id)
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(Column::auto().at_least(60.0).clip(true), table.columns.len())
                .header(ROW_HEIGHT + 4.0, |mut header| {
                    for col in &table.columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(col);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, table.len(), |mut row| {
                        let idx = row.index();
                        for (col, cell) in table.columns.iter().zip(table.row_cells(idx)) {
                            row.col(|ui: &mut Ui| {
                                let text = cell.to_string();
                                if col == SOURCE_COLUMN {
                                    ui.label(RichText::new(&text).color(colors.color_for(&text)));
                                } else {
                                    ui.label(text);
                                }
                            });
                        }
                    });
                });
        });
}
