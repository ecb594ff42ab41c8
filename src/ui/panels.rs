use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::LeadTable;
use crate::state::{AppState, Mode};
use crate::ui::table::lead_table;

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the navigation panel: mode, category selector and load warnings.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Navigation");
    ui.separator();

    ui.strong("Go to:");
    ui.radio_value(&mut state.mode, Mode::GlobalSearch, "🔍 Global Search");
    ui.radio_value(&mut state.mode, Mode::Category, "📁 Individual CSVs");

    if state.mode == Mode::Category {
        ui.separator();
        ui.strong("Select a Service");
        let categories: Vec<String> = state
            .registry
            .entries()
            .iter()
            .map(|e| e.category.clone())
            .collect();
        egui::ComboBox::from_id_salt("service_select")
            .selected_text(state.selected_category.as_str())
            .width(ui.available_width())
            .show_ui(ui, |ui: &mut Ui| {
                for cat in categories {
                    let label = cat.clone();
                    ui.selectable_value(&mut state.selected_category, cat, label);
                }
            });
    }

    let warnings = state.warnings();
    if !warnings.is_empty() {
        ui.separator();
        ui.strong(format!("⚠ {} load warnings", warnings.len()));
        ScrollArea::vertical()
            .auto_shrink([false, true])
            .max_height(240.0)
            .show(ui, |ui: &mut Ui| {
                for w in warnings {
                    ui.label(RichText::new(w.to_string()).color(Color32::YELLOW));
                }
            });
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload files").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        let cache = state.cache();
        ui.label(format!(
            "{} leads in {} of {} categories",
            cache.total_rows(),
            cache.tables().len(),
            state.registry.entries().len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(msg);
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – global search
// ---------------------------------------------------------------------------

pub fn search_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🌍 Global Lead Search");

    let mut text = state.query_text.clone();
    ui.label("Search across all CSV files (name, company, etc.)");
    if ui
        .add(egui::TextEdit::singleline(&mut text).desired_width(f32::INFINITY))
        .changed()
    {
        state.set_query(&text);
    }
    ui.add_space(6.0);

    let Some(outcome) = state.search_outcome() else {
        ui.label("Type a keyword above to search across all leads.");
        return;
    };

    let mut download = None;
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(format!(
            "🔎 Found {} results for '{}'",
            outcome.table.len(),
            outcome.query.as_str()
        ));
        if ui.button("⬇ Download Search Results").clicked() {
            download = state.search_download();
        }
    });
    ui.separator();
    lead_table(ui, "search_results", &outcome.table, &state.colors);

    if let Some((name, table)) = download {
        save_dialog(state, &table, &name);
    }
}

// ---------------------------------------------------------------------------
// Central panel – single category
// ---------------------------------------------------------------------------

pub fn category_page(ui: &mut Ui, state: &mut AppState) {
    let mut download: Option<LeadTable> = None;

    match state.current_view() {
        Ok(v) => {
            ui.heading(format!("📊 {} Leads Data", v.category));
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Total Leads:");
                ui.strong(v.row_count().to_string());
                ui.separator();
                if ui.button("⬇ Download CSV").clicked() {
                    download = Some(v.table.clone());
                }
            });
            ui.separator();
            lead_table(ui, "category_table", v.table, &state.colors);
        }
        Err(e) => {
            let path = state
                .registry
                .get(&state.selected_category)
                .map(|entry| state.registry.path_of(entry).display().to_string());
            let msg = match path {
                Some(p) => format!("File not found: {p}"),
                None => e.to_string(),
            };
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    }

    if let (Some(table), Some(name)) = (download, state.category_download_name()) {
        save_dialog(state, &table, &name);
    }
}

// ---------------------------------------------------------------------------
// Save dialog
// ---------------------------------------------------------------------------

fn save_dialog(state: &mut AppState, table: &LeadTable, file_name: &str) {
    let dest = rfd::FileDialog::new()
        .set_title("Save CSV")
        .add_filter("CSV", &["csv"])
        .set_file_name(file_name)
        .save_file();

    if let Some(path) = dest {
        state.save_table(table, &path);
    }
}
