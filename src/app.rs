use eframe::egui;

use crate::state::{AppState, Mode};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LeadsDashboardApp {
    pub state: AppState,
}

impl LeadsDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LeadsDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: search results or one category ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.mode {
            Mode::GlobalSearch => panels::search_page(ui, &mut self.state),
            Mode::Category => panels::category_page(ui, &mut self.state),
        });
    }
}
