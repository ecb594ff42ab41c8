use anyhow::Result;
use clap::Parser;
use eframe::egui;

use leads_dashboard::app::LeadsDashboardApp;
use leads_dashboard::config::{init_logging, Cli};
use leads_dashboard::state::AppState;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let registry = cli.registry()?;
    log::info!(
        "Reading {} categories from {}",
        registry.entries().len(),
        registry.data_dir().display()
    );
    let state = AppState::new(registry);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([700.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LinkedIn Leads Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LeadsDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
