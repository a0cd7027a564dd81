//! Desktop portfolio app: single-window egui front end over the headless
//! view-state models, with a worker thread owning the async delivery runtime.

mod backend_bridge;
mod controller;
mod ui;

use std::sync::Arc;

use clap::Parser;
use shared::domain::CategoryFilter;
use view_core::SimulatedDelivery;

use crate::ui::app::{PortfolioApp, StartupOptions, SETTINGS_STORAGE_KEY};

#[derive(Debug, Parser)]
#[command(name = "portfolio-desktop", about = "Zakir Khan photography portfolio")]
struct Args {
    /// Start with the portfolio grid filtered to this category label.
    #[arg(long, value_parser = parse_category_filter)]
    category: Option<CategoryFilter>,

    /// Skip the intro loading sequence.
    #[arg(long)]
    skip_intro: bool,

    /// Disable entry animations, parallax, and the intro sequence.
    #[arg(long)]
    reduced_motion: bool,
}

fn parse_category_filter(label: &str) -> Result<CategoryFilter, String> {
    CategoryFilter::from_label(label)
        .ok_or_else(|| format!("unknown category {label:?} (try All, Portrait, Wedding, ...)"))
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let startup = StartupOptions {
        initial_filter: args.category,
        skip_intro: args.skip_intro,
        reduced_motion: args.reduced_motion,
    };

    let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(64);
    let (ui_tx, ui_rx) = crossbeam_channel::bounded(256);
    let delivery = Arc::new(SimulatedDelivery::default());
    backend_bridge::runtime::spawn_backend_thread(cmd_rx, ui_tx, delivery);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Zakir Khan Photography")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Zakir Khan Photography",
        native_options,
        Box::new(move |cc| {
            let persisted = cc
                .storage
                .and_then(|storage| storage.get_string(SETTINGS_STORAGE_KEY))
                .and_then(|raw| serde_json::from_str(&raw).ok());
            Ok(Box::new(PortfolioApp::new(cmd_tx, ui_rx, startup, persisted)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::Category;

    #[test]
    fn category_flag_accepts_known_labels() {
        assert_eq!(parse_category_filter("all"), Ok(CategoryFilter::All));
        assert_eq!(
            parse_category_filter("Wedding"),
            Ok(CategoryFilter::Only(Category::Wedding))
        );
    }

    #[test]
    fn category_flag_rejects_unknown_labels() {
        let err = parse_category_filter("Astrophotography").unwrap_err();
        assert!(err.contains("Astrophotography"));
    }
}
