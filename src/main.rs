//! DNA Workbench - Sequence Checking Utilities
//!
//! A Rust application for quick DNA sequence checks: strand
//! complementarity proofreading, restriction-site finding, and logistic
//! population growth projection.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod analysis;
mod app;

use app::WorkbenchApp;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("DNA Workbench"),
        ..Default::default()
    };

    eframe::run_native(
        "DNA Workbench",
        native_options,
        Box::new(|cc| Ok(Box::new(WorkbenchApp::new(cc)))),
    )
}
