use eframe::egui;

use crate::chart::ChartSpec;
use crate::error::{Error, Result};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp {
    pub spec: ChartSpec,
}

impl ChartApp {
    pub fn new(spec: ChartSpec) -> Self {
        Self { spec }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.spec.title);
            });
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.spec);
        });
    }
}

/// Open the viewer window and block until the user closes it.
pub fn show(spec: ChartSpec) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(spec.title.clone())
            .with_inner_size(spec.window_size)
            .with_min_inner_size([400.0, 200.0]),
        ..Default::default()
    };

    log::debug!(
        "Opening viewer ({} x {})",
        spec.window_size[0],
        spec.window_size[1]
    );

    let app_name = spec.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(spec)))),
    )
    .map_err(|e| Error::Viewer(e.to_string()))
}
