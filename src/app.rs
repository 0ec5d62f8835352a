use eframe::egui;
use log::info;

use crate::config::ChartConfig;
use crate::data::model::FeatureTrack;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Window showing one loaded track. Nothing is mutated after load.
pub struct FeatureViewApp {
    pub track: FeatureTrack,
    pub config: ChartConfig,
}

impl FeatureViewApp {
    pub fn new(track: FeatureTrack, config: ChartConfig) -> Self {
        Self { track, config }
    }
}

impl eframe::App for FeatureViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.config.title.as_str());
            });
            plot::feature_chart(ui, &self.track, &self.config);
        });
    }
}

/// Open the chart window and block until the user closes it.
pub fn show(track: FeatureTrack, config: ChartConfig) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.as_str())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    info!("Rendering {} features", track.len());
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(FeatureViewApp::new(track, config)))),
    )
}
