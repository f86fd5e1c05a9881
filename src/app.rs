use eframe::egui;

use crate::predict::Predictor;
use crate::state::{AppState, InputMode};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AqiPredictorApp {
    pub state: AppState,
    predictor: Predictor,
}

impl AqiPredictorApp {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            state: AppState::default(),
            predictor,
        }
    }
}

impl eframe::App for AqiPredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and mode selector ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the active input mode ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.mode {
                    InputMode::UploadCsv => {
                        panels::file_panel(ui, &mut self.state, &self.predictor)
                    }
                    InputMode::Sliders => {
                        panels::slider_panel(ui, &mut self.state, &self.predictor)
                    }
                });
        });
    }
}
