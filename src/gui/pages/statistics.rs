// src/gui/pages/statistics.rs
use eframe::egui::{self, RichText};

use crate::{
    config::state::PageKind,
    gui::app::App,
    stats::Stats,
};

use super::Page;

pub struct StatisticsPage;
pub static PAGE: StatisticsPage = StatisticsPage;

fn card(ui: &mut egui::Ui, value: String, label: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(160.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(value).size(28.0).strong());
                ui.label(label);
            });
        });
}

impl Page for StatisticsPage {
    fn kind(&self) -> PageKind { PageKind::Statistics }
    fn title(&self) -> &'static str { "Statistics" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let stats = Stats::compute(&app.cats);

        ui.heading("Statistics");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            card(ui, stats.total_cats.to_string(), "Total Cats");
            card(ui, stats.cats_with_photos.to_string(), "Cats with Photos");
            card(ui, stats.unique_owners.to_string(), "Unique Owners");
        });

        ui.add_space(12.0);
        ui.strong("Quick Facts");
        egui::Grid::new("quick_facts").num_columns(2).spacing([24.0, 4.0]).show(ui, |ui| {
            ui.label("Average cats per owner:");
            ui.label(stats.avg_label());
            ui.end_row();
            ui.label("Photo coverage:");
            ui.label(stats.coverage_label());
            ui.end_row();
        });
    }
}
