use std::{path::Path, sync::Arc};

use eframe::egui;
use egui::{Button, CentralPanel, Color32, Frame, RichText, TopBottomPanel, Ui, Vec2};
use egui_extras::RetainedImage;
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::{info, warn};

use crate::{
    charts::YapsChart,
    fetcher::ScoreFetcher,
    report::{ComparisonReport, SingleReport, BLUE},
    utils::required_username,
    worker::{lookup_one, lookup_pair, Pending},
};

const TITLE: &str = "Yaps Influence Analyzer";
const LOGO_SIZE: f32 = 60.0;
const TIMESTAMP_FORMAT: &str = "%a %b %e %T %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Check,
    Compare,
}

#[derive(Default)]
struct CheckTab {
    username: String,
    pending: Option<Pending<SingleReport>>,
    report: Option<SingleReport>,
}

impl CheckTab {
    fn clear(&mut self) {
        self.pending = None;
        self.report = None;
    }
}

#[derive(Default)]
struct CompareTab {
    first: String,
    second: String,
    pending: Option<Pending<ComparisonReport>>,
    report: Option<ComparisonReport>,
}

impl CompareTab {
    fn clear(&mut self) {
        self.pending = None;
        self.report = None;
    }
}

pub struct App {
    fetcher: Arc<ScoreFetcher>,
    logo: Option<RetainedImage>,
    tab: Tab,
    check: CheckTab,
    compare: CompareTab,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_results();

        TopBottomPanel::top("header")
            .frame(Frame::none().fill(BLUE))
            .show(ctx, |ui| self.render_header(ui));

        TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.small("© 2025 Yaps Influence Analyzer");
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let previous = self.tab;
                ui.selectable_value(&mut self.tab, Tab::Check, "User Check");
                ui.selectable_value(&mut self.tab, Tab::Compare, "User Comparison");
                if self.tab != previous {
                    self.enter_tab();
                }
            });
            ui.separator();

            match self.tab {
                Tab::Check => self.render_check(ctx, ui),
                Tab::Compare => self.render_compare(ctx, ui),
            }
        });
    }
}

impl App {
    pub fn new(fetcher: Arc<ScoreFetcher>, logo: Option<RetainedImage>) -> Self {
        App {
            fetcher,
            logo,
            tab: Tab::Check,
            check: CheckTab::default(),
            compare: CompareTab::default(),
        }
    }

    pub fn run(self) -> ! {
        let options = eframe::NativeOptions {
            initial_window_size: Some(Vec2::new(600.0, 650.0)),
            ..Default::default()
        };

        eframe::run_native(TITLE, options, Box::new(move |_cc| Box::new(self)))
    }

    fn collect_results(&mut self) {
        if let Some(report) = self.check.pending.as_ref().and_then(Pending::poll) {
            self.check.pending = None;
            self.check.report = Some(report);
        }
        if let Some(report) = self.compare.pending.as_ref().and_then(Pending::poll) {
            self.compare.pending = None;
            self.compare.report = Some(report);
        }
    }

    /// Switching tabs starts the newly selected tab from a clean slate.
    fn enter_tab(&mut self) {
        match self.tab {
            Tab::Check => self.check.clear(),
            Tab::Compare => self.compare.clear(),
        }
    }

    fn render_header(&self, ui: &mut Ui) {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            if let Some(logo) = &self.logo {
                logo.show_size(ui, Vec2::splat(LOGO_SIZE));
            }
            ui.label(RichText::new(TITLE).heading().strong().color(Color32::WHITE));
        });
        ui.add_space(10.0);
    }

    fn render_check(&mut self, ctx: &egui::Context, ui: &mut Ui) {
        ui.label("Enter X Username:");
        ui.text_edit_singleline(&mut self.check.username);

        let busy = self.check.pending.is_some();
        ui.horizontal(|ui| {
            if ui.add_enabled(!busy, Button::new("Check")).clicked() {
                self.start_check(ctx);
            }
            if ui.button("Clear").clicked() {
                self.check.clear();
            }
        });
        ui.separator();

        if self.check.pending.is_some() {
            ui.label("Loading data...");
            // Still fetching, so repaint
            ctx.request_repaint();
            return;
        }

        if let Some(report) = &self.check.report {
            ui.label(report.text.as_str());
            ui.add_space(5.0);
            ui.label(RichText::new(&report.label).size(18.0).strong().color(report.color));

            if let Some(chart) = &report.chart {
                ui.add(YapsChart::new(chart));
                render_footer_row(ui, report.fetched_at, &report.text, "Results copied to clipboard");
            }
        }
    }

    fn render_compare(&mut self, ctx: &egui::Context, ui: &mut Ui) {
        ui.label("User 1:");
        ui.text_edit_singleline(&mut self.compare.first);
        ui.label("User 2:");
        ui.text_edit_singleline(&mut self.compare.second);

        let busy = self.compare.pending.is_some();
        ui.horizontal(|ui| {
            if ui.add_enabled(!busy, Button::new("Compare")).clicked() {
                self.start_compare(ctx);
            }
            if ui.button("Clear").clicked() {
                self.compare.clear();
            }
        });
        ui.separator();

        if self.compare.pending.is_some() {
            ui.label("Loading data...");
            ctx.request_repaint();
            return;
        }

        if let Some(report) = &self.compare.report {
            ui.label(report.text.as_str());

            if let Some(chart) = &report.chart {
                ui.add(YapsChart::new(chart));
                render_footer_row(
                    ui,
                    report.fetched_at,
                    &report.text,
                    "Comparison results copied to clipboard",
                );
            }
        }
    }

    fn start_check(&mut self, ctx: &egui::Context) {
        let username = match required_username(&self.check.username) {
            Ok(username) => username.to_string(),
            Err(_) => {
                show_warning("Please enter a username!");
                return;
            }
        };

        self.check.clear();
        self.check.pending = Some(lookup_one(
            Arc::clone(&self.fetcher),
            username,
            Some(ctx.clone()),
        ));
    }

    fn start_compare(&mut self, ctx: &egui::Context) {
        let first = required_username(&self.compare.first).map(str::to_string);
        let second = required_username(&self.compare.second).map(str::to_string);
        let (first, second) = match (first, second) {
            (Ok(first), Ok(second)) => (first, second),
            _ => {
                show_warning("Please enter both usernames!");
                return;
            }
        };

        self.compare.clear();
        self.compare.pending = Some(lookup_pair(
            Arc::clone(&self.fetcher),
            first,
            second,
            Some(ctx.clone()),
        ));
    }
}

fn render_footer_row(
    ui: &mut Ui,
    fetched_at: chrono::DateTime<chrono::Local>,
    text: &str,
    confirmation: &str,
) {
    ui.horizontal(|ui| {
        ui.small(format!("Fetched at {}", fetched_at.format(TIMESTAMP_FORMAT)));
        if ui.button("Copy Results").clicked() {
            ui.output().copied_text = text.to_string();
            show_info(confirmation);
        }
    });
}

fn show_warning(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Warning")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn show_info(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Info")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// The logo is decoration only; any failure is logged and the header goes without it.
pub fn load_logo(path: &Path) -> Option<RetainedImage> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "logo not found");
            return None;
        }
    };

    match RetainedImage::from_image_bytes(path.display().to_string(), &bytes) {
        Ok(image) => {
            info!(path = %path.display(), "loaded logo");
            Some(image)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "logo could not be decoded");
            None
        }
    }
}
