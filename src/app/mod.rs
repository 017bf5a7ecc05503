use eframe::{egui, Frame};
use tracing::{info, warn};

use config::{Config, Destination, ScreenId};
use sip::SipScreen;

pub mod calculator;
pub mod config;
pub mod presenter;
pub mod sip;

pub struct App {
    cfg: Config,
    screen: ScreenId,
    sip: SipScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.screen != ScreenId::Home && ui.button("< Back").clicked() {
                    self.navigate(ScreenId::Home);
                }
                ui.heading(self.title());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            ScreenId::Home => self.show_menu(ui),
            ScreenId::SipCalculator => self.sip.show(ui),
        });

        egui::TopBottomPanel::bottom("bottom").show(ctx, |ui| {
            egui::widgets::global_theme_preference_switch(ui);
        });
    }
}

impl App {
    pub fn with_config(cfg: Config) -> Self {
        Self {
            cfg,
            screen: ScreenId::Home,
            sip: SipScreen::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.cfg.title
    }

    pub fn screen(&self) -> ScreenId {
        self.screen
    }

    /// Entering a screen always starts it fresh.
    pub fn navigate(&mut self, screen: ScreenId) {
        info!(from = %self.screen, to = %screen, "navigating");
        if screen == ScreenId::SipCalculator {
            self.sip = SipScreen::default();
        }
        self.screen = screen;
    }

    pub fn select(&mut self, destination: &Destination) {
        match destination.target() {
            Ok(screen) => self.navigate(screen),
            Err(e) => warn!(title = %destination.title, error = %e, "ignoring menu entry"),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        let mut selected = None;
        ui.vertical_centered_justified(|ui| {
            for destination in &self.cfg.destinations {
                if ui.button(&destination.title).clicked() {
                    selected = Some(destination.clone());
                }
                ui.add_space(4.0);
            }
        });

        if let Some(destination) = selected {
            self.select(&destination);
        }
    }
}
