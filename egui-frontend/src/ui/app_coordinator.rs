//! # App Coordinator Module
//!
//! The main update loop. Each frame re-derives every sensor card from the
//! roster and the wall clock, then renders cards, messages and any open
//! modal. The loop owns no domain state; it is purely a driver, scheduled
//! by `request_repaint_after` at the configured refresh period for the
//! life of the process.

use chrono::Utc;
use eframe::egui;

use crate::ui::app_state::SensorTrackerApp;
use crate::ui::mappers;

impl eframe::App for SensorTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The periodic tick: recompute remaining time even with no input
        ctx.request_repaint_after(self.backend.config.refresh_period);

        // ESC closes whichever modal is open, changing nothing
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.pending_reset = None;
            self.settings_modal = None;
        }

        let cards = mappers::card_views(&self.roster, Utc::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.heading("Sensor Tracker");
            });
            ui.add_space(6.0);
            self.render_messages(ui);
            ui.add_space(6.0);

            ui.columns(cards.len().max(1), |columns| {
                for (column, card) in columns.iter_mut().zip(&cards) {
                    self.render_sensor_card(column, card);
                }
            });
        });

        self.render_reset_confirm_modal(ctx);
        self.render_notification_settings_modal(ctx);
    }
}

impl SensorTrackerApp {
    fn render_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = false;

        if let Some(error) = &self.error_message {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("⚠ {}", error))
                        .color(egui::Color32::from_rgb(220, 53, 69)),
                );
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            });
        } else if let Some(success) = &self.success_message {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("✔ {}", success))
                        .color(egui::Color32::from_rgb(40, 140, 80)),
                );
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            });
        }

        if dismissed {
            self.clear_messages();
        }
    }
}
