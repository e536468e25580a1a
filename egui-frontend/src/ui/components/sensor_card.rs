//! # Sensor Card
//!
//! One card per tracked individual: name, status badge, remaining time,
//! the three wear boundaries, and the toggle / settings actions.

use eframe::egui;
use shared::{SensorCardView, SensorStatus};

use crate::ui::app_state::SensorTrackerApp;

const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(248, 249, 250);
const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(220, 223, 228);
const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(33, 37, 41);
const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(120, 125, 130);
const ACCENT_ORANGE: egui::Color32 = egui::Color32::from_rgb(230, 126, 34);
const ACCENT_RED: egui::Color32 = egui::Color32::from_rgb(220, 53, 69);
const ACCENT_GREEN: egui::Color32 = egui::Color32::from_rgb(40, 140, 80);
const ACCENT_BLUE: egui::Color32 = egui::Color32::from_rgb(70, 130, 180);

impl SensorTrackerApp {
    pub fn render_sensor_card(&mut self, ui: &mut egui::Ui, view: &SensorCardView) {
        egui::Frame::none()
            .fill(CARD_FILL)
            .rounding(12.0)
            .stroke(egui::Stroke::new(1.0, CARD_STROKE))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&view.name)
                            .size(20.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        render_status_badge(ui, view.status);
                    });
                });

                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&view.remaining_label)
                            .size(26.0)
                            .strong()
                            .color(remaining_color(view)),
                    );
                });
                ui.add_space(10.0);

                egui::Grid::new(format!("boundaries_{}", view.individual_id))
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        boundary_row(ui, "Started", &view.start_label);
                        boundary_row(ui, "Official end", &view.official_end_label);
                        boundary_row(ui, "Grace ends", &view.final_end_label);
                        boundary_row(
                            ui,
                            "Notify",
                            &format!("{} day(s) before", view.days_before),
                        );
                    });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let toggle_fill = if view.status.is_running() {
                        ACCENT_ORANGE
                    } else {
                        ACCENT_BLUE
                    };
                    let toggle = ui.add_sized(
                        [180.0, 32.0],
                        egui::Button::new(
                            egui::RichText::new(&view.toggle_label)
                                .strong()
                                .color(egui::Color32::WHITE),
                        )
                        .fill(toggle_fill),
                    );
                    if toggle.clicked() {
                        self.handle_toggle_clicked(&view.individual_id);
                    }

                    if ui.button("🔔 Notifications").clicked() {
                        self.open_notification_settings(&view.individual_id);
                    }
                });
            });
    }
}

fn render_status_badge(ui: &mut egui::Ui, status: SensorStatus) {
    let color = match status {
        SensorStatus::Idle => TEXT_SECONDARY,
        SensorStatus::Active | SensorStatus::ExpiringSoon => ACCENT_GREEN,
        SensorStatus::Expired => ACCENT_RED,
    };
    egui::Frame::none()
        .fill(color.linear_multiply(0.15))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(status.badge_label())
                    .size(13.0)
                    .strong()
                    .color(color),
            );
        });
}

fn remaining_color(view: &SensorCardView) -> egui::Color32 {
    match view.status {
        SensorStatus::Expired => ACCENT_RED,
        SensorStatus::ExpiringSoon => ACCENT_ORANGE,
        SensorStatus::Idle => TEXT_SECONDARY,
        SensorStatus::Active => TEXT_PRIMARY,
    }
}

fn boundary_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(egui::RichText::new(label).size(13.0).color(TEXT_SECONDARY));
    ui.label(egui::RichText::new(value).size(13.0).color(TEXT_PRIMARY));
    ui.end_row();
}
