//! # Notification Settings Modal
//!
//! Edits one individual's notification lead time. The raw field text goes
//! to the notification service on save; a rejected value keeps the modal
//! open with an inline error and persists nothing.

use eframe::egui;

use crate::ui::app_state::SensorTrackerApp;

impl SensorTrackerApp {
    pub fn render_notification_settings_modal(&mut self, ctx: &egui::Context) {
        if self.settings_modal.is_none() {
            return;
        }

        let mut save_clicked = false;
        let mut cancel_clicked = false;

        if let Some(modal) = self.settings_modal.as_mut() {
            egui::Area::new(egui::Id::new("notification_settings_modal"))
                .order(egui::Order::Foreground)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.painter().rect_filled(
                        ctx.screen_rect(),
                        egui::Rounding::ZERO,
                        egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                    );

                    egui::Frame::window(&ctx.style())
                        .inner_margin(egui::Margin::same(20.0))
                        .show(ui, |ui| {
                            ui.set_min_width(320.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new("🔔 Notification settings")
                                        .size(18.0)
                                        .strong(),
                                );
                                ui.add_space(6.0);
                                ui.label(format!(
                                    "Warn before {}'s sensor expires",
                                    modal.individual_name
                                ));
                                ui.add_space(14.0);

                                ui.horizontal(|ui| {
                                    ui.label("Days before expiry:");
                                    ui.add(
                                        egui::TextEdit::singleline(&mut modal.days_before_input)
                                            .desired_width(60.0),
                                    );
                                });

                                if let Some(error) = &modal.validation_error {
                                    ui.add_space(6.0);
                                    ui.label(
                                        egui::RichText::new(error)
                                            .size(13.0)
                                            .color(egui::Color32::from_rgb(220, 53, 69)),
                                    );
                                }

                                ui.add_space(16.0);
                                ui.horizontal(|ui| {
                                    if ui
                                        .add_sized(
                                            [140.0, 30.0],
                                            egui::Button::new(
                                                egui::RichText::new("Save")
                                                    .strong()
                                                    .color(egui::Color32::WHITE),
                                            )
                                            .fill(egui::Color32::from_rgb(70, 130, 180)),
                                        )
                                        .clicked()
                                    {
                                        save_clicked = true;
                                    }
                                    if ui
                                        .add_sized([140.0, 30.0], egui::Button::new("Cancel"))
                                        .clicked()
                                    {
                                        cancel_clicked = true;
                                    }
                                });
                            });
                        });
                });
        }

        if save_clicked {
            self.save_notification_settings();
        } else if cancel_clicked {
            self.close_notification_settings();
        }
    }
}
