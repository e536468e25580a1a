//! # Reset Confirmation Modal
//!
//! The yes/no gate in front of wiping a running sensor. Declining leaves
//! the sensor untouched; confirming routes through the sensor service's
//! toggle action.

use eframe::egui;

use crate::ui::app_state::SensorTrackerApp;

impl SensorTrackerApp {
    pub fn render_reset_confirm_modal(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.pending_reset.clone() else {
            return;
        };

        let mut confirmed = false;
        let mut cancelled = false;

        egui::Area::new(egui::Id::new("reset_confirm_modal"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dim everything behind the modal
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
                            ui.label(egui::RichText::new("Replace sensor?").size(18.0).strong());
                            ui.add_space(10.0);
                            ui.label(format!(
                                "Reset {}'s sensor? The current wear record will be cleared.",
                                pending.individual_name
                            ));
                            ui.add_space(16.0);

                            ui.horizontal(|ui| {
                                if ui
                                    .add_sized(
                                        [140.0, 30.0],
                                        egui::Button::new(
                                            egui::RichText::new("Reset")
                                                .strong()
                                                .color(egui::Color32::WHITE),
                                        )
                                        .fill(egui::Color32::from_rgb(220, 53, 69)),
                                    )
                                    .clicked()
                                {
                                    confirmed = true;
                                }
                                if ui.add_sized([140.0, 30.0], egui::Button::new("Cancel")).clicked()
                                {
                                    cancelled = true;
                                }
                            });
                        });
                    });
            });

        if confirmed {
            self.confirm_pending_reset();
        } else if cancelled {
            self.cancel_pending_reset();
        }
    }
}
