//! # Header Module
//!
//! Top bar with the app title, navigation labels, the refresh control and the
//! user's avatar.
//!
//! ## Key Functions:
//! - `render_header()` - the whole bar
//! - `render_user_avatar()` - initials badge with loading/error states

use eframe::egui;
use log::info;

use crate::ui::app_state::DashboardApp;
use crate::ui::components::styling::colors;

const NAV_ITEMS: [&str; 5] = ["Home", "Analytics", "Revenue", "CRM", "Apps"];
const AVATAR_SIZE: f32 = 36.0;

impl DashboardApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("mainstack")
                        .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                )
                .selectable(false),
            );

            ui.add_space(40.0);

            for item in NAV_ITEMS {
                // Only the revenue view exists; the rest are labels
                let text = egui::RichText::new(item).color(if item == "Revenue" {
                    colors::TEXT_PRIMARY
                } else {
                    colors::TEXT_MUTED
                });
                ui.add(egui::Label::new(if item == "Revenue" { text.strong() } else { text }).selectable(false));
                ui.add_space(12.0);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.render_user_avatar(ui);

                ui.add_space(12.0);

                let refreshing = self.data.any_loading();
                let refresh = ui
                    .add_enabled(!refreshing, egui::Button::new("🔄 Refresh"))
                    .on_hover_text(format!("Reload from {}", self.config.api_base_url));
                if refresh.clicked() {
                    info!("🔄 Refresh requested");
                    self.refresh();
                }
                if refreshing {
                    ui.spinner();
                }
            });
        });
    }

    /// Render the avatar: initials when loaded, a spinner while loading,
    /// "Error" when the profile failed to load
    fn render_user_avatar(&self, ui: &mut egui::Ui) {
        let user = &self.data.user;

        if user.is_loading() && user.data().is_none() {
            ui.spinner();
            return;
        }

        if user.error().is_some() && user.data().is_none() {
            ui.colored_label(colors::ERROR_TEXT, "Error");
            return;
        }

        let initials = user
            .data()
            .map(|user| user.initials())
            .filter(|initials| !initials.is_empty())
            .unwrap_or_else(|| "U".to_string());

        let (rect, response) = ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
        let painter = ui.painter();
        painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, colors::ACCENT);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initials,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
            egui::Color32::WHITE,
        );

        if let Some(profile) = user.data() {
            response.on_hover_text(format!("{}\n{}", profile.full_name(), profile.email));
        }
    }
}
