//! # Styling Module
//!
//! Colors and shared drawing helpers for the dashboard's light theme.
//!
//! ## Key Functions:
//! - `setup_dashboard_style()` - configure global egui styling once at startup
//! - `card_frame()` - rounded white container used by every section
//! - `section_error()` - inline error text shown inside a failed section
//! - `status_color()` - badge color for a transaction status
//! - `humanize()` - display form of wire names like "digital_product"

use eframe::egui;
use shared::TransactionStatus;

/// Color constants for the dashboard theme
pub mod colors {
    use eframe::egui::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 250);
    pub const CARD: Color32 = Color32::WHITE;
    pub const CARD_BORDER: Color32 = Color32::from_rgb(239, 241, 246);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(19, 17, 22);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(86, 97, 107);

    pub const ACCENT: Color32 = Color32::from_rgb(19, 17, 22);
    pub const CHART_LINE: Color32 = Color32::from_rgb(255, 84, 0);

    pub const DEPOSIT_ICON_BG: Color32 = Color32::from_rgb(227, 252, 242);
    pub const DEPOSIT_ICON: Color32 = Color32::from_rgb(7, 89, 65);
    pub const WITHDRAWAL_ICON_BG: Color32 = Color32::from_rgb(249, 227, 224);
    pub const WITHDRAWAL_ICON: Color32 = Color32::from_rgb(150, 25, 17);

    pub const STATUS_SUCCESSFUL: Color32 = Color32::from_rgb(15, 185, 129);
    pub const STATUS_PENDING: Color32 = Color32::from_rgb(169, 117, 3);
    pub const STATUS_FAILED: Color32 = Color32::from_rgb(217, 45, 32);

    pub const ERROR_TEXT: Color32 = Color32::from_rgb(217, 45, 32);
}

/// Setup the light dashboard styling for the entire application
pub fn setup_dashboard_style(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = colors::BACKGROUND;
        style.visuals.window_fill = colors::CARD;
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(239, 241, 246);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        // Pill-shaped buttons
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(100.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(100.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(100.0);

        style
    });
}

/// Rounded white container used for the dashboard sections
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(20.0))
}

/// Inline error message for a section that failed to load
pub fn section_error(ui: &mut egui::Ui, text: impl Into<String>) {
    ui.colored_label(colors::ERROR_TEXT, format!("❌ {}", text.into()));
}

/// Small muted caption text
pub fn caption(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).size(13.0).color(colors::TEXT_MUTED)
}

/// Badge color for a transaction status
pub fn status_color(status: TransactionStatus) -> egui::Color32 {
    match status {
        TransactionStatus::Successful => colors::STATUS_SUCCESSFUL,
        TransactionStatus::Pending => colors::STATUS_PENDING,
        TransactionStatus::Failed => colors::STATUS_FAILED,
    }
}

/// Primary (filled dark) button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(egui::Color32::WHITE).strong())
        .fill(colors::ACCENT)
}

/// "digital_product" -> "Digital product"
pub fn humanize(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
