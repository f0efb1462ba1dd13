//! # Transaction List Module
//!
//! The filtered transaction list with its toolbar.
//!
//! ## Key Functions:
//! - `render_transaction_list()` - heading, Filter/Export buttons and rows
//! - `render_transaction_row()` - one row: direction icon, title, subtitle, amount, date
//!
//! ## States:
//! - loading with no data: spinner
//! - failed: inline "Failed to load transactions" text (rows still show if
//!   an earlier load succeeded)
//! - no rows after filtering: "No matching transaction found" with a
//!   Clear Filter button when filters are active

use eframe::egui;
use shared::format::{format_currency, format_transaction_date};
use shared::{Transaction, TransactionType};

use crate::ui::app_state::DashboardApp;
use crate::ui::components::styling::{caption, colors, humanize, section_error, status_color};

const ICON_SIZE: f32 = 48.0;

impl DashboardApp {
    /// Render the transaction list section
    pub fn render_transaction_list(&mut self, ui: &mut egui::Ui) {
        let visible = self.visible_transactions();

        self.render_list_toolbar(ui, visible.len());
        ui.separator();
        ui.add_space(8.0);

        let transactions = &self.data.transactions;
        if let Some(error) = transactions.error() {
            section_error(ui, format!("Failed to load transactions: {}", error));
        }

        if transactions.data().is_none() {
            if transactions.is_loading() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.label(caption("Loading transactions..."));
                });
            }
            return;
        }

        if visible.is_empty() {
            self.render_empty_list(ui);
            return;
        }

        for transaction in &visible {
            render_transaction_row(ui, transaction);
            ui.add_space(16.0);
        }
    }

    fn render_list_toolbar(&mut self, ui: &mut egui::Ui, count: usize) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} Transactions", count))
                        .size(22.0)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.label(caption(period_caption(self.filters.date_range.is_unbounded())));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Exporting is not supported
                ui.add_enabled(false, egui::Button::new("Export list ⬇"));

                let active = self.filters.active_filter_count();
                let label = if active > 0 {
                    format!("Filter ({}) ⏷", active)
                } else {
                    "Filter ⏷".to_string()
                };
                if ui.button(label).clicked() {
                    self.filter_panel.open(&self.filters);
                }
            });
        });
    }

    fn render_empty_list(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new("No matching transaction found")
                    .size(20.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );

            if self.filters.has_active_filters() {
                ui.label(caption(
                    "Change your filters to see more results, or add a new product.",
                ));
                ui.add_space(12.0);
                if ui.button("Clear Filter").clicked() {
                    self.filter_panel.clear(&mut self.filters);
                }
            }
        });
    }
}

fn period_caption(all_time: bool) -> &'static str {
    if all_time {
        "Your transactions for all time"
    } else {
        "Your transactions for the selected period"
    }
}

/// Direction glyph and colors for the row icon
fn direction_icon(transaction_type: TransactionType) -> (&'static str, egui::Color32, egui::Color32) {
    match transaction_type {
        TransactionType::Deposit => ("↙", colors::DEPOSIT_ICON, colors::DEPOSIT_ICON_BG),
        TransactionType::Withdrawal => ("↗", colors::WITHDRAWAL_ICON, colors::WITHDRAWAL_ICON_BG),
    }
}

fn render_transaction_row(ui: &mut egui::Ui, transaction: &Transaction) {
    ui.horizontal(|ui| {
        let (glyph, fg, bg) = direction_icon(transaction.transaction_type);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), ICON_SIZE / 2.0, bg);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::new(18.0, egui::FontFamily::Proportional),
            fg,
        );

        ui.add_space(8.0);

        ui.vertical(|ui| {
            ui.label(egui::RichText::new(transaction.title()).strong().color(colors::TEXT_PRIMARY));
            match transaction.customer_name() {
                Some(name) => {
                    ui.label(caption(name));
                }
                None => {
                    ui.label(
                        egui::RichText::new(humanize(transaction.status.as_str()))
                            .size(13.0)
                            .color(status_color(transaction.status)),
                    );
                }
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(format_currency(transaction.amount, false))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.label(caption(format_transaction_date(&transaction.date)));
            });
        });
    });
}
