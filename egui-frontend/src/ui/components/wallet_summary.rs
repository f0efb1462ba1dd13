//! # Wallet Summary Module
//!
//! Balance cards above the transaction list: the available balance with its
//! Withdraw button next to the revenue chart, and a column of stat cards.

use eframe::egui;
use log::info;
use shared::format::format_currency;
use shared::Wallet;

use crate::ui::app_state::DashboardApp;
use crate::ui::components::styling::{caption, colors, primary_button, section_error};

impl DashboardApp {
    /// Render the available balance block
    pub fn render_balance_overview(&self, ui: &mut egui::Ui) {
        let wallet = &self.data.wallet;

        if let Some(error) = wallet.error() {
            section_error(ui, format!("Failed to load wallet data: {}", error));
        }

        match wallet.data() {
            Some(data) => {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(caption("Available Balance"));
                        ui.label(
                            egui::RichText::new(format_currency(data.balance, true))
                                .font(egui::FontId::new(30.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                    });

                    ui.add_space(40.0);

                    if ui.add(primary_button("Withdraw")).clicked() {
                        info!("Withdraw clicked for balance {}", data.balance);
                    }
                });
            }
            None if wallet.is_loading() => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(caption("Loading wallet..."));
                });
            }
            None => {}
        }
    }

    /// Render the ledger/payout/revenue stat cards
    pub fn render_wallet_stats(&self, ui: &mut egui::Ui) {
        let Some(data) = self.data.wallet.data() else {
            if self.data.wallet.is_loading() {
                ui.spinner();
            }
            return;
        };

        for (label, amount) in wallet_stats(data) {
            ui.add_space(4.0);
            ui.label(caption(label));
            ui.label(
                egui::RichText::new(format_currency(amount, true))
                    .size(22.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(12.0);
        }
    }
}

/// Label/amount pairs for the stat column, in display order
fn wallet_stats(wallet: &Wallet) -> [(&'static str, f64); 4] {
    [
        ("Ledger Balance", wallet.ledger_balance),
        ("Total Payout", wallet.total_payout),
        ("Total Revenue", wallet.total_revenue),
        ("Pending Payout", wallet.pending_payout),
    ]
}
