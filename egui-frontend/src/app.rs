//! # App Module
//!
//! The `eframe::App` implementation: per-frame polling and the panel layout.
//!
//! ## Layout:
//! - top panel: header
//! - right panel: filter panel, only while open
//! - central panel: balance + chart and stat cards, then the transaction list

use eframe::egui;

use crate::ui::components::styling::card_frame;
use crate::ui::DashboardApp;

const STATS_COLUMN_WIDTH: f32 = 260.0;

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.poll_resources() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header")
            .exact_height(64.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_header(ui);
            });

        // Side panels must be added before the central panel
        self.render_filter_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_overview(ui);
                    ui.add_space(24.0);
                    card_frame().show(ui, |ui| {
                        self.render_transaction_list(ui);
                    });
                });
        });
    }
}

impl DashboardApp {
    /// Balance and chart on the left, stat cards on the right
    fn render_overview(&self, ui: &mut egui::Ui) {
        ui.horizontal_top(|ui| {
            let chart_width = (ui.available_width() - STATS_COLUMN_WIDTH - 24.0).max(200.0);

            card_frame().show(ui, |ui| {
                ui.set_width(chart_width);
                ui.vertical(|ui| {
                    self.render_balance_overview(ui);
                    ui.add_space(16.0);
                    self.render_revenue_chart(ui);
                });
            });

            ui.add_space(24.0);

            card_frame().show(ui, |ui| {
                ui.set_width(STATS_COLUMN_WIDTH - 40.0);
                ui.vertical(|ui| {
                    self.render_wallet_stats(ui);
                });
            });
        });
    }
}
