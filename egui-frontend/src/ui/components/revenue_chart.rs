//! # Revenue Chart Module
//!
//! Line chart of daily revenue (successful deposits) under the balance block.
//!
//! The x axis is "days since the first revenue day", so gaps between days keep
//! their real width. Axes are hidden; the first and last day are printed under
//! the plot instead.

use chrono::Duration;
use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use shared::format::{format_chart_label, format_currency};
use shared::RevenueSeries;

use crate::ui::app_state::DashboardApp;
use crate::ui::components::styling::{caption, colors, section_error};

const CHART_HEIGHT: f32 = 240.0;

impl DashboardApp {
    /// Render the revenue chart section
    pub fn render_revenue_chart(&self, ui: &mut egui::Ui) {
        let transactions = &self.data.transactions;

        if let Some(error) = transactions.error() {
            section_error(ui, format!("Failed to load revenue: {}", error));
            if transactions.data().is_none() {
                return;
            }
        }

        if transactions.data().is_none() {
            if transactions.is_loading() {
                ui.allocate_ui(egui::vec2(ui.available_width(), CHART_HEIGHT), |ui| {
                    ui.centered_and_justified(|ui| ui.spinner());
                });
            }
            return;
        }

        let series = self.revenue_series();
        if series.is_empty() {
            ui.allocate_ui(egui::vec2(ui.available_width(), CHART_HEIGHT), |ui| {
                ui.centered_and_justified(|ui| ui.label(caption("No revenue to chart yet")));
            });
            return;
        }

        render_revenue_plot(ui, &series);

        ui.horizontal(|ui| {
            if let Some(start) = series.start_label() {
                ui.label(caption(start));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(end) = series.end_label() {
                    ui.label(caption(end));
                }
            });
        });
    }
}

fn render_revenue_plot(ui: &mut egui::Ui, series: &RevenueSeries) {
    let first_day = series.first_day();
    let line = Line::new(PlotPoints::from(series.plot_points()))
        .color(colors::CHART_LINE)
        .width(2.0)
        .name("Revenue");

    Plot::new("revenue_chart")
        .height(CHART_HEIGHT)
        .show_axes([false, false])
        .show_grid([false, false])
        .show_background(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .label_formatter(move |_name, point| {
            // Hover label: the day under the cursor and its total
            let day = first_day.map(|first| first + Duration::days(point.x.round() as i64));
            match day {
                Some(day) => format!("{}\n{}", format_chart_label(day), format_currency(point.y, true)),
                None => format_currency(point.y, true),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
