//! # Filter Panel Module
//!
//! Right-hand side panel for editing the transaction filters.
//!
//! ## Key Functions:
//! - `render_filter_panel()` - the panel, shown while `filter_panel.is_open`
//!
//! ## Behavior:
//! All edits go to the panel's draft. Apply commits it, Clear resets
//! everything and closes, and Escape or the close button closes without
//! touching the applied filters. While a date picker popup is showing,
//! Escape is left to the popup.

use chrono::{Local, NaiveDate};
use eframe::egui;
use egui_extras::DatePickerButton;
use shared::filters::{status_options, type_options};
use shared::QuickFilter;

use crate::ui::app_state::DashboardApp;
use crate::ui::components::styling::{caption, colors, humanize, primary_button};
use crate::ui::state::{BoundControl, FilterPanelState};

const PANEL_WIDTH: f32 = 380.0;

impl DashboardApp {
    /// Render the filter side panel if it is open
    pub fn render_filter_panel(&mut self, ctx: &egui::Context) {
        if !self.filter_panel.is_open {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.filter_panel.handle_escape() {
            return;
        }

        let type_choices = type_options(self.all_transactions());

        egui::SidePanel::right("filter_panel")
            .resizable(false)
            .exact_width(PANEL_WIDTH)
            .frame(
                egui::Frame::none()
                    .fill(colors::CARD)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                    .inner_margin(egui::Margin::same(24.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Filter");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✕").clicked() {
                            self.filter_panel.close();
                        }
                    });
                });
                ui.add_space(12.0);

                render_quick_filters(ui, &mut self.filter_panel);
                ui.add_space(16.0);

                render_date_range(ui, &mut self.filter_panel);
                ui.add_space(16.0);

                ui.label(egui::RichText::new("Transaction Type").strong());
                for option in &type_choices {
                    let mut checked = self.filter_panel.draft.transaction_types.contains(option);
                    if ui.checkbox(&mut checked, humanize(option)).changed() {
                        self.filter_panel.draft.toggle_type(option);
                    }
                }
                ui.add_space(16.0);

                ui.label(egui::RichText::new("Transaction Status").strong());
                for option in status_options() {
                    let mut checked = self.filter_panel.draft.transaction_statuses.contains(option);
                    if ui.checkbox(&mut checked, humanize(option)).changed() {
                        self.filter_panel.draft.toggle_status(option);
                    }
                }

                ui.add_space(24.0);
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.filter_panel.clear(&mut self.filters);
                    }
                    if ui.add(primary_button("Apply")).clicked() {
                        self.filter_panel.apply(&mut self.filters);
                    }
                });
            });
    }
}

fn render_quick_filters(ui: &mut egui::Ui, panel: &mut FilterPanelState) {
    ui.horizontal_wrapped(|ui| {
        for quick_filter in QuickFilter::ALL {
            let selected = panel.active_quick_filter == Some(quick_filter);
            if ui.selectable_label(selected, quick_filter.label()).clicked() {
                panel.apply_quick_filter(quick_filter, &Local::now());
            }
        }
    });
}

fn render_date_range(ui: &mut egui::Ui, panel: &mut FilterPanelState) {
    let today = Local::now().date_naive();
    let mut picker_open = false;

    ui.label(egui::RichText::new("Date Range").strong());
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(caption("From"));
            match panel.start_control(&Local) {
                BoundControl::Placeholder => {
                    if ui.button("Any date").clicked() {
                        panel.set_start_day(&Local, Some(today));
                    }
                }
                BoundControl::Picker(start) => {
                    let (picked, open) = date_picker(ui, "filter_start_date", start);
                    picker_open |= open;
                    if let Some(day) = picked {
                        panel.set_start_day(&Local, Some(day));
                    }
                    if ui.small_button("Any start").clicked() {
                        panel.set_start_day(&Local, None);
                    }
                }
            }
        });

        ui.add_space(12.0);

        ui.vertical(|ui| {
            ui.label(caption("To"));
            match panel.end_control(&Local) {
                BoundControl::Placeholder => {
                    if ui.button("Any date").clicked() {
                        panel.set_end_day(&Local, Some(today));
                    }
                }
                BoundControl::Picker(end) => {
                    let (picked, open) = date_picker(ui, "filter_end_date", end);
                    picker_open |= open;
                    if let Some(day) = picked {
                        panel.set_end_day(&Local, Some(day));
                    }
                    if ui.small_button("Any end").clicked() {
                        panel.set_end_day(&Local, None);
                    }
                }
            }
        });
    });

    panel.date_picker_open = picker_open || ui.ctx().memory(|m| m.any_popup_open());
}

/// Date picker showing `initial`. Returns the newly picked day, if any, and
/// whether the picker's popup is showing.
fn date_picker(ui: &mut egui::Ui, id: &str, initial: NaiveDate) -> (Option<NaiveDate>, bool) {
    let mut day = initial;
    let response = ui.add(DatePickerButton::new(&mut day).id_source(id));

    // The popup is a foreground area keyed by the button's persistent id
    let popup = egui::LayerId::new(egui::Order::Foreground, ui.make_persistent_id(id));
    let open = ui.ctx().memory(|m| m.areas().is_visible(&popup));

    (response.changed().then_some(day), open)
}
