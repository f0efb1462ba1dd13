//! # App State Module
//!
//! Central state for the wallet dashboard window.
//!
//! ## Key Types:
//! - `DashboardApp` - everything the UI reads each frame
//!
//! ## Key Functions:
//! - `new()` - build the runtime and API client, start the first fetches
//! - `poll_resources()` - apply finished fetches, once per frame
//! - `refresh()` - refetch all three resources
//! - `visible_transactions()` / `revenue_series()` - derived views, recomputed on read
//!
//! ## Purpose:
//! Loaded data lives in `DashboardData`; the applied filters and the filter
//! panel draft live here. Nothing derived is cached: egui redraws every frame,
//! so the filtered list and the revenue series are recomputed from the current
//! transactions whenever they are drawn.

use std::sync::Arc;

use anyhow::Context;
use eframe::egui;
use log::info;
use shared::{apply_filters, RevenueSeries, Transaction, TransactionFilters};
use tokio::runtime::Runtime;

use crate::config::DashboardConfig;
use crate::services::{ApiClient, DashboardApi, DashboardData};
use crate::ui::components::setup_dashboard_style;
use crate::ui::state::FilterPanelState;

/// Main application struct for the egui wallet dashboard
pub struct DashboardApp {
    pub config: DashboardConfig,
    pub data: DashboardData,

    // Filter state
    pub filters: TransactionFilters,
    pub filter_panel: FilterPanelState,

    // Declared last: the resources must abort their tasks before the runtime
    // shuts down
    runtime: Runtime,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> anyhow::Result<Self> {
        info!("🚀 Initializing wallet dashboard against {}", config.api_base_url);

        setup_dashboard_style(&cc.egui_ctx);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("dashboard-fetch")
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        let api: Arc<dyn DashboardApi> =
            Arc::new(ApiClient::from_config(&config).context("Failed to create API client")?);

        Ok(Self::with_api(cc.egui_ctx.clone(), api, runtime, config))
    }

    /// Assemble the app around an existing API and runtime and start the
    /// initial fetches
    pub fn with_api(ctx: egui::Context, api: Arc<dyn DashboardApi>, runtime: Runtime, config: DashboardConfig) -> Self {
        let mut data = DashboardData::new(api, runtime.handle().clone())
            .with_notifier(move || ctx.request_repaint());
        data.refetch_all();

        Self {
            config,
            data,
            filters: TransactionFilters::default(),
            filter_panel: FilterPanelState::new(),
            runtime,
        }
    }

    /// Apply finished requests; returns `true` when something changed
    pub fn poll_resources(&mut self) -> bool {
        self.data.poll()
    }

    pub fn refresh(&mut self) {
        self.data.refetch_all();
    }

    /// All loaded transactions, unfiltered
    pub fn all_transactions(&self) -> &[Transaction] {
        self.data.transactions.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Transactions that pass the applied filters, in API order
    pub fn visible_transactions(&self) -> Vec<Transaction> {
        apply_filters(self.all_transactions(), &self.filters)
    }

    /// Daily revenue over the unfiltered transactions
    pub fn revenue_series(&self) -> RevenueSeries {
        RevenueSeries::from_transactions(self.all_transactions())
    }
}
