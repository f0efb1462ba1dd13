//! The three independently loaded dashboard resources.

use std::sync::Arc;

use log::info;
use shared::{Transaction, User, Wallet};
use tokio::runtime::Handle;

use crate::services::api::DashboardApi;
use crate::services::resource_loader::Resource;

pub struct DashboardData {
    pub user: Resource<User>,
    pub wallet: Resource<Wallet>,
    pub transactions: Resource<Vec<Transaction>>,
}

impl DashboardData {
    /// Build the resources against `api`, spawning fetches on `runtime`.
    /// Nothing is requested until `refetch_all()`.
    pub fn new(api: Arc<dyn DashboardApi>, runtime: Handle) -> Self {
        let user_api = Arc::clone(&api);
        let user = Resource::new("user", runtime.clone(), move || {
            let api = Arc::clone(&user_api);
            async move { api.get_user().await }
        });

        let wallet_api = Arc::clone(&api);
        let wallet = Resource::new("wallet", runtime.clone(), move || {
            let api = Arc::clone(&wallet_api);
            async move { api.get_wallet().await }
        });

        let transactions = Resource::new("transactions", runtime, move || {
            let api = Arc::clone(&api);
            async move { api.get_transactions().await }
        });

        Self {
            user,
            wallet,
            transactions,
        }
    }

    /// Attach the same completion notifier to every resource
    pub fn with_notifier(self, notifier: impl Fn() + Clone + Send + Sync + 'static) -> Self {
        Self {
            user: self.user.with_notifier(notifier.clone()),
            wallet: self.wallet.with_notifier(notifier.clone()),
            transactions: self.transactions.with_notifier(notifier),
        }
    }

    /// Start a fetch for every resource that is not already loading
    pub fn refetch_all(&mut self) -> usize {
        let started = [
            self.user.refetch(),
            self.wallet.refetch(),
            self.transactions.refetch(),
        ]
        .into_iter()
        .filter(|started| *started)
        .count();
        info!("🔄 Refreshing dashboard, {} request(s) started", started);
        started
    }

    /// Apply finished requests. Returns `true` if anything changed.
    pub fn poll(&mut self) -> bool {
        // Poll all three; no short-circuit
        let user = self.user.poll();
        let wallet = self.wallet.poll();
        let transactions = self.transactions.poll();
        user || wallet || transactions
    }

    pub fn any_loading(&self) -> bool {
        self.user.is_loading() || self.wallet.is_loading() || self.transactions.is_loading()
    }

    #[cfg(test)]
    pub async fn settle_all(&mut self) {
        self.user.settle().await;
        self.wallet.settle().await;
        self.transactions.settle().await;
    }
}
