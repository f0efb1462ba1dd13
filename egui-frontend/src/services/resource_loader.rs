//! # Resource Loader
//!
//! Runs one resource's fetch on the tokio runtime and feeds the result back
//! into its `ResourceState` from the UI thread.
//!
//! ## Key Functions:
//! - `refetch()` - start a request unless one is already in flight
//! - `poll()` - non-blocking check for a finished request, called every frame
//! - `settle()` - await the in-flight request (used by tests and shutdown paths)
//!
//! Dropping a `Resource` aborts its in-flight task, so no result is ever
//! applied after the owner is gone.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::{debug, info, warn};
use shared::{ApiError, RequestTicket, ResourceState};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tokio::task::JoinHandle;

pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'static>>;
pub type Fetcher<T> = Arc<dyn Fn() -> FetchFuture<T> + Send + Sync>;
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

struct InFlight<T> {
    ticket: RequestTicket,
    receiver: oneshot::Receiver<Result<T, ApiError>>,
    handle: JoinHandle<()>,
}

pub struct Resource<T> {
    name: &'static str,
    state: ResourceState<T>,
    fetcher: Fetcher<T>,
    runtime: Handle,
    notifier: Option<Notifier>,
    in_flight: Option<InFlight<T>>,
}

impl<T: Send + 'static> Resource<T> {
    /// Create an idle resource; nothing is fetched until `refetch()`
    pub fn new<F, Fut>(name: &'static str, runtime: Handle, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let fetcher: Fetcher<T> = Arc::new(move || Box::pin(fetch()) as FetchFuture<T>);
        Self {
            name,
            state: ResourceState::new(),
            fetcher,
            runtime,
            notifier: None,
            in_flight: None,
        }
    }

    /// Called from the runtime thread whenever a request finishes, e.g. to
    /// wake the UI with `request_repaint`
    pub fn with_notifier(mut self, notifier: impl Fn() + Send + Sync + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    /// Start a new request. Returns `false` when one is already in flight.
    pub fn refetch(&mut self) -> bool {
        let Some(ticket) = self.state.begin() else {
            debug!("Refetch of {} ignored, request already in flight", self.name);
            return false;
        };

        info!("📡 Fetching {}", self.name);
        let (sender, receiver) = oneshot::channel();
        let request = (self.fetcher)();
        let notifier = self.notifier.clone();

        let handle = self.runtime.spawn(async move {
            let result = request.await;
            // The receiver is gone if the resource was dropped mid-request
            let _ = sender.send(result);
            if let Some(notify) = notifier {
                notify();
            }
        });

        self.in_flight = Some(InFlight { ticket, receiver, handle });
        true
    }

    /// Apply a finished request, if any. Returns `true` when state changed.
    pub fn poll(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };

        let result = match in_flight.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => {
                warn!("Fetch task for {} ended without a result", self.name);
                Err(ApiError::unknown())
            }
        };

        let ticket = in_flight.ticket;
        self.in_flight = None;
        self.finish(ticket, result)
    }

    /// Wait for the in-flight request and apply it
    pub async fn settle(&mut self) -> bool {
        let Some(InFlight { ticket, receiver, .. }) = self.in_flight.take() else {
            return false;
        };

        let result = receiver.await.unwrap_or_else(|_| {
            warn!("Fetch task for {} ended without a result", self.name);
            Err(ApiError::unknown())
        });
        self.finish(ticket, result)
    }

    fn finish(&mut self, ticket: RequestTicket, result: Result<T, ApiError>) -> bool {
        match &result {
            Ok(_) => info!("✅ Loaded {}", self.name),
            Err(e) => warn!("❌ Failed to load {}: {} (status {})", self.name, e, e.status),
        }
        self.state.complete(ticket, result)
    }
}

impl<T> Resource<T> {
    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

impl<T> Drop for Resource<T> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!("Aborting in-flight request for {}", self.name);
            in_flight.handle.abort();
            self.state.abandon();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ResourcePhase;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Resource whose fetches pop pre-scripted results and count calls
    fn scripted(
        results: Vec<Result<u32, ApiError>>,
    ) -> (Resource<u32>, Arc<AtomicUsize>) {
        let queue = Arc::new(Mutex::new(VecDeque::from(results)));
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let resource = Resource::new("numbers", Handle::current(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let next = queue.lock().unwrap().pop_front().unwrap_or_else(|| Err(ApiError::unknown()));
            async move { next }
        });
        (resource, calls)
    }

    /// Resource whose fetch blocks until the gate is opened
    fn gated(gate: Arc<Notify>, finished: Arc<AtomicBool>, calls: Arc<AtomicUsize>) -> Resource<u32> {
        Resource::new("slow", Handle::current(), move || {
            calls.fetch_add(1, Ordering::SeqCst);
            let gate = Arc::clone(&gate);
            let finished = Arc::clone(&finished);
            async move {
                gate.notified().await;
                finished.store(true, Ordering::SeqCst);
                Ok(9)
            }
        })
    }

    #[tokio::test]
    async fn test_success_flow() {
        let (mut resource, calls) = scripted(vec![Ok(42)]);
        assert_eq!(resource.state().phase(), ResourcePhase::Idle);

        assert!(resource.refetch());
        assert!(resource.is_loading());
        assert!(resource.data().is_none());

        assert!(resource.settle().await);
        assert_eq!(resource.data(), Some(&42));
        assert!(resource.error().is_none());
        assert!(!resource.is_loading());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_not_found_sets_error_without_data() {
        let (mut resource, _) = scripted(vec![Err(ApiError::http_status(404))]);
        resource.refetch();
        resource.settle().await;

        assert_eq!(resource.state().phase(), ResourcePhase::Error);
        assert!(resource.data().is_none());
        assert!(!resource.is_loading());
        assert_eq!(resource.error(), Some("HTTP error! status: 404"));
    }

    #[tokio::test]
    async fn test_refetch_keeps_data_until_error() {
        let (mut resource, _) = scripted(vec![Ok(1), Err(ApiError::http_status(503))]);
        resource.refetch();
        resource.settle().await;

        assert!(resource.refetch());
        assert!(resource.is_loading());
        assert_eq!(resource.data(), Some(&1));

        resource.settle().await;
        assert_eq!(resource.data(), Some(&1));
        assert_eq!(resource.error(), Some("HTTP error! status: 503"));
    }

    #[tokio::test]
    async fn test_refetch_while_loading_is_ignored() {
        let gate = Arc::new(Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let mut resource = gated(Arc::clone(&gate), Arc::new(AtomicBool::new(false)), Arc::clone(&calls));

        assert!(resource.refetch());
        assert!(!resource.refetch());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        gate.notify_one();
        assert!(resource.settle().await);
        assert_eq!(resource.data(), Some(&9));
        assert!(resource.refetch(), "a settled resource can fetch again");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_poll_applies_result_once() {
        let (mut resource, _) = scripted(vec![Ok(5)]);
        assert!(!resource.poll(), "nothing to poll before a fetch");

        resource.refetch();
        tokio::time::timeout(Duration::from_secs(1), async {
            while !resource.poll() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("request should finish");

        assert_eq!(resource.data(), Some(&5));
        assert!(!resource.poll());
    }

    #[tokio::test]
    async fn test_notifier_runs_when_request_finishes() {
        let notified = Arc::new(AtomicUsize::new(0));
        let (resource, _) = scripted(vec![Ok(3)]);
        let counter = Arc::clone(&notified);
        let mut resource = resource.with_notifier(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        resource.refetch();
        resource.settle().await;
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_drop_aborts_in_flight_request() {
        let gate = Arc::new(Notify::new());
        let finished = Arc::new(AtomicBool::new(false));
        let mut resource = gated(Arc::clone(&gate), Arc::clone(&finished), Arc::new(AtomicUsize::new(0)));

        resource.refetch();
        tokio::task::yield_now().await;
        drop(resource);

        // Stores a permit, so a surviving task would complete
        gate.notify_one();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }
}
