//! # Resource State
//!
//! Loading/data/error state for one independently fetched resource.
//!
//! ## Lifecycle:
//! `Idle -> Loading -> Success` or `Idle -> Loading -> Error`, and back to
//! `Loading` on every refetch. Data from the last success survives both a
//! refetch and a later error.
//!
//! ## Request tickets:
//! `begin()` hands out a ticket for the request it starts and refuses to start
//! a second one while the first is in flight. `complete()` only accepts the
//! ticket of the current request, so a late answer to an abandoned request can
//! never overwrite newer state.

use log::{debug, warn};

use crate::ApiError;

/// Where a resource is in its fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePhase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Identifies one request issued by a `ResourceState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    phase: ResourcePhase,
    data: Option<T>,
    error: Option<String>,
    in_flight: Option<RequestTicket>,
    next_ticket: u64,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceState<T> {
    pub fn new() -> Self {
        Self {
            phase: ResourcePhase::Idle,
            data: None,
            error: None,
            in_flight: None,
            next_ticket: 0,
        }
    }

    /// Enter `Loading` and return the ticket for the new request, or `None`
    /// when a request is already in flight.
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.in_flight.is_some() {
            debug!("Request already in flight, not starting another");
            return None;
        }

        let ticket = RequestTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.phase = ResourcePhase::Loading;
        self.error = None;
        Some(ticket)
    }

    /// Record the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched for a stale ticket.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<T, ApiError>) -> bool {
        if self.in_flight != Some(ticket) {
            warn!("Ignoring stale response for request {:?}", ticket);
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.phase = ResourcePhase::Success;
            }
            Err(error) => {
                self.error = Some(error.message);
                self.phase = ResourcePhase::Error;
            }
        }
        true
    }

    /// Forget the in-flight request without recording an outcome.
    ///
    /// The phase falls back to `Error` if an error is still recorded, `Success`
    /// if data exists, otherwise `Idle`.
    pub fn abandon(&mut self) {
        if self.in_flight.take().is_none() {
            return;
        }
        self.phase = if self.error.is_some() {
            ResourcePhase::Error
        } else if self.data.is_some() {
            ResourcePhase::Success
        } else {
            ResourcePhase::Idle
        };
    }

    pub fn phase(&self) -> ResourcePhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ResourcePhase::Loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn in_flight(&self) -> Option<RequestTicket> {
        self.in_flight
    }
}
