//! Submission state machine driving [`ShortenClient`].
//!
//! # Design
//! The flow never performs I/O. `submit` and `on_shorten_settled` hand back
//! the request to execute next; the host runs it and reports the outcome.
//! [`run_submission`] is the sequential driver for hosts that are happy to
//! block on each call.

use tracing::{debug, info, warn};

use crate::client::ShortenClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::state::{QrState, SubmissionState, Ticket};
use crate::view::{render, View};

/// QR request issued after a successful shorten, tagged with its submission.
#[derive(Debug, Clone)]
pub struct QrFetch {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

#[derive(Debug, Clone)]
pub struct ShortenFlow {
    client: ShortenClient,
    state: SubmissionState,
    last_ticket: Ticket,
    fetch_qr: bool,
}

impl ShortenFlow {
    pub fn new(client: ShortenClient) -> Self {
        Self {
            client,
            state: SubmissionState::Idle,
            last_ticket: 0,
            fetch_qr: true,
        }
    }

    /// Skip the QR augmentation; successful submissions end with the image hidden.
    pub fn without_qr(mut self) -> Self {
        self.fetch_qr = false;
        self
    }

    pub fn client(&self) -> &ShortenClient {
        &self.client
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn view(&self) -> View {
        render(&self.state)
    }

    /// Start a submission. Returns the shorten request to execute, or `None`
    /// when the input was rejected locally or a submission is already running.
    pub fn submit(&mut self, input: &str) -> Option<HttpRequest> {
        if !self.state.accepts_submit() {
            debug!("submit ignored while a request is in flight");
            return None;
        }

        let long_url = input.trim();
        if long_url.is_empty() {
            self.transition(SubmissionState::Invalid);
            return None;
        }

        let request = match self.client.build_shorten(long_url) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "could not build shorten request");
                self.transition(SubmissionState::Failed {
                    message: err.user_message(),
                });
                return None;
            }
        };

        self.last_ticket += 1;
        self.transition(SubmissionState::Submitting {
            ticket: self.last_ticket,
            long_url: long_url.to_string(),
        });
        Some(request)
    }

    /// Report the outcome of the shorten request. Returns the QR request to
    /// run next when the shorten succeeded.
    pub fn on_shorten_settled(&mut self, result: Result<HttpResponse, ApiError>) -> Option<QrFetch> {
        let (ticket, long_url) = match &self.state {
            SubmissionState::Submitting { ticket, long_url } => (*ticket, long_url.clone()),
            other => {
                warn!(state = other.name(), "shorten result arrived with no submission in flight");
                return None;
            }
        };

        match result.and_then(|response| self.client.parse_shorten(response)) {
            Ok(shortened) => {
                info!(%long_url, short_url = %shortened.short_url, "url shortened");
                let qr = if self.fetch_qr { QrState::Pending } else { QrState::Hidden };
                let fetch = self.fetch_qr.then(|| QrFetch {
                    ticket,
                    request: self.client.build_qr(&long_url),
                });
                self.transition(SubmissionState::Shortened {
                    ticket,
                    long_url,
                    short_url: shortened.short_url,
                    qr,
                });
                fetch
            }
            Err(err) => {
                warn!(%long_url, error = %err, "shorten request failed");
                self.transition(SubmissionState::Failed {
                    message: err.user_message(),
                });
                None
            }
        }
    }

    /// Report the outcome of a QR request. Failures only hide the image; the
    /// shorten result stays as it is.
    pub fn on_qr_settled(&mut self, ticket: Ticket, result: Result<HttpResponse, ApiError>) {
        let (current, qr) = match &mut self.state {
            SubmissionState::Shortened { ticket: current, qr, .. } if *qr == QrState::Pending => (*current, qr),
            other => {
                warn!(ticket, state = other.name(), "dropping QR result for a finished submission");
                return;
            }
        };
        if current != ticket {
            warn!(ticket, current, "dropping stale QR result");
            return;
        }

        *qr = match result.and_then(|response| self.client.parse_qr(response)) {
            Ok(image) => QrState::Shown(image),
            Err(err) => {
                warn!(error = %err, "QR code request failed");
                QrState::Hidden
            }
        };
        debug!(state = self.state.name(), "submission state changed");
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!(from = self.state.name(), to = next.name(), "submission state changed");
        self.state = next;
    }
}

/// Run one submission to completion through `transport`, calling `on_change`
/// with the view after every state change.
pub fn run_submission<T, F>(flow: &mut ShortenFlow, mut transport: T, input: &str, mut on_change: F)
where
    T: Transport,
    F: FnMut(&View),
{
    let request = flow.submit(input);
    on_change(&flow.view());
    let Some(request) = request else {
        return;
    };

    let fetch = flow.on_shorten_settled(transport.execute(&request));
    on_change(&flow.view());
    let Some(fetch) = fetch else {
        return;
    };

    let result = transport.execute(&fetch.request);
    flow.on_qr_settled(fetch.ticket, result);
    on_change(&flow.view());
}
