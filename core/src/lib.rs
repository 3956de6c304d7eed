//! Client core for a URL shortening service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of the stateless
//! [`ShortenClient`] sits [`ShortenFlow`], the explicit state machine of one
//! submission: validate, shorten, then fetch a QR code for the original URL.
//! [`view::render`] maps that state to what a UI shows.
//!
//! # Design
//! - The host executes requests through the [`Transport`] trait or by
//!   calling the flow's step methods from its own event loop.
//! - QR failures are logged and hide the image; they never touch the
//!   shorten result.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod flow;
pub mod http;
pub mod state;
pub mod types;
pub mod view;

pub use client::ShortenClient;
pub use error::ApiError;
pub use flow::{run_submission, QrFetch, ShortenFlow};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use state::{QrState, SubmissionState, Ticket};
pub use types::{ErrorBody, QrImage, QrRequest, ShortenRequest, ShortenResponse};
pub use view::{render, ResultView, View};
