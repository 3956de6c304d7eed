//! Pure mapping from [`SubmissionState`] to what the UI shows.

use crate::error::VALIDATION_MESSAGE;
use crate::state::{QrState, SubmissionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub submit_enabled: bool,
    pub result: Option<ResultView>,
    /// Image source of the QR code; `None` keeps the image hidden.
    pub qr_src: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Processing,
    /// Rendered as a link opening in a new browsing context.
    Link { href: String },
    Invalid,
    Error { message: String },
}

pub fn render(state: &SubmissionState) -> View {
    let (result, qr_src) = match state {
        SubmissionState::Idle => (None, None),
        SubmissionState::Invalid => (Some(ResultView::Invalid), None),
        SubmissionState::Submitting { .. } => (Some(ResultView::Processing), None),
        SubmissionState::Shortened { short_url, qr, .. } => {
            let qr_src = match qr {
                QrState::Shown(image) => Some(image.as_str().to_string()),
                QrState::Pending | QrState::Hidden => None,
            };
            (
                Some(ResultView::Link {
                    href: short_url.clone(),
                }),
                qr_src,
            )
        }
        SubmissionState::Failed { message } => (
            Some(ResultView::Error {
                message: message.clone(),
            }),
            None,
        ),
    };
    View {
        submit_enabled: state.accepts_submit(),
        result,
        qr_src,
    }
}

impl View {
    /// Markup of the result area, as the browser page renders it.
    pub fn result_html(&self) -> String {
        match &self.result {
            None => String::new(),
            Some(ResultView::Processing) => "Processing...".to_string(),
            Some(ResultView::Link { href }) => {
                let href = escape_html(href);
                format!(r#"Short URL: <a href="{href}" target="_blank">{href}</a>"#)
            }
            Some(ResultView::Invalid) => {
                format!(r#"<span style="color: red;">{VALIDATION_MESSAGE}</span>"#)
            }
            Some(ResultView::Error { message }) => {
                format!(r#"<span style="color: red;">Error: {}</span>"#, escape_html(message))
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
