//! Plain-text rendering of the core's [`View`] for a line-oriented terminal.

use shorten_core::{ResultView, View};

pub fn result_line(view: &View) -> Option<String> {
    let line = match view.result.as_ref()? {
        ResultView::Processing => "Processing...".to_string(),
        ResultView::Link { href } => format!("Short URL: {href}"),
        ResultView::Invalid => shorten_core::error::VALIDATION_MESSAGE.to_string(),
        ResultView::Error { message } => format!("Error: {message}"),
    };
    Some(line)
}

pub fn qr_line(view: &View) -> Option<String> {
    let src = view.qr_src.as_ref()?;
    let kind = src
        .strip_prefix("data:")
        .and_then(|rest| rest.split([';', ',']).next())
        .unwrap_or("image");
    Some(format!("QR code ready ({kind}, {} bytes)", src.len()))
}

/// Remembers what is on screen so each view change prints only new lines.
#[derive(Debug, Default)]
pub struct Screen {
    result: Option<String>,
    qr: Option<String>,
}

impl Screen {
    pub fn update(&mut self, view: &View) -> Vec<String> {
        let mut lines = Vec::new();
        let result = result_line(view);
        if result != self.result {
            lines.extend(result.clone());
        }
        let qr = qr_line(view);
        if qr != self.qr {
            lines.extend(qr.clone());
        }
        self.result = result;
        self.qr = qr;
        lines
    }
}
