//! Explicit state of a single submission.
//!
//! Every combination the UI can show is a variant here, so a QR image next
//! to an error message cannot be represented.

use crate::types::QrImage;

/// Sequence number of an accepted submission. QR results carry the ticket of
/// the submission that requested them so late arrivals can be recognised.
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// The last submission was empty after trimming.
    Invalid,
    /// The shorten request is in flight.
    Submitting { ticket: Ticket, long_url: String },
    /// The shorten request succeeded.
    Shortened {
        ticket: Ticket,
        long_url: String,
        short_url: String,
        qr: QrState,
    },
    /// The shorten request failed; `message` is what the user sees.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrState {
    Pending,
    Shown(QrImage),
    Hidden,
}

impl SubmissionState {
    /// The submit control accepts input in every state but `Submitting`.
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, SubmissionState::Submitting { .. })
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Invalid => "invalid",
            SubmissionState::Submitting { .. } => "submitting",
            SubmissionState::Shortened { qr: QrState::Pending, .. } => "qr_pending",
            SubmissionState::Shortened { qr: QrState::Shown(_), .. } => "qr_shown",
            SubmissionState::Shortened { qr: QrState::Hidden, .. } => "qr_hidden",
            SubmissionState::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_submitting_blocks_submit() {
        assert!(SubmissionState::Idle.accepts_submit());
        assert!(SubmissionState::Invalid.accepts_submit());
        assert!(SubmissionState::Failed { message: "x".to_string() }.accepts_submit());
        assert!(!SubmissionState::Submitting {
            ticket: 1,
            long_url: "https://a".to_string()
        }
        .accepts_submit());
        assert!(SubmissionState::Shortened {
            ticket: 1,
            long_url: "https://a".to_string(),
            short_url: "http://x/abc".to_string(),
            qr: QrState::Pending,
        }
        .accepts_submit());
    }
}
