//! Terminal front end for the shortening service.
//!
//! Each line read from stdin is one submission, as if typed into the URL
//! field and confirmed with Enter.

mod config;
mod logging;
mod qr;
mod render;
mod transport;

use std::error::Error;
use std::io::{self, BufRead, Write};

use shorten_core::{run_submission, QrState, ShortenClient, ShortenFlow, SubmissionState};

use config::Args;
use render::Screen;
use transport::UreqTransport;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::load();
    logging::init();

    let mut flow = ShortenFlow::new(ShortenClient::new(&args.base_url));
    if args.no_qr {
        flow = flow.without_qr();
    }
    let mut transport = UreqTransport::new(args.timeout());
    tracing::info!(base_url = %flow.client().base_url(), "ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;

    for raw in stdin.lock().split(b'\n') {
        let Some(line) = decode_line(raw?) else {
            println!("Error: input is not valid UTF-8");
            prompt(&mut stdout)?;
            continue;
        };
        let mut screen = Screen::default();
        run_submission(&mut flow, &mut transport, &line, |view| {
            for text in screen.update(view) {
                println!("{text}");
            }
        });

        if let (Some(path), SubmissionState::Shortened { qr: QrState::Shown(image), .. }) =
            (&args.save_qr, flow.state())
        {
            if let Some(written) = qr::save(image, path)? {
                println!("QR code saved to {}", written.display());
            }
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "Long URL: ")?;
    out.flush()
}

/// One stdin line as text, without its line ending. Lines that are not valid
/// UTF-8 are logged and skipped.
fn decode_line(mut raw: Vec<u8>) -> Option<String> {
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    match String::from_utf8(raw) {
        Ok(line) => Some(line),
        Err(err) => {
            tracing::warn!(error = %err, "skipping input line that is not valid UTF-8");
            None
        }
    }
}
