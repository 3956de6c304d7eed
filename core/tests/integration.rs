//! Full submissions against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `ShortenFlow` over
//! real HTTP using ureq. Validates that request building and response parsing
//! agree with the actual server.

use shorten_core::{
    run_submission, ApiError, HttpMethod, HttpRequest, HttpResponse, QrState, ResultView, ShortenClient,
    ShortenFlow, SubmissionState, Transport,
};

/// Executes requests with ureq, returning 4xx/5xx responses as data rather
/// than `Err` so the core handles status interpretation.
struct Ureq(ureq::Agent);

impl Ureq {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self(agent)
    }
}

impl Transport for Ureq {
    fn execute(&mut self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, &req.body) {
            (HttpMethod::Get, _) => self.0.get(&req.url).call(),
            (HttpMethod::Post, Some(body)) => self
                .0
                .post(&req.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.0.post(&req.url).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

/// Start the mock server on a random port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();
    let base_url = format!("http://{addr}");
    let public = base_url.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, &public).await
        })
        .unwrap();
    });

    base_url
}

#[test]
fn submission_lifecycle() {
    let base_url = start_server();
    let mut flow = ShortenFlow::new(ShortenClient::new(&base_url));
    let mut transport = Ureq::new();

    // Step 1: blank input is rejected locally.
    run_submission(&mut flow, &mut transport, "   ", |_| {});
    assert_eq!(flow.state(), &SubmissionState::Invalid);

    // Step 2: shorten a valid URL, QR code follows.
    let mut views = Vec::new();
    run_submission(&mut flow, &mut transport, " https://example.com/a?b=1 ", |v| {
        views.push(v.clone())
    });
    assert_eq!(views.len(), 3);
    assert!(!views[0].submit_enabled);
    let short_url = match flow.state() {
        SubmissionState::Shortened {
            short_url,
            qr: QrState::Shown(image),
            ..
        } => {
            assert!(image.as_str().starts_with("data:image/svg+xml;base64,"));
            let (mime, bytes) = image.decode().unwrap();
            assert_eq!(mime, "image/svg+xml");
            assert!(String::from_utf8(bytes).unwrap().contains("<svg"));
            short_url.clone()
        }
        other => panic!("expected shortened state with QR, got {other:?}"),
    };
    assert!(short_url.starts_with(&format!("{base_url}/")));
    assert_eq!(
        views[2].result,
        Some(ResultView::Link {
            href: short_url.clone()
        })
    );

    // Step 3: shortening the same URL again yields the same link.
    run_submission(&mut flow, &mut transport, "https://example.com/a?b=1", |_| {});
    match flow.state() {
        SubmissionState::Shortened { short_url: again, .. } => assert_eq!(again, &short_url),
        other => panic!("expected shortened state, got {other:?}"),
    }

    // Step 4: the server's validation message reaches the user.
    run_submission(&mut flow, &mut transport, "ftp://example.com", |_| {});
    let view = flow.view();
    assert_eq!(
        view.result,
        Some(ResultView::Error {
            message: "URL must start with http:// or https://".to_string()
        })
    );
    assert!(view.submit_enabled);
    assert_eq!(view.qr_src, None);
}

#[test]
fn unreachable_server_surfaces_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let mut flow = ShortenFlow::new(ShortenClient::new(&format!("http://{addr}")));

    run_submission(&mut flow, Ureq::new(), "https://example.com", |_| {});
    let view = flow.view();
    assert!(matches!(view.result, Some(ResultView::Error { .. })));
    assert!(view.submit_enabled);
}
