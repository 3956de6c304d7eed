//! Blocking [`Transport`] backed by a ureq agent.

use std::time::Duration;

use shorten_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Non-2xx statuses come back as responses; only I/O failures and the
    /// `timeout` are errors.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = req.method.as_str(), url = %req.url, "sending request");

        let result = match req.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&req.url);
                for (name, value) in &req.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&req.url);
                for (name, value) in &req.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &req.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!(status, "received response");
        Ok(HttpResponse { status, headers, body })
    }
}
