use anyhow::{Context, Result};
use reqwest::{Client, header::CONTENT_TYPE};
use std::time::Duration;

/// Status and body of a finished request.
#[derive(Debug)]
pub struct HttpResponse {
	pub status: u16,
	pub body: String,
}

impl HttpResponse {
	#[must_use]
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// The beginning of the body, for error messages.
	#[must_use]
	pub fn body_excerpt(&self) -> &str {
		let mut end = self.body.len().min(200);
		while !self.body.is_char_boundary(end) {
			end -= 1;
		}
		self.body[..end].trim()
	}
}

/// A `reqwest` client that identifies itself with the configured user agent.
#[derive(Clone, Debug)]
pub struct HttpClient {
	client: Client,
}

impl HttpClient {
	pub fn new(user_agent: &str, timeout: Duration) -> Result<HttpClient> {
		let client = Client::builder()
			.user_agent(user_agent)
			.timeout(timeout)
			.build()
			.context("failed to build HTTP client")?;
		Ok(HttpClient { client })
	}

	/// POSTs an already encoded `application/x-www-form-urlencoded` body.
	pub async fn post_form(&self, url: &str, body: String) -> Result<HttpResponse> {
		log::debug!("POST {url} ({} bytes)", body.len());
		let response = self
			.client
			.post(url)
			.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(body)
			.send()
			.await
			.with_context(|| format!("request to {url} failed"))?;
		let status = response.status().as_u16();
		let body = response
			.text()
			.await
			.with_context(|| format!("failed to read response of {url}"))?;
		Ok(HttpResponse { status, body })
	}

	pub async fn get(&self, url: &str) -> Result<HttpResponse> {
		log::debug!("GET {url}");
		let response = self
			.client
			.get(url)
			.send()
			.await
			.with_context(|| format!("request to {url} failed"))?;
		let status = response.status().as_u16();
		let body = response
			.text()
			.await
			.with_context(|| format!("failed to read response of {url}"))?;
		Ok(HttpResponse { status, body })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn excerpt_is_cut_on_char_boundary() {
		let response = HttpResponse {
			status: 500,
			body: format!("{}ä tail", "x".repeat(199)),
		};
		assert_eq!(response.body_excerpt(), "x".repeat(199));
		assert!(!response.is_success());
	}

	#[test]
	fn client_builds() {
		assert!(HttpClient::new("osmextract-tests", Duration::from_secs(1)).is_ok());
	}
}
