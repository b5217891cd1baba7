use crate::webc::Result;
use reqwest::{Method, StatusCode};

/// Thin wrapper over a `reqwest::Client`.
/// Cloning is cheap (the reqwest client is itself reference counted).
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

/// Constructors
impl WebClient {
	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		WebClient { reqwest_client }
	}
}

/// Web method implementations
impl WebClient {
	/// Issue one GET and read the full body as text, whatever the status.
	///
	/// Only transport failures are errors here. Status classification is left to the caller,
	/// which knows how the service reports its own failures.
	pub async fn do_get(&self, url: &str) -> Result<WebResponse> {
		let reqwest_res = self.reqwest_client.request(Method::GET, url).send().await?;

		let status = reqwest_res.status();
		let body = reqwest_res.text().await?;

		Ok(WebResponse { status, body })
	}
}

// region:    --- WebResponse

#[derive(Debug)]
pub struct WebResponse {
	pub status: StatusCode,
	pub body: String,
}

impl WebResponse {
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}
}

// endregion: --- WebResponse
