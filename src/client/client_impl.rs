use crate::resolver::{DEFAULT_RESOLVERS, ResolverSelection};
use crate::sesame::{Resolution, SesameReply, build_request_url};
use crate::webc::WebClient;
use crate::{Client, Error, Result};
use std::future::Future;

/// Public resolve functions
///
/// NOTE: These are plain functions returning a future, not `async fn`, so that the name and
///       resolvers are validated and the URL is built (with the endpoint current at call time)
///       before the caller even polls. The returned future only does the web call and parsing.
impl Client {
	/// Resolve `target_name` with the default resolvers (Simbad, NED, VizieR, in that order).
	pub fn resolve(&self, target_name: &str) -> impl Future<Output = Result<Resolution>> + Send + 'static {
		self.resolve_with(target_name, DEFAULT_RESOLVERS)
	}

	/// Resolve `target_name` trying `resolvers` in order.
	///
	/// `resolvers` are names (`"simbad"`, `"NED"`, ...) compared case-insensitively, or `ResolverKind`s.
	pub fn resolve_with<S: AsRef<str>>(
		&self,
		target_name: &str,
		resolvers: &[S],
	) -> impl Future<Output = Result<Resolution>> + Send + 'static {
		let reply_fut = self.resolve_reply(target_name, resolvers);

		async move {
			reply_fut.await.map(|reply| {
				let resolution = reply.resolution();
				tracing::debug!("Sesame resolution: {resolution:?}");
				resolution
			})
		}
	}

	/// Same as `resolve_with` but returns the whole parsed reply (object name, type, which resolver answered, ...).
	pub fn resolve_reply<S: AsRef<str>>(
		&self,
		target_name: &str,
		resolvers: &[S],
	) -> impl Future<Output = Result<SesameReply>> + Send + 'static {
		let url = self.prepare_url(target_name, resolvers);
		let web_client = self.inner.web_client.clone();

		async move { fetch_reply(&web_client, url?).await }
	}
}

// region:    --- Support

impl Client {
	/// Validate, then build the URL from the endpoint as it is now.
	fn prepare_url<S: AsRef<str>>(&self, target_name: &str, resolvers: &[S]) -> Result<String> {
		if target_name.trim().is_empty() {
			return Err(Error::MissingTargetName);
		}
		let selection = ResolverSelection::from_names(resolvers)?;

		let url = build_request_url(&self.endpoint(), &selection, target_name);
		tracing::debug!("Sesame request url: {url}");
		Ok(url)
	}
}

/// One GET, then status classification and XML parsing.
async fn fetch_reply(web_client: &WebClient, url: String) -> Result<SesameReply> {
	let web_res = match web_client.do_get(&url).await {
		Ok(web_res) => web_res,
		Err(webc_error) => return Err(Error::WebCall { url, webc_error }),
	};

	if !web_res.is_success() {
		tracing::debug!("Sesame failed status {} for {url}", web_res.status);
		return Err(Error::ServiceFailedStatus {
			status: web_res.status,
			body: web_res.body,
		});
	}

	tracing::trace!("Sesame reply body:\n{}", web_res.body);

	SesameReply::from_xml(&web_res.body)
}

// endregion: --- Support
