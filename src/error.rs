use crate::webc;
use derive_more::{Display, From};
use reqwest::StatusCode;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	// -- Validation
	#[display("Missing target name")]
	MissingTargetName,

	#[display(
		"Unsupported resolver{}: {}",
		if names.len() == 1 { "" } else { "s" },
		names.join(", ")
	)]
	UnsupportedResolvers { names: Vec<String> },

	#[display("At least one resolver is required")]
	NoResolver,

	#[display("A resolver may only be used once (duplicate: {name})")]
	DuplicateResolver { name: String },

	// -- Web Call
	/// No response was obtained from the service (connection, dns, tls, ...).
	#[display("No response from name resolver at '{url}': {webc_error}")]
	WebCall { url: String, webc_error: webc::Error },

	/// The service answered with a non-success status.
	/// The body is the service's own description of the failure, so it is the message.
	#[display("{body}")]
	ServiceFailedStatus { status: StatusCode, body: String },

	// -- Reply
	#[display("Cannot parse name resolver reply: {_0}")]
	#[from]
	XmlParse(quick_xml::DeError),
}

impl Error {
	/// True for the errors raised before any network access (bad name or resolver list).
	#[must_use]
	pub const fn is_validation(&self) -> bool {
		matches!(
			self,
			Self::MissingTargetName | Self::UnsupportedResolvers { .. } | Self::NoResolver | Self::DuplicateResolver { .. }
		)
	}
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

// region:    --- Tests


// endregion: --- Tests
