use crate::resolver::{Endpoint, ResolverSelection};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Same set as ECMAScript `encodeURIComponent`, which is what the Sesame service expects.
const TARGET_NAME_PCT_ENCODING_SET: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// XML output (`-ox`), resolvers tried in selection order.
const OUTPUT_XML: &str = "-ox";

/// Build `{endpoint}/-ox/{codes}?{name}`.
///
/// `target_name` is encoded as given (not trimmed, case kept).
pub fn build_request_url(endpoint: &Endpoint, selection: &ResolverSelection, target_name: &str) -> String {
	let base_url = endpoint.base_url();
	let codes = selection.codes();
	let name = percent_encoding::utf8_percent_encode(target_name, TARGET_NAME_PCT_ENCODING_SET);
	format!("{base_url}/{OUTPUT_XML}/{codes}?{name}")
}

// region:    --- Tests


// endregion: --- Tests
