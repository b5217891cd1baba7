//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// region:    --- Common Clients

use mockito::{Matcher, Mock, ServerGuard};
use sesame::Client;

/// Client pointing to the mock server.
pub fn common_client(server: &ServerGuard) -> Client {
	init_tracing();
	Client::builder().with_endpoint(server.url()).build()
}

/// `RUST_LOG=sesame=trace cargo test -- --nocapture` to see the requests and replies.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

// endregion: --- Common Clients

// region:    --- Mock Sesame

/// Path matcher for `/-ox/{codes}`, whatever the query.
pub fn ox_path(codes: &str) -> Matcher {
	Matcher::Regex(format!(r"^/-ox/{codes}(\?|$)"))
}

/// Mock one successful Sesame reply for `codes`.
pub async fn mock_sesame_ok(server: &mut ServerGuard, codes: &str, body: String) -> Mock {
	server
		.mock("GET", ox_path(codes))
		.with_status(200)
		.with_header("content-type", "text/xml")
		.with_body(body)
		.expect(1)
		.create_async()
		.await
}

/// A reply with one resolver entry.
pub fn reply_with_position(codes: &str, ra: &str, dec: &str) -> String {
	format!(
		r#"<?xml version="1.0" encoding="UTF-8"?>
<Sesame xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="http://vizier.u-strasbg.fr/xml/sesame_4x.xsd">
<Target option="{codes}">
  <name>test-object</name>
  <!-- Q0001 #1 -->
  <Resolver name="S=Simbad (via url)">
    <otype>G</otype>
    <jpos>00:00:00.00 +00:00:00.0</jpos>
    <jradeg>{ra}</jradeg>
    <jdedeg>{dec}</jdedeg>
    <oname>TEST OBJECT</oname>
  </Resolver>
</Target>
</Sesame>
"#
	)
}

/// A reply where no resolver knew the name.
pub fn reply_not_found(codes: &str) -> String {
	format!(
		r#"<?xml version="1.0" encoding="UTF-8"?>
<Sesame>
<Target option="{codes}">
  <name>nothing-here</name>
  <INFO>*** Nothing found ***</INFO>
</Target>
</Sesame>
"#
	)
}

// endregion: --- Mock Sesame
