//! Sesame `-ox` XML reply.
//!
//! ```xml
//! <Sesame>
//!   <Target option="SNV">
//!     <name>M31</name>
//!     <Resolver name="S=Simbad (via url)">
//!       <otype>G</otype>
//!       <jpos>00:42:44.33 +41:16:07.5</jpos>
//!       <jradeg>10.68470833</jradeg>
//!       <jdedeg>41.26875000</jdedeg>
//!       <oname>M  31</oname>
//!     </Resolver>
//!   </Target>
//! </Sesame>
//! ```
//!
//! The service stops at the first resolver that knows the name, so there is usually
//! at most one `Resolver` entry, and it is not necessarily the first one requested.

use crate::Result;
use crate::resolver::ResolverKind;
use crate::sesame::{Position, Resolution};
use quick_xml::DeError;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use serde::de::Error as _;

const SESAME_ROOT: &str = "Sesame";

// region:    --- SesameReply

/// The root `Sesame` element. A reply always carries one `Target`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SesameReply {
	#[serde(rename = "Target")]
	pub target: SesameTarget,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SesameTarget {
	/// The resolver codes the service was asked for (e.g. `SNV`).
	#[serde(rename = "@option", default)]
	pub option: Option<String>,

	/// The name as the service received it.
	#[serde(default)]
	pub name: Option<String>,

	#[serde(rename = "INFO", default)]
	pub infos: Vec<String>,

	#[serde(rename = "ERROR", default)]
	pub errors: Vec<String>,

	#[serde(rename = "Resolver", default)]
	pub resolvers: Vec<SesameResolverEntry>,
}

/// One `Resolver` block. All fields are kept as text, as the service sends them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SesameResolverEntry {
	/// e.g. `S=Simbad (via url)`
	#[serde(rename = "@name", default)]
	pub name: Option<String>,

	#[serde(rename = "INFO", default)]
	pub infos: Vec<String>,

	/// Canonical object name
	#[serde(default)]
	pub oname: Option<String>,

	/// Object type
	#[serde(default)]
	pub otype: Option<String>,

	/// Sexagesimal J2000 position
	#[serde(default)]
	pub jpos: Option<String>,

	/// Right ascension, J2000, decimal degrees
	#[serde(default)]
	pub jradeg: Option<String>,

	/// Declination, J2000, decimal degrees
	#[serde(default)]
	pub jdedeg: Option<String>,
}

/// Constructors
impl SesameReply {
	/// Parse a reply body. Anything that is not a `Sesame` document with a `Target` is an `Error::XmlParse`.
	pub fn from_xml(xml: &str) -> Result<Self> {
		check_root_element(xml)?;
		let reply = quick_xml::de::from_str(xml)?;
		Ok(reply)
	}
}

/// Getters
impl SesameReply {
	/// The first resolver entry, in the order the service returned them.
	pub fn first_resolver(&self) -> Option<&SesameResolverEntry> {
		self.target.resolvers.first()
	}

	/// Position from the first resolver entry only.
	///
	/// No entry, or an entry whose coordinates are not numbers, gives `Resolution::NoResult`.
	pub fn resolution(&self) -> Resolution {
		let Some(entry) = self.first_resolver() else {
			return Resolution::NoResult;
		};

		match entry.position() {
			Some(position) => Resolution::Position(position),
			None => {
				tracing::warn!(
					"Sesame resolver entry {:?} has no usable coordinates (jradeg: {:?}, jdedeg: {:?})",
					entry.name,
					entry.jradeg,
					entry.jdedeg
				);
				Resolution::NoResult
			}
		}
	}
}

impl SesameResolverEntry {
	/// Which database answered, from the leading code letter of the `name` attribute.
	pub fn resolver_kind(&self) -> Option<ResolverKind> {
		let code = self.name.as_deref()?.trim_start().chars().next()?;
		ResolverKind::from_code(code)
	}

	pub fn position(&self) -> Option<Position> {
		let ra = parse_degrees(self.jradeg.as_deref())?;
		let dec = parse_degrees(self.jdedeg.as_deref())?;
		Some(Position::j2000(ra, dec))
	}
}

// endregion: --- SesameReply

// region:    --- Support

/// The deserializer does not look at the root element name, so an html page would pass.
fn check_root_element(xml: &str) -> Result<()> {
	let mut reader = Reader::from_str(xml);
	loop {
		match reader.read_event() {
			Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
				if e.name().as_ref() == SESAME_ROOT.as_bytes() {
					return Ok(());
				}
				let found = String::from_utf8_lossy(e.name().as_ref()).into_owned();
				return Err(DeError::custom(format!("expected <{SESAME_ROOT}> root element, found <{found}>")).into());
			}
			Ok(Event::Eof) => return Err(DeError::custom(format!("no <{SESAME_ROOT}> root element")).into()),
			Err(e) => return Err(DeError::from(e).into()),
			// declaration, comments, doctype, whitespace
			Ok(_) => {}
		}
	}
}

fn parse_degrees(value: Option<&str>) -> Option<f64> {
	let value: f64 = value?.trim().parse().ok()?;
	value.is_finite().then_some(value)
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
