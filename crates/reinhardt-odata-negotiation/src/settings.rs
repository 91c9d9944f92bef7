//! Negotiation settings
//!
//! Defaults match the OData protocol; deployments can load overrides from
//! TOML:
//!
//! ```toml
//! default_charset = "utf-8"
//! supported_charsets = ["utf-8", "iso-8859-1"]
//!
//! [format_aliases]
//! json = "application/json"
//! xml = "application/xml"
//! csv = "text/csv"
//! ```

use indexmap::IndexMap;
use reinhardt_odata_exception::{ODataError, Result};
use reinhardt_odata_mime::UTF_8;
use serde::Deserialize;

/// The `$format` alias that resolves to the request kind's Atom type.
pub const ATOM_ALIAS: &str = "atom";

/// Tunables of the content negotiator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NegotiationSettings {
	/// Charset attached to results that do not carry one.
	pub default_charset: String,
	/// Charsets the server can honor when the representation leaves the
	/// charset open.
	pub supported_charsets: Vec<String>,
	/// `$format` short names and the media types they stand for.
	pub format_aliases: IndexMap<String, String>,
}

impl Default for NegotiationSettings {
	fn default() -> Self {
		let mut format_aliases = IndexMap::new();
		format_aliases.insert("json".to_string(), "application/json".to_string());
		format_aliases.insert("xml".to_string(), "application/xml".to_string());
		Self {
			default_charset: UTF_8.to_string(),
			supported_charsets: vec![UTF_8.to_string()],
			format_aliases,
		}
	}
}

impl NegotiationSettings {
	/// Loads settings from a TOML document; missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_negotiation::NegotiationSettings;
	///
	/// let settings = NegotiationSettings::from_toml_str(r#"
	/// supported_charsets = ["UTF-8", "ISO-8859-1"]
	/// "#).unwrap();
	/// assert!(settings.honors_charset("iso-8859-1"));
	/// assert_eq!(settings.default_charset, "utf-8");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source).map_err(|e| {
			ODataError::InvalidArgument(format!("invalid negotiation settings: {}", e))
		})?;
		settings.normalized()
	}

	/// Lower-cases charsets and alias names and checks that the default
	/// charset is one the server honors.
	pub fn normalized(mut self) -> Result<Self> {
		self.default_charset = self.default_charset.to_ascii_lowercase();
		for charset in &mut self.supported_charsets {
			*charset = charset.to_ascii_lowercase();
		}
		self.format_aliases = self
			.format_aliases
			.into_iter()
			.map(|(alias, media_type)| (alias.to_ascii_lowercase(), media_type))
			.collect();

		if !self.honors_charset(&self.default_charset) {
			return Err(ODataError::InvalidArgument(format!(
				"default charset '{}' is not among the supported charsets",
				self.default_charset
			)));
		}
		if self.format_aliases.contains_key(ATOM_ALIAS) {
			return Err(ODataError::InvalidArgument(format!(
				"'{}' is a reserved format alias",
				ATOM_ALIAS
			)));
		}
		Ok(self)
	}

	/// Returns `true` when the server can produce output in `charset`.
	pub fn honors_charset(&self, charset: &str) -> bool {
		self.supported_charsets
			.iter()
			.any(|supported| supported.eq_ignore_ascii_case(charset))
	}

	/// Looks up a `$format` alias (case-insensitive).
	pub fn format_alias(&self, alias: &str) -> Option<&str> {
		self.format_aliases
			.get(&alias.to_ascii_lowercase())
			.map(String::as_str)
	}
}
