//! Media range value type
//!
//! A [`MediaRange`] is the parsed form of one Accept-header token or one
//! server-supported representation: `type/subtype` plus ordered parameters and
//! a quality factor. Names are lower-cased on the way in, so comparisons are
//! case-insensitive on names; `charset` values are lower-cased as well.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use reinhardt_odata_exception::{ODataError, Result};

/// Name of the charset parameter.
pub const CHARSET: &str = "charset";

/// Name of the quality parameter.
pub const QUALITY: &str = "q";

/// The wildcard token used for type and subtype.
pub const WILDCARD: &str = "*";

/// Quality factor of a media range, kept exact in thousandths (0..=1000).
///
/// # Examples
///
/// ```
/// use reinhardt_odata_mime::Quality;
///
/// let q = Quality::parse("0.5").unwrap();
/// assert_eq!(q.millis(), 500);
/// assert!(q < Quality::MAX);
/// assert_eq!(q.to_string(), "0.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u16);

impl Quality {
	/// `q=1`, the implicit default.
	pub const MAX: Quality = Quality(1000);
	/// `q=0`, "not acceptable".
	pub const MIN: Quality = Quality(0);

	/// Builds a quality from thousandths; `None` above 1000.
	pub fn from_millis(millis: u16) -> Option<Self> {
		(millis <= 1000).then_some(Self(millis))
	}

	/// The quality in thousandths.
	pub fn millis(self) -> u16 {
		self.0
	}

	/// Returns `true` for `q=0`.
	pub fn is_zero(self) -> bool {
		self.0 == 0
	}

	/// Parses an HTTP qvalue (`0`, `0.8`, `1.000`, ...).
	pub fn parse(s: &str) -> Result<Self> {
		let invalid = || ODataError::InvalidArgument(format!("invalid quality value '{}'", s));
		let (int, frac) = s.split_once('.').unwrap_or((s, ""));
		if frac.len() > 3 || !frac.chars().all(|c| c.is_ascii_digit()) {
			return Err(invalid());
		}
		match int {
			"0" => {
				let mut millis: u16 = 0;
				for (i, digit) in frac.bytes().enumerate() {
					let weight = 10u16.pow(2 - i as u32);
					millis += u16::from(digit - b'0') * weight;
				}
				Ok(Self(millis))
			}
			"1" if frac.bytes().all(|b| b == b'0') => Ok(Self::MAX),
			_ => Err(invalid()),
		}
	}
}

impl Default for Quality {
	fn default() -> Self {
		Self::MAX
	}
}

impl fmt::Display for Quality {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			1000 => f.write_str("1"),
			0 => f.write_str("0"),
			millis => {
				let digits = format!("{:03}", millis);
				write!(f, "0.{}", digits.trim_end_matches('0'))
			}
		}
	}
}

/// How precisely two media ranges match, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
	/// One side is `*/*`.
	Wildcard,
	/// Same type, at least one side is `type/*`.
	SubtypeWildcard,
	/// Same concrete type and subtype.
	Exact,
}

/// A parsed media range such as `application/json;charset=utf-8;q=0.8`.
///
/// Equality ignores the quality factor and parameter order.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_mime::MediaRange;
///
/// let range = MediaRange::parse("Application/XML; Charset=UTF-8; q=0.9").unwrap();
/// assert_eq!(range.main_type(), "application");
/// assert_eq!(range.subtype(), "xml");
/// assert_eq!(range.charset(), Some("utf-8"));
/// assert_eq!(range.quality().millis(), 900);
/// assert_eq!(range.to_string(), "application/xml;charset=utf-8");
/// ```
#[derive(Debug, Clone)]
pub struct MediaRange {
	main_type: String,
	subtype: String,
	parameters: IndexMap<String, String>,
	quality: Quality,
}

impl MediaRange {
	/// Creates a media range without parameters and with quality 1.
	///
	/// Intended for server-declared constants; client input goes through
	/// [`MediaRange::parse`], which validates the tokens.
	pub fn new(main_type: impl Into<String>, subtype: impl Into<String>) -> Self {
		Self {
			main_type: main_type.into().to_ascii_lowercase(),
			subtype: subtype.into().to_ascii_lowercase(),
			parameters: IndexMap::new(),
			quality: Quality::MAX,
		}
	}

	/// The `*/*` range.
	pub fn wildcard() -> Self {
		Self::new(WILDCARD, WILDCARD)
	}

	/// Parses a single media range token.
	///
	/// Rejects missing or empty type/subtype, a `*/subtype` combination,
	/// malformed or duplicate parameters, and invalid quality values.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_mime::MediaRange;
	///
	/// assert!(MediaRange::parse("text/*").is_ok());
	/// assert!(MediaRange::parse("*/xml").is_err());
	/// assert!(MediaRange::parse("text").is_err());
	/// assert!(MediaRange::parse("text/plain;q=1.5").is_err());
	/// ```
	pub fn parse(s: &str) -> Result<Self> {
		let invalid = |reason: &str| {
			ODataError::InvalidArgument(format!("invalid media range '{}': {}", s, reason))
		};

		let mut parts = s.split(';');
		let essence = parts.next().map(str::trim).unwrap_or_default();
		let (main_type, subtype) = essence
			.split_once('/')
			.ok_or_else(|| invalid("missing '/'"))?;
		let main_type = main_type.trim().to_ascii_lowercase();
		let subtype = subtype.trim().to_ascii_lowercase();

		if !is_token(&main_type) || !is_token(&subtype) {
			return Err(invalid("type and subtype must be non-empty tokens"));
		}
		if main_type == WILDCARD && subtype != WILDCARD {
			return Err(invalid("a type wildcard requires a subtype wildcard"));
		}

		let mut range = Self {
			main_type,
			subtype,
			parameters: IndexMap::new(),
			quality: Quality::MAX,
		};

		for param in parts {
			let param = param.trim();
			if param.is_empty() {
				continue;
			}
			let (name, value) = param
				.split_once('=')
				.ok_or_else(|| invalid("parameter without '='"))?;
			let name = name.trim().to_ascii_lowercase();
			let value = unquote(value.trim());
			if !is_token(&name) {
				return Err(invalid("parameter name must be a token"));
			}
			if name == QUALITY {
				range.quality = Quality::parse(value)?;
				continue;
			}
			if range.parameters.contains_key(&name) {
				return Err(invalid("duplicate parameter"));
			}
			let value = normalize_value(&name, value);
			range.parameters.insert(name, value);
		}

		Ok(range)
	}

	/// Adds (or replaces) a parameter. `q` sets the quality instead and is
	/// ignored when it is not a valid qvalue.
	pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let name = name.into().to_ascii_lowercase();
		let value = value.into();
		if name == QUALITY {
			if let Ok(quality) = Quality::parse(&value) {
				self.quality = quality;
			}
			return self;
		}
		let value = normalize_value(&name, &value);
		self.parameters.insert(name, value);
		self
	}

	/// Shorthand for `with_parameter("charset", charset)`.
	pub fn with_charset(self, charset: impl Into<String>) -> Self {
		self.with_parameter(CHARSET, charset)
	}

	/// Replaces the quality factor.
	pub fn with_quality(mut self, quality: Quality) -> Self {
		self.quality = quality;
		self
	}

	pub fn main_type(&self) -> &str {
		&self.main_type
	}

	pub fn subtype(&self) -> &str {
		&self.subtype
	}

	/// Parameters in declaration order, `q` excluded.
	pub fn parameters(&self) -> &IndexMap<String, String> {
		&self.parameters
	}

	/// Looks up a parameter by (case-insensitive) name.
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.parameters
			.get(&name.to_ascii_lowercase())
			.map(String::as_str)
	}

	pub fn charset(&self) -> Option<&str> {
		self.parameter(CHARSET)
	}

	pub fn quality(&self) -> Quality {
		self.quality
	}

	/// `type/subtype` without parameters.
	pub fn essence(&self) -> String {
		format!("{}/{}", self.main_type, self.subtype)
	}

	/// Returns `true` for `*/*`.
	pub fn is_wildcard(&self) -> bool {
		self.main_type == WILDCARD
	}

	/// Returns `true` for `type/*` with a concrete type.
	pub fn is_subtype_wildcard(&self) -> bool {
		self.main_type != WILDCARD && self.subtype == WILDCARD
	}

	/// Returns `true` when neither type nor subtype is a wildcard.
	pub fn is_concrete(&self) -> bool {
		self.main_type != WILDCARD && self.subtype != WILDCARD
	}

	/// How specific this range is on its own; used to rank Accept entries.
	pub fn specificity(&self) -> Specificity {
		if self.is_wildcard() {
			Specificity::Wildcard
		} else if self.is_subtype_wildcard() {
			Specificity::SubtypeWildcard
		} else {
			Specificity::Exact
		}
	}

	/// Compares type and subtype against another range, honoring wildcards on
	/// either side. Parameters are not considered here.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_mime::{MediaRange, Specificity};
	///
	/// let gif = MediaRange::new("image", "gif");
	/// assert_eq!(gif.match_specificity(&MediaRange::new("image", "gif")), Some(Specificity::Exact));
	/// assert_eq!(gif.match_specificity(&MediaRange::new("image", "*")), Some(Specificity::SubtypeWildcard));
	/// assert_eq!(gif.match_specificity(&MediaRange::wildcard()), Some(Specificity::Wildcard));
	/// assert_eq!(gif.match_specificity(&MediaRange::new("image", "png")), None);
	/// ```
	pub fn match_specificity(&self, other: &MediaRange) -> Option<Specificity> {
		if self.is_wildcard() || other.is_wildcard() {
			return Some(Specificity::Wildcard);
		}
		if self.main_type != other.main_type {
			return None;
		}
		if self.subtype == WILDCARD || other.subtype == WILDCARD {
			return Some(Specificity::SubtypeWildcard);
		}
		(self.subtype == other.subtype).then_some(Specificity::Exact)
	}

	/// Returns the name of the first parameter both ranges declare with
	/// different values.
	pub fn conflicting_parameter<'a>(&'a self, other: &MediaRange) -> Option<&'a str> {
		self.parameters
			.iter()
			.find(|(name, value)| {
				other
					.parameters
					.get(*name)
					.is_some_and(|other_value| other_value != *value)
			})
			.map(|(name, _)| name.as_str())
	}

	/// Produces the concrete representation for a negotiated pair where
	/// `self` is the server-supported side.
	///
	/// Wildcard tokens on the supported side are replaced by the accepted
	/// side's tokens, and accepted parameters the supported range lacks are
	/// filled in. The result carries quality 1.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_mime::MediaRange;
	///
	/// let supported = MediaRange::new("image", "*");
	/// let accepted = MediaRange::parse("image/gif;q=0.5").unwrap();
	/// assert_eq!(supported.resolve_against(&accepted).to_string(), "image/gif");
	///
	/// let supported = MediaRange::parse("application/json;charset=utf-8").unwrap();
	/// let accepted = MediaRange::parse("*/*").unwrap();
	/// assert_eq!(supported.resolve_against(&accepted).to_string(), "application/json;charset=utf-8");
	/// ```
	pub fn resolve_against(&self, accepted: &MediaRange) -> MediaRange {
		let main_type = if self.main_type == WILDCARD {
			accepted.main_type.clone()
		} else {
			self.main_type.clone()
		};
		let subtype = if self.subtype == WILDCARD {
			accepted.subtype.clone()
		} else {
			self.subtype.clone()
		};
		let mut parameters = self.parameters.clone();
		for (name, value) in &accepted.parameters {
			parameters
				.entry(name.clone())
				.or_insert_with(|| value.clone());
		}
		MediaRange {
			main_type,
			subtype,
			parameters,
			quality: Quality::MAX,
		}
	}
}

impl PartialEq for MediaRange {
	fn eq(&self, other: &Self) -> bool {
		self.main_type == other.main_type
			&& self.subtype == other.subtype
			&& self.parameters == other.parameters
	}
}

impl Eq for MediaRange {}

impl fmt::Display for MediaRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.main_type, self.subtype)?;
		for (name, value) in &self.parameters {
			if is_token(value) {
				write!(f, ";{}={}", name, value)?;
			} else {
				write!(f, ";{}=\"{}\"", name, value.replace('"', "\\\""))?;
			}
		}
		Ok(())
	}
}

impl FromStr for MediaRange {
	type Err = ODataError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

/// RFC 7230 `token`.
fn is_token(s: &str) -> bool {
	!s.is_empty()
		&& s.chars().all(|c| {
			c.is_ascii_alphanumeric()
				|| matches!(
					c,
					'!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|'
						| '~'
				)
		})
}

fn unquote(value: &str) -> &str {
	value
		.strip_prefix('"')
		.and_then(|v| v.strip_suffix('"'))
		.unwrap_or(value)
}

fn normalize_value(name: &str, value: &str) -> String {
	if name == CHARSET {
		value.to_ascii_lowercase()
	} else {
		value.to_string()
	}
}
