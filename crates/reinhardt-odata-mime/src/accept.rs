//! Accept header parsing

use reinhardt_odata_exception::Result;

use crate::media_range::MediaRange;

/// The client's acceptable representations in declaration order.
///
/// An empty header means "accept anything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptHeader {
	pub media_ranges: Vec<MediaRange>,
}

impl AcceptHeader {
	/// Parses a raw Accept header value.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_mime::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("application/json, text/html; q=0.9").unwrap();
	/// assert_eq!(accept.media_ranges.len(), 2);
	/// assert_eq!(accept.media_ranges[1].quality().millis(), 900);
	///
	/// assert!(AcceptHeader::parse("").unwrap().is_empty());
	/// assert!(AcceptHeader::parse("*/xml").is_err());
	/// ```
	pub fn parse(header: &str) -> Result<Self> {
		Self::from_tokens(header.split(','))
	}

	/// Builds the list from already split tokens; blank tokens are skipped.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_mime::AcceptHeader;
	///
	/// let accept = AcceptHeader::from_tokens(["sup/*", " */*"]).unwrap();
	/// assert_eq!(accept.media_ranges.len(), 2);
	/// ```
	pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let media_ranges = tokens
			.into_iter()
			.filter(|token| !token.as_ref().trim().is_empty())
			.map(|token| MediaRange::parse(token.as_ref().trim()))
			.collect::<Result<Vec<_>>>()?;
		Ok(Self { media_ranges })
	}

	/// Creates an empty AcceptHeader with no media ranges
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.media_ranges.is_empty()
	}

	/// Returns the acceptable ranges in the order negotiation must try them:
	/// quality descending, then more specific ranges first, then declaration
	/// order. Ranges with `q=0` are excluded.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_odata_mime::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("*/*, text/*;q=0.9, text/plain, image/gif;q=0").unwrap();
	/// let ranked: Vec<String> = accept.ranked().iter().map(|r| r.to_string()).collect();
	/// assert_eq!(ranked, vec!["text/plain", "*/*", "text/*"]);
	/// ```
	pub fn ranked(&self) -> Vec<&MediaRange> {
		rank(&self.media_ranges)
	}
}

/// Orders media ranges for negotiation; see [`AcceptHeader::ranked`].
pub fn rank(ranges: &[MediaRange]) -> Vec<&MediaRange> {
	let mut ranked: Vec<&MediaRange> = ranges
		.iter()
		.filter(|range| !range.quality().is_zero())
		.collect();
	// sort_by is stable, so declaration order survives among equals
	ranked.sort_by(|a, b| {
		b.quality()
			.cmp(&a.quality())
			.then_with(|| b.specificity().cmp(&a.specificity()))
	});
	ranked
}

impl From<Vec<MediaRange>> for AcceptHeader {
	fn from(media_ranges: Vec<MediaRange>) -> Self {
		Self { media_ranges }
	}
}
