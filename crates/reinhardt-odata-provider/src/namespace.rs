//! Namespace prefix table
//!
//! Maps namespace URIs to the prefixes declared on the root of a metadata
//! document. Three protocol namespaces are bound up front and cannot be
//! rebound. Caller-predefined prefixes come next; for a URI registered more
//! than once the last registration wins. Any other URI met while building the
//! document gets its preferred prefix when that one is still free, otherwise
//! a synthetic `nsN` prefix.

use indexmap::IndexMap;
use reinhardt_odata_exception::{ODataError, Result};

/// Namespace of the `edmx:Edmx` envelope.
pub const EDMX_NAMESPACE: &str = "http://schemas.microsoft.com/ado/2007/06/edmx";
/// Namespace of the data service metadata attributes (`m:`).
pub const METADATA_NAMESPACE: &str =
	"http://schemas.microsoft.com/ado/2007/08/dataservices/metadata";
/// Namespace of the EDM schema elements, declared as the default namespace.
pub const EDM_SCHEMA_NAMESPACE: &str = "http://schemas.microsoft.com/ado/2008/09/edm";

pub const EDMX_PREFIX: &str = "edmx";
pub const METADATA_PREFIX: &str = "m";

const SYNTHETIC_PREFIX: &str = "ns";

#[derive(Debug, Clone)]
struct Entry {
	/// `None` binds the URI as the default namespace.
	prefix: Option<String>,
	/// Protocol namespaces are never rebound.
	is_fixed: bool,
}

/// Prefix assignments of one document, in declaration order.
///
/// # Examples
///
/// ```
/// use reinhardt_odata_provider::NamespacePrefixTable;
///
/// let mut table = NamespacePrefixTable::new();
/// table.register_predefined("annoPrefix", "http://annoNamespace").unwrap();
/// table.register_predefined("annoPrefix2", "http://annoNamespace").unwrap();
/// assert_eq!(table.prefix("http://annoNamespace"), Some(Some("annoPrefix2")));
///
/// let assigned = table.assign("http://other", None).unwrap();
/// assert_eq!(assigned.as_deref(), Some("ns0"));
/// ```
#[derive(Debug, Clone)]
pub struct NamespacePrefixTable {
	entries: IndexMap<String, Entry>,
	next_synthetic: usize,
}

impl Default for NamespacePrefixTable {
	fn default() -> Self {
		Self::new()
	}
}

impl NamespacePrefixTable {
	/// A table holding only the three protocol namespaces.
	pub fn new() -> Self {
		let mut entries = IndexMap::new();
		entries.insert(
			EDMX_NAMESPACE.to_string(),
			Entry {
				prefix: Some(EDMX_PREFIX.to_string()),
				is_fixed: true,
			},
		);
		entries.insert(
			METADATA_NAMESPACE.to_string(),
			Entry {
				prefix: Some(METADATA_PREFIX.to_string()),
				is_fixed: true,
			},
		);
		entries.insert(
			EDM_SCHEMA_NAMESPACE.to_string(),
			Entry {
				prefix: None,
				is_fixed: true,
			},
		);
		Self {
			entries,
			next_synthetic: 0,
		}
	}

	/// Registers a caller-chosen prefix for `uri`.
	///
	/// Entries for a protocol namespace are ignored. A later registration for
	/// the same URI replaces the earlier prefix.
	///
	/// # Errors
	///
	/// `InvalidArgument` when the prefix is empty, reserved by XML, equal to a
	/// fixed protocol prefix, or already bound to a different URI.
	pub fn register_predefined(&mut self, prefix: &str, uri: &str) -> Result<()> {
		if let Some(entry) = self.entries.get(uri)
			&& entry.is_fixed
		{
			tracing::trace!(uri, prefix, "ignoring predefined prefix for protocol namespace");
			return Ok(());
		}
		if !is_valid_prefix(prefix) {
			return Err(ODataError::InvalidArgument(format!(
				"'{}' is not a usable namespace prefix",
				prefix
			)));
		}
		if prefix == EDMX_PREFIX || prefix == METADATA_PREFIX {
			return Err(ODataError::InvalidArgument(format!(
				"prefix '{}' is reserved for a protocol namespace",
				prefix
			)));
		}
		if let Some(bound) = self.uri_of(prefix)
			&& bound != uri
		{
			return Err(ODataError::InvalidArgument(format!(
				"prefix '{}' is already bound to '{}'",
				prefix, bound
			)));
		}

		match self.entries.get_mut(uri) {
			Some(entry) => {
				if entry.prefix.as_deref() != Some(prefix) {
					tracing::debug!(
						uri,
						replaced = entry.prefix.as_deref().unwrap_or_default(),
						prefix,
						"predefined prefix replaces earlier registration"
					);
				}
				entry.prefix = Some(prefix.to_string());
			}
			None => {
				self.entries.insert(
					uri.to_string(),
					Entry {
						prefix: Some(prefix.to_string()),
						is_fixed: false,
					},
				);
			}
		}
		Ok(())
	}

	/// Returns the prefix for `uri`, binding one on first use.
	///
	/// `Ok(None)` means the URI is the default namespace. A new URI keeps
	/// `preferred` when it is a valid prefix nobody holds yet; otherwise it
	/// gets the next free `nsN`.
	pub fn assign(&mut self, uri: &str, preferred: Option<&str>) -> Result<Option<String>> {
		if uri.is_empty() {
			return Err(ODataError::InvalidArgument(
				"namespace URI must not be empty".to_string(),
			));
		}
		if let Some(entry) = self.entries.get(uri) {
			return Ok(entry.prefix.clone());
		}

		let prefix = match preferred {
			Some(preferred) if is_valid_prefix(preferred) && self.uri_of(preferred).is_none() => {
				preferred.to_string()
			}
			_ => self.next_synthetic_prefix(),
		};
		tracing::trace!(uri, prefix = %prefix, "assigned namespace prefix");
		self.entries.insert(
			uri.to_string(),
			Entry {
				prefix: Some(prefix.clone()),
				is_fixed: false,
			},
		);
		Ok(Some(prefix))
	}

	/// The prefix bound to `uri`: `Some(None)` for the default namespace,
	/// `None` when the URI is unknown.
	pub fn prefix(&self, uri: &str) -> Option<Option<&str>> {
		self.entries.get(uri).map(|entry| entry.prefix.as_deref())
	}

	/// The URI currently bound to `prefix`.
	pub fn uri_of(&self, prefix: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(_, entry)| entry.prefix.as_deref() == Some(prefix))
			.map(|(uri, _)| uri.as_str())
	}

	/// `(prefix, uri)` pairs in declaration order.
	pub fn declarations(&self) -> impl Iterator<Item = (Option<&str>, &str)> {
		self.entries
			.iter()
			.map(|(uri, entry)| (entry.prefix.as_deref(), uri.as_str()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn next_synthetic_prefix(&mut self) -> String {
		loop {
			let candidate = format!("{}{}", SYNTHETIC_PREFIX, self.next_synthetic);
			self.next_synthetic += 1;
			if self.uri_of(&candidate).is_none() {
				return candidate;
			}
		}
	}
}

/// NCName-ish check: letters, digits, `_`, `-`, `.`, not starting with a
/// digit and not in the reserved `xml` space.
fn is_valid_prefix(prefix: &str) -> bool {
	let mut chars = prefix.chars();
	let Some(first) = chars.next() else {
		return false;
	};
	if !(first.is_alphabetic() || first == '_') {
		return false;
	}
	if prefix.get(..3).is_some_and(|head| head.eq_ignore_ascii_case("xml")) {
		return false;
	}
	chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
