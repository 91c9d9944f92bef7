//! Media range property-based tests
//!
//! Laws of qvalue formatting, media range parsing and Accept ranking.

use proptest::prelude::*;
use reinhardt_odata_mime::{MediaRange, Quality, rank};

fn token() -> impl Strategy<Value = String> {
	"[a-z0-9][a-z0-9.+-]{0,11}"
}

fn accept_entry() -> impl Strategy<Value = MediaRange> {
	(
		prop_oneof![
			Just(("*".to_string(), "*".to_string())),
			token().prop_map(|main| (main, "*".to_string())),
			(token(), token()),
		],
		0u16..=1000,
	)
		.prop_map(|((main, sub), millis)| {
			let quality = Quality::from_millis(millis).unwrap_or(Quality::MAX);
			MediaRange::new(main, sub).with_quality(quality)
		})
}

// ============================================================================
// Property-Based Tests: quality values
// ============================================================================

proptest! {
	/// Test: a formatted qvalue parses back to the same thousandths
	///
	/// Category: Property
	#[test]
	fn prop_quality_display_parse(millis in 0u16..=1000) {
		let quality = Quality::from_millis(millis).unwrap();
		let parsed = Quality::parse(&quality.to_string()).unwrap();
		prop_assert_eq!(parsed.millis(), millis);
	}

	/// Test: thousandths above one are rejected
	///
	/// Category: Property
	#[test]
	fn prop_quality_above_one_rejected(millis in 1001u16..) {
		prop_assert!(Quality::from_millis(millis).is_none());
	}
}

// ============================================================================
// Property-Based Tests: media ranges
// ============================================================================

proptest! {
	/// Test: parsing is case-insensitive and stable under Display
	///
	/// Category: Property
	#[test]
	fn prop_media_range_display_reparses(main in token(), sub in token()) {
		let range = MediaRange::parse(&format!("{}/{}", main.to_uppercase(), sub)).unwrap();
		prop_assert_eq!(range.main_type(), main.as_str());
		prop_assert_eq!(range.subtype(), sub.as_str());

		let reparsed = MediaRange::parse(&range.to_string()).unwrap();
		prop_assert_eq!(reparsed, range);
	}
}

// ============================================================================
// Property-Based Tests: ranking
// ============================================================================

proptest! {
	/// Test: ranking drops q=0 and never raises quality further down
	///
	/// Category: Property
	#[test]
	fn prop_rank_orders_by_quality(entries in prop::collection::vec(accept_entry(), 0..12)) {
		let ranked = rank(&entries);
		let accepted = entries.iter().filter(|e| !e.quality().is_zero()).count();
		prop_assert_eq!(ranked.len(), accepted);
		prop_assert!(ranked.iter().all(|r| !r.quality().is_zero()));
		for pair in ranked.windows(2) {
			prop_assert!(pair[0].quality() >= pair[1].quality());
			if pair[0].quality() == pair[1].quality() {
				prop_assert!(pair[0].specificity() >= pair[1].specificity());
			}
		}
	}
}
