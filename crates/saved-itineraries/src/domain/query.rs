//! Pure filters over a listed collection.
//!
//! Both filters keep the input order, so a collection sorted most recent
//! first stays sorted. Matching is a case-insensitive substring test.

use super::SavedItinerary;

fn contains_ignoring_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Keep itineraries whose destination contains `query`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use saved_itineraries::domain::{SavedItinerary, SavedItineraryDraft, filter_by_destination};
///
/// let paris = SavedItinerary::from_draft(
///     SavedItineraryDraft::new("saved-1", "trip-1", "Paris"),
///     Utc::now(),
/// )
/// .expect("valid draft");
///
/// assert_eq!(filter_by_destination(vec![paris], "par").len(), 1);
/// ```
#[must_use]
pub fn filter_by_destination(itineraries: Vec<SavedItinerary>, query: &str) -> Vec<SavedItinerary> {
    let needle = query.to_lowercase();
    itineraries
        .into_iter()
        .filter(|itinerary| contains_ignoring_case(itinerary.destination(), &needle))
        .collect()
}

/// Keep itineraries with at least one tag containing `query`.
#[must_use]
pub fn filter_by_tag(itineraries: Vec<SavedItinerary>, query: &str) -> Vec<SavedItinerary> {
    let needle = query.to_lowercase();
    itineraries
        .into_iter()
        .filter(|itinerary| {
            itinerary
                .tags()
                .iter()
                .any(|tag| contains_ignoring_case(tag, &needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::SavedItineraryDraft;

    fn saved(trip_id: &str, destination: &str, tags: &[&str]) -> SavedItinerary {
        let mut draft = SavedItineraryDraft::new(format!("saved-{trip_id}"), trip_id, destination);
        draft.tags = tags.iter().map(|tag| (*tag).to_owned()).collect();
        let saved_at = Utc
            .with_ymd_and_hms(2026, 5, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        SavedItinerary::from_draft(draft, saved_at).expect("valid draft")
    }

    #[fixture]
    fn collection() -> Vec<SavedItinerary> {
        vec![
            saved("t1", "Paris", &["Culture", "Gastronomie"]),
            saved("t2", "Marseille", &["Plage"]),
            saved("t3", "Parc national des Écrins", &["Randonnée", "Nature"]),
        ]
    }

    fn trip_ids(itineraries: &[SavedItinerary]) -> Vec<&str> {
        itineraries.iter().map(SavedItinerary::trip_id).collect()
    }

    #[rstest]
    #[case::lowercase("par", &["t1", "t3"])]
    #[case::uppercase("PARIS", &["t1"])]
    #[case::accented("écrins", &["t3"])]
    #[case::no_match("lyon", &[])]
    #[case::empty_query("", &["t1", "t2", "t3"])]
    fn destination_filter_matches_substrings(
        collection: Vec<SavedItinerary>,
        #[case] query: &str,
        #[case] expected: &[&str],
    ) {
        let matched = filter_by_destination(collection, query);
        assert_eq!(trip_ids(&matched), expected);
    }

    #[rstest]
    #[case::prefix("cult", &["t1"])]
    #[case::any_tag("NAT", &["t3"])]
    #[case::shared_letters("a", &["t1", "t2", "t3"])]
    #[case::no_match("ski", &[])]
    fn tag_filter_matches_any_tag(
        collection: Vec<SavedItinerary>,
        #[case] query: &str,
        #[case] expected: &[&str],
    ) {
        let matched = filter_by_tag(collection, query);
        assert_eq!(trip_ids(&matched), expected);
    }

    #[rstest]
    fn tag_filter_skips_untagged_itineraries() {
        let matched = filter_by_tag(vec![saved("t9", "Nice", &[])], "");
        assert!(matched.is_empty());
    }
}
