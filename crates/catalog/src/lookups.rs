//! Event lookup by id, with fuzzy "did you mean" suggestions for misses.

use strsim::levenshtein;

use crate::Event;

/// Maximum Levenshtein distance to consider an id as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Looks up an event by exact id in a slice of events.
///
/// Returns `None` when no event matches. This is the routing boundary used
/// for detail pages: a miss should become a not-found outcome, never a panic.
pub fn lookup_by_id<'a>(events: &'a [Event], id: &str) -> Option<&'a Event> {
    events.iter().find(|e| e.id == id)
}

/// Formats the "not found" error message, optionally including a suggestion.
pub(crate) fn format_not_found_error(id: &str, suggestion: Option<&str>) -> String {
    let base = format!("Event '{}' not found.", id);
    match suggestion {
        Some(s) => format!("{} Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Finds the closest id from a list of candidates using Levenshtein distance.
///
/// Returns the best match if its edit distance is within the threshold,
/// otherwise returns `None`.
pub(crate) fn find_similar_id<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|id| !id.is_empty())
        .map(|id| (id.to_string(), levenshtein(&query_lower, &id.to_lowercase())))
        .min_by_key(|(_, d)| *d)?;

    // A distance of 0 here means the ids only differ by case
    if best_distance <= MAX_SUGGESTION_DISTANCE && best_match != query {
        Some(best_match)
    } else {
        None
    }
}
