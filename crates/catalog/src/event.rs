//! The event record as it appears in the static dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Separator between the start and end of an event's `time` string.
const TIME_RANGE_SEPARATOR: &str = " - ";

/// Number of tags shown on a summary card.
const CARD_TAG_LIMIT: usize = 3;

/// A single listed event.
///
/// `date`, `time` and `price` are presentation strings. Anything that needs
/// numeric or calendar semantics derives them on demand (see
/// [`crate::filter::extract_price`] and [`Event::display_date`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, used for lookup and as the detail page slug.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Calendar date as written in the dataset (usually `YYYY-MM-DD`).
    pub date: String,
    /// Start and end time, e.g. `"18:00 - 22:00"`.
    pub time: String,
    pub city: String,
    /// Venue or address within the city.
    pub location: String,
    pub category: String,
    /// Free-form price text, e.g. `"Free"` or `"₹1,250"`.
    pub price: String,
    /// URL or path of the display image.
    pub image: String,
    pub organizer: String,
    pub capacity: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Event {
    /// Splits `time` into its start and end parts.
    ///
    /// Strings without a `" - "` separator are returned whole as the start.
    pub fn time_range(&self) -> (&str, Option<&str>) {
        match self.time.split_once(TIME_RANGE_SEPARATOR) {
            Some((start, end)) => (start.trim(), Some(end.trim())),
            None => (self.time.trim(), None),
        }
    }

    /// Formats `date` as `MM-DD-YYYY` for summary cards.
    ///
    /// Dates that are not ISO formatted are shown as-is.
    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map(|d| d.format("%m-%d-%Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }

    /// Returns the tags shown on a summary card.
    pub fn card_tags(&self) -> &[String] {
        let end = self.tags.len().min(CARD_TAG_LIMIT);
        &self.tags[..end]
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::make_event;
    use super::*;

    #[test]
    fn test_time_range_split() {
        let event = make_event("1", "Pune", "Free");
        assert_eq!(event.time_range(), ("18:00", Some("22:00")));
    }

    #[test]
    fn test_time_range_without_separator() {
        let mut event = make_event("1", "Pune", "Free");
        event.time = "All day".to_string();
        assert_eq!(event.time_range(), ("All day", None));
    }

    #[test]
    fn test_display_date_iso() {
        let event = make_event("1", "Pune", "Free");
        assert_eq!(event.display_date(), "06-12-2025");
    }

    #[test]
    fn test_display_date_unparseable_passthrough() {
        let mut event = make_event("1", "Pune", "Free");
        event.date = "Every Sunday".to_string();
        assert_eq!(event.display_date(), "Every Sunday");
    }

    #[test]
    fn test_card_tags_limited_to_three() {
        let mut event = make_event("1", "Pune", "Free");
        event.tags = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert_eq!(event.card_tags(), &["a", "b", "c"]);

        event.tags = vec!["only".into()];
        assert_eq!(event.card_tags(), &["only"]);
    }

    #[test]
    fn test_deserialize_dataset_record() {
        let json = r#"{
            "id": "evt-1",
            "title": "Jazz Night",
            "description": "Live jazz",
            "date": "2025-07-01",
            "time": "19:00 - 23:00",
            "city": "Mumbai",
            "location": "Blue Frog",
            "category": "Music",
            "price": "₹1,250",
            "image": "https://example.com/jazz.jpg",
            "organizer": "Blue Frog",
            "capacity": 250,
            "tags": ["jazz", "live music"]
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "evt-1");
        assert_eq!(event.capacity, 250);
        assert_eq!(event.tags, vec!["jazz", "live music"]);
    }

    #[test]
    fn test_deserialize_missing_tags_defaults_empty() {
        let json = r#"{
            "id": "evt-2", "title": "t", "description": "d", "date": "2025-07-01",
            "time": "10:00 - 11:00", "city": "Pune", "location": "l", "category": "c",
            "price": "Free", "image": "i", "organizer": "o", "capacity": 0
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.tags.is_empty());
    }
}
