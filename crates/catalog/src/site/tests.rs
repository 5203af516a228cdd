//! Tests for page rendering and site builds.

use super::*;
use crate::event::test_support::make_event;
use crate::filter::PriceRange;
use crate::view::NO_RESULTS_MESSAGE;
use crate::Event;

fn catalog() -> Catalog {
    let mut jazz = make_event("jazz-night", "Mumbai", "₹1,250");
    jazz.title = "Jazz & Blues <Live>".to_string();
    jazz.description = "An evening of \"smooth\" jazz".to_string();
    jazz.tags = vec![
        "jazz".to_string(),
        "live".to_string(),
        "music".to_string(),
        "evening".to_string(),
    ];

    let code = make_event("code-camp", "Pune", "Free");

    Catalog::from_events(vec![jazz, code]).unwrap()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

const SHOWN_CARD: &str = "class=\"event-card\" href";
const HIDDEN_CARD: &str = "class=\"event-card\" hidden";

// ==================== Links ====================

#[test]
fn test_relative_links_by_default() {
    let options = SiteOptions::default();
    assert_eq!(options.event_href("a"), "events/a.html");
    assert_eq!(options.index_href(), "index.html");
    assert_eq!(options.index_href_from_event(), "../index.html");
}

#[test]
fn test_base_path_links() {
    let options = SiteOptions {
        base_path: "/site".to_string(),
        ..SiteOptions::default()
    };
    assert_eq!(options.event_href("a"), "/site/events/a.html");
    assert_eq!(options.index_href(), "/site/index.html");
    assert_eq!(options.index_href_from_event(), "/site/index.html");
}

#[test]
fn test_event_href_percent_encodes_id() {
    let options = SiteOptions::default();
    assert_eq!(options.event_href("rock#2"), "events/rock%232.html");
    assert_eq!(options.event_href("a b?x"), "events/a%20b%3Fx.html");
    assert_eq!(options.event_href("50%off"), "events/50%25off.html");
    assert_eq!(options.event_href("café"), "events/caf%C3%A9.html");
    assert_eq!(options.event_href("jazz-night_2.0~"), "events/jazz-night_2.0~.html");
}

// ==================== Homepage ====================

#[test]
fn test_index_lists_every_event_with_summary() {
    let catalog = catalog();
    let view = ListingView::new(&catalog);
    let html = render_index(&view, &SiteOptions::default());

    assert!(html.contains("<title>Events</title>"));
    assert!(html.contains("Showing 2 of 2 events"));
    assert_eq!(count(&html, SHOWN_CARD), 2);
    assert_eq!(count(&html, HIDDEN_CARD), 0);
    assert!(html.contains("href=\"events/jazz-night.html\""));
    assert!(html.contains("href=\"events/code-camp.html\""));
    assert!(html.contains("<div class=\"no-results\" id=\"noResults\" hidden>"));
}

#[test]
fn test_index_cards_carry_filter_fields() {
    let catalog = catalog();
    let html = render_index(&ListingView::new(&catalog), &SiteOptions::default());

    assert!(html.contains(
        "data-city=\"Mumbai\" data-date=\"2025-06-12\" data-category=\"Music\" data-price=\"500-2000\""
    ));
    assert!(html.contains("data-price=\"free\""));
    // Search text is lowercased and escaped, one field per line
    assert!(html.contains("data-search=\"jazz &amp; blues &lt;live&gt;\nan evening of &quot;smooth&quot; jazz\njazz\nlive\nmusic\nevening\""));
}

#[test]
fn test_index_has_live_filter_script_and_clear_buttons() {
    let catalog = catalog();
    let html = render_index(&ListingView::new(&catalog), &SiteOptions::default());

    assert_eq!(count(&html, "<script>"), 1);
    for id in [
        "searchInput",
        "locationFilter",
        "dateFilter",
        "categoryFilter",
        "priceFilter",
        "resultsInfo",
        "noResults",
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing element {id}");
        assert!(html.contains(&format!("getElementById(\"{id}\")")), "script ignores {id}");
    }
    // One in the control bar, one in the no-results block
    assert_eq!(count(&html, "class=\"clear-filters\">Clear Filters</button>"), 2);
    assert!(html.contains("\"Showing \" + shown + \" of \" + cards.length + \" events\""));
}

#[test]
fn test_index_single_page_heading() {
    let catalog = catalog();
    let html = render_index(&ListingView::new(&catalog), &SiteOptions::default());

    assert_eq!(count(&html, "<h1"), 1);
    assert!(html.contains("<h2 class=\"sr-only\">Event Filters</h2>"));
}

#[test]
fn test_index_links_encoded_ids() {
    let mut rock = make_event("rock", "Pune", "Free");
    rock.id = "rock#2".to_string();
    let catalog = Catalog::from_events(vec![rock]).unwrap();
    let html = render_index(&ListingView::new(&catalog), &SiteOptions::default());

    assert!(html.contains("href=\"events/rock%232.html\""));
    assert!(!html.contains("href=\"events/rock#2.html\""));
}

#[test]
fn test_index_escapes_event_text() {
    let catalog = catalog();
    let html = render_index(&ListingView::new(&catalog), &SiteOptions::default());

    assert!(html.contains("Jazz &amp; Blues &lt;Live&gt;"));
    assert!(!html.contains("<Live>"));
}

#[test]
fn test_index_card_shows_three_tags_and_display_date() {
    let catalog = catalog();
    let html = render_index(&ListingView::new(&catalog), &SiteOptions::default());

    assert!(html.contains("<span class=\"tag\">music</span>"));
    assert!(!html.contains("<span class=\"tag\">evening</span>"));
    assert!(html.contains("<li class=\"date\">06-12-2025</li>"));
    assert!(html.contains("<li class=\"time\">18:00 - 22:00</li>"));
    assert!(html.contains("<li class=\"capacity\">100 people</li>"));
}

#[test]
fn test_index_filter_controls_from_options() {
    let catalog = catalog();
    let criteria = FilterCriteria::default()
        .with_location("Pune")
        .with_price(Some(PriceRange::Free));
    let view = ListingView::with_criteria(&catalog, criteria);
    let html = render_index(&view, &SiteOptions::default());

    assert!(html.contains("<option value=\"\">All Locations</option>"));
    assert!(html.contains("<option value=\"Mumbai\">Mumbai</option>"));
    assert!(html.contains("<option value=\"Pune\" selected>Pune</option>"));
    assert!(html.contains("<option value=\"free\" selected>Free</option>"));
    assert!(html.contains("<option value=\"2000+\">₹2000+</option>"));
    assert!(html.contains("Showing 1 of 2 events"));
    assert_eq!(count(&html, SHOWN_CARD), 1);
    assert_eq!(count(&html, HIDDEN_CARD), 1);
    assert!(html.contains("class=\"event-card\" hidden href=\"events/jazz-night.html\""));
}

#[test]
fn test_index_no_results_block() {
    let catalog = catalog();
    let view = ListingView::with_criteria(
        &catalog,
        FilterCriteria::default().with_search("no such thing"),
    );
    let html = render_index(&view, &SiteOptions::default());

    assert!(html.contains(&format!(
        "<div class=\"no-results\" id=\"noResults\">\n<p>{NO_RESULTS_MESSAGE}</p>"
    )));
    assert!(html.contains("Showing 0 of 2 events"));
    assert!(html.contains("value=\"no such thing\""));
    assert_eq!(count(&html, SHOWN_CARD), 0);
    assert_eq!(count(&html, HIDDEN_CARD), 2);
}

// ==================== Detail Pages ====================

#[test]
fn test_event_page_metadata() {
    let catalog = catalog();
    let event = catalog.lookup_by_id("jazz-night").unwrap();
    let html = render_event_page(event, &SiteOptions::default());

    assert!(html.contains("<title>Jazz &amp; Blues &lt;Live&gt;</title>"));
    assert!(html.contains(
        "<meta name=\"description\" content=\"An evening of &quot;smooth&quot; jazz\">"
    ));
    assert!(html.contains("2025-06-12 - Mumbai Hall"));
    assert!(html.contains("<dt>Ends</dt><dd>22:00</dd>"));
    assert!(html.contains("href=\"../index.html\""));
    // Detail pages list every tag, not just the first three
    assert!(html.contains("<li class=\"tag\">evening</li>"));
}

#[test]
fn test_render_event_page_by_id() {
    let catalog = catalog();
    let options = SiteOptions::default();

    match render_event_page_by_id(&catalog, "code-camp", &options) {
        PageOutcome::Found(html) => assert!(html.contains("<title>Event code-camp</title>")),
        PageOutcome::NotFound => panic!("expected page"),
    }
    assert_eq!(
        render_event_page_by_id(&catalog, "missing", &options),
        PageOutcome::NotFound
    );
}

#[test]
fn test_not_found_page() {
    let html = render_not_found(&SiteOptions::default());
    assert!(html.contains("404 - Event not found"));
    assert!(html.contains("href=\"index.html\""));
}

// ==================== Build ====================

#[test]
fn test_is_safe_page_name() {
    assert!(is_safe_page_name("jazz-night"));
    assert!(is_safe_page_name("42"));
    assert!(!is_safe_page_name(""));
    assert!(!is_safe_page_name(".."));
    assert!(!is_safe_page_name("a/b"));
    assert!(!is_safe_page_name("a\\b"));
    assert!(is_safe_page_name("rock#2"));
    assert!(is_safe_page_name("a b?x"));
}

#[tokio::test]
async fn test_build_writes_all_pages() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();

    let report = SiteBuilder::new(&catalog, SiteOptions::default())
        .build(dir.path())
        .await
        .unwrap();

    assert_eq!(report.pages_written(), 4);
    assert_eq!(report.listed, 2);
    assert!(dir.path().join("index.html").exists());
    assert!(dir.path().join("404.html").exists());
    assert!(dir.path().join("events/jazz-night.html").exists());
    assert!(dir.path().join("events/code-camp.html").exists());

    let detail = std::fs::read_to_string(dir.path().join("events/code-camp.html")).unwrap();
    assert!(detail.contains("<title>Event code-camp</title>"));
}

#[tokio::test]
async fn test_build_with_criteria_filters_homepage_only() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();

    let report = SiteBuilder::new(&catalog, SiteOptions::default())
        .with_criteria(FilterCriteria::default().with_location("Pune"))
        .build(dir.path())
        .await
        .unwrap();

    assert_eq!(report.listed, 1);
    assert_eq!(report.pages_written(), 4);

    let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(index.contains("Showing 1 of 2 events"));
    assert!(index.contains("class=\"event-card\" hidden href=\"events/jazz-night.html\""));
    assert!(index.contains("class=\"event-card\" href=\"events/code-camp.html\""));
}

#[tokio::test]
async fn test_build_page_file_matches_encoded_link() {
    let dir = tempfile::tempdir().unwrap();
    let mut rock = make_event("rock", "Pune", "Free");
    rock.id = "rock#2".to_string();
    let mut spaced = make_event("spaced", "Pune", "Free");
    spaced.id = "a b?x".to_string();
    let catalog = Catalog::from_events(vec![rock, spaced]).unwrap();

    SiteBuilder::new(&catalog, SiteOptions::default())
        .build(dir.path())
        .await
        .unwrap();

    // Files keep the raw id; links carry the encoded form a server decodes
    assert!(dir.path().join("events/rock#2.html").exists());
    assert!(dir.path().join("events/a b?x.html").exists());
    let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(index.contains("href=\"events/rock%232.html\""));
    assert!(index.contains("href=\"events/a%20b%3Fx.html\""));
}

#[tokio::test]
async fn test_build_rejects_unsafe_id_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut bad: Event = make_event("ok", "Pune", "Free");
    bad.id = "../escape".to_string();
    let catalog = Catalog::from_events(vec![bad]).unwrap();

    let err = SiteBuilder::new(&catalog, SiteOptions::default())
        .build(&dir.path().join("out"))
        .await
        .unwrap_err();

    assert!(matches!(err, SiteError::UnsafeId { ref id } if id == "../escape"));
    assert!(!dir.path().join("out").exists());
}
