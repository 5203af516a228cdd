//! Page renderers for the homepage, detail pages and the 404 page.

use crate::filter::{extract_price, FilterCriteria, FilterEvaluator, PriceRange};
use crate::view::{ListingView, NO_RESULTS_MESSAGE};
use crate::Event;

use super::html::{document, escape_html};
use super::SiteOptions;

/// Client-side filtering for the homepage.
///
/// Mirrors `FilterEvaluator` over the `data-*` attributes of each card:
/// exact city, date and category, the precomputed price bucket, and a
/// lowercase substring search. Recomputes the result count on every change.
const FILTER_SCRIPT: &str = r#"<script>
(function () {
  var search = document.getElementById("searchInput");
  var fields = [
    ["city", document.getElementById("locationFilter")],
    ["date", document.getElementById("dateFilter")],
    ["category", document.getElementById("categoryFilter")],
    ["price", document.getElementById("priceFilter")]
  ];
  var cards = Array.prototype.slice.call(document.querySelectorAll(".event-card"));
  var info = document.getElementById("resultsInfo");
  var empty = document.getElementById("noResults");

  function apply() {
    var term = search.value.toLowerCase();
    var shown = 0;
    cards.forEach(function (card) {
      var match = fields.every(function (field) {
        return !field[1].value || card.dataset[field[0]] === field[1].value;
      }) && (!term || card.dataset.search.indexOf(term) !== -1);
      card.hidden = !match;
      if (match) shown++;
    });
    info.textContent = "Showing " + shown + " of " + cards.length + " events";
    empty.hidden = shown !== 0;
  }

  function clear() {
    search.value = "";
    fields.forEach(function (field) { field[1].value = ""; });
    apply();
  }

  search.addEventListener("input", apply);
  fields.forEach(function (field) { field[1].addEventListener("change", apply); });
  Array.prototype.forEach.call(document.querySelectorAll(".clear-filters"), function (button) {
    button.addEventListener("click", clear);
  });
})();
</script>
"#;

const CLEAR_BUTTON: &str = "<button type=\"button\" class=\"clear-filters\">Clear Filters</button>\n";

/// Renders one `<select>` with an "All ..." entry followed by `values`.
fn render_select(
    id: &str,
    label: &str,
    all_label: &str,
    values: &[(String, String)],
    selected: Option<&str>,
) -> String {
    let mut output = String::new();
    output.push_str("<div class=\"filter-group\">\n");
    output.push_str(&format!("<label for=\"{id}\">{label}</label>\n"));
    output.push_str(&format!("<select id=\"{id}\" name=\"{id}\">\n"));
    output.push_str(&format!("<option value=\"\">{all_label}</option>\n"));
    for (value, text) in values {
        let marker = if selected == Some(value.as_str()) {
            " selected"
        } else {
            ""
        };
        output.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            escape_html(value),
            marker,
            escape_html(text)
        ));
    }
    output.push_str("</select>\n</div>\n");
    output
}

/// Pairs each option value with itself as display text.
fn plain_options(values: &[String]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.clone(), v.clone())).collect()
}

/// Renders the search box and filter selects, pre-filled from `criteria`.
fn render_filters(view: &ListingView<'_>, criteria: &FilterCriteria) -> String {
    let options = view.options();
    let price_options: Vec<(String, String)> = PriceRange::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect();

    let mut output = String::new();
    output.push_str("<section class=\"filters-section\">\n");
    output.push_str("<h2 class=\"sr-only\">Event Filters</h2>\n");
    output.push_str(&format!(
        "<input id=\"searchInput\" type=\"text\" placeholder=\"Search events by title, description or tags...\" value=\"{}\">\n",
        escape_html(criteria.search_term.as_deref().unwrap_or_default())
    ));
    output.push_str(&render_select(
        "locationFilter",
        "Location",
        "All Locations",
        &plain_options(&options.cities),
        criteria.location.as_deref(),
    ));
    output.push_str(&render_select(
        "dateFilter",
        "Date",
        "All Dates",
        &plain_options(&options.dates),
        criteria.date.as_deref(),
    ));
    output.push_str(&render_select(
        "categoryFilter",
        "Category",
        "All Categories",
        &plain_options(&options.categories),
        criteria.category.as_deref(),
    ));
    output.push_str(&render_select(
        "priceFilter",
        "Price",
        "All Prices",
        &price_options,
        criteria.price_range.map(|r| r.as_str()),
    ));
    output.push_str(CLEAR_BUTTON);
    output.push_str("</section>\n");
    output
}

/// Returns the price bucket value an event falls in.
fn price_bucket(event: &Event) -> &'static str {
    let price = extract_price(&event.price);
    PriceRange::ALL
        .iter()
        .find(|range| range.contains(price))
        .map_or("", |range| range.as_str())
}

/// Lowercased text the search box matches against.
///
/// Fields are joined with newlines, which the search input cannot contain,
/// so a term never matches across two fields.
fn search_text(event: &Event) -> String {
    let mut parts = vec![event.title.to_lowercase(), event.description.to_lowercase()];
    parts.extend(event.tags.iter().map(|tag| tag.to_lowercase()));
    parts.join("\n")
}

/// Renders one summary card linking to the detail page.
///
/// Cards outside the current criteria are still emitted, with `hidden` set,
/// so the filter script can reveal them.
fn render_card(event: &Event, options: &SiteOptions, visible: bool) -> String {
    let (start, end) = event.time_range();
    let time = match end {
        Some(end) => format!("{start} - {end}"),
        None => start.to_string(),
    };

    let mut output = String::new();
    output.push_str(&format!(
        "<a class=\"event-card\"{} href=\"{}\" data-city=\"{}\" data-date=\"{}\" data-category=\"{}\" data-price=\"{}\" data-search=\"{}\">\n<article>\n",
        if visible { "" } else { " hidden" },
        escape_html(&options.event_href(&event.id)),
        escape_html(&event.city),
        escape_html(&event.date),
        escape_html(&event.category),
        price_bucket(event),
        escape_html(&search_text(event))
    ));
    output.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" width=\"400\" height=\"240\" loading=\"lazy\">\n",
        escape_html(&event.image),
        escape_html(&event.title)
    ));
    output.push_str(&format!(
        "<span class=\"category\">{}</span>\n",
        escape_html(&event.category)
    ));
    output.push_str(&format!("<h3>{}</h3>\n", escape_html(&event.title)));
    output.push_str("<ul class=\"event-details\">\n");
    output.push_str(&format!(
        "<li class=\"date\">{}</li>\n",
        escape_html(&event.display_date())
    ));
    output.push_str(&format!("<li class=\"time\">{}</li>\n", escape_html(&time)));
    output.push_str(&format!("<li class=\"city\">{}</li>\n", escape_html(&event.city)));
    output.push_str(&format!("<li class=\"price\">{}</li>\n", escape_html(&event.price)));
    output.push_str(&format!(
        "<li class=\"capacity\">{} people</li>\n",
        event.capacity
    ));
    output.push_str("</ul>\n");

    let tags = event.card_tags();
    if !tags.is_empty() {
        output.push_str("<div class=\"tags\">\n");
        for tag in tags {
            output.push_str(&format!("<span class=\"tag\">{}</span>\n", escape_html(tag)));
        }
        output.push_str("</div>\n");
    }

    output.push_str("</article>\n</a>\n");
    output
}

/// Renders the homepage for the view's current criteria.
///
/// Shows the filter controls, the result count, a card for every event (those
/// outside the criteria hidden) and the no-results block. The embedded script
/// re-filters the cards in the browser as the controls change.
pub fn render_index(view: &ListingView<'_>, options: &SiteOptions) -> String {
    let evaluator = FilterEvaluator::new(view.criteria());
    let events = view.catalog().events();
    let shown = events.iter().filter(|e| evaluator.matches(e)).count();

    let mut body = String::new();
    body.push_str("<div class=\"home-page-container\">\n");
    body.push_str(&format!("<header><h1>{}</h1></header>\n", escape_html(&options.title)));
    body.push_str(&render_filters(view, view.criteria()));
    body.push_str(&format!(
        "<p class=\"results-info\" id=\"resultsInfo\">{}</p>\n",
        escape_html(&view.summary())
    ));

    body.push_str("<div class=\"events-grid\">\n");
    for event in events {
        body.push_str(&render_card(event, options, evaluator.matches(event)));
    }
    body.push_str("</div>\n");

    body.push_str(&format!(
        "<div class=\"no-results\" id=\"noResults\"{}>\n<p>{}</p>\n{}</div>\n",
        if shown == 0 { "" } else { " hidden" },
        NO_RESULTS_MESSAGE,
        CLEAR_BUTTON
    ));
    body.push_str("</div>\n");
    body.push_str(FILTER_SCRIPT);

    document(&options.title, options.description.as_deref(), &body)
}

/// Renders the detail page for one event.
///
/// The page title is the event title and the meta description is the event
/// description.
pub fn render_event_page(event: &Event, options: &SiteOptions) -> String {
    let (start, end) = event.time_range();

    let mut body = String::new();
    body.push_str("<main class=\"event-detail\">\n");
    body.push_str(&format!(
        "<p><a href=\"{}\">&larr; All events</a></p>\n",
        escape_html(&options.index_href_from_event())
    ));
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&event.title)));
    body.push_str(&format!(
        "<img src=\"{}\" alt=\"eventImage\" width=\"400\" height=\"400\">\n",
        escape_html(&event.image)
    ));
    body.push_str(&format!(
        "<p class=\"when-where\">{} - {}</p>\n",
        escape_html(&event.date),
        escape_html(&event.location)
    ));
    body.push_str("<dl>\n");
    body.push_str(&format!("<dt>City</dt><dd>{}</dd>\n", escape_html(&event.city)));
    body.push_str(&format!("<dt>Starts</dt><dd>{}</dd>\n", escape_html(start)));
    if let Some(end) = end {
        body.push_str(&format!("<dt>Ends</dt><dd>{}</dd>\n", escape_html(end)));
    }
    body.push_str(&format!(
        "<dt>Category</dt><dd>{}</dd>\n",
        escape_html(&event.category)
    ));
    body.push_str(&format!("<dt>Price</dt><dd>{}</dd>\n", escape_html(&event.price)));
    body.push_str(&format!(
        "<dt>Organizer</dt><dd>{}</dd>\n",
        escape_html(&event.organizer)
    ));
    body.push_str(&format!("<dt>Capacity</dt><dd>{} people</dd>\n", event.capacity));
    body.push_str("</dl>\n");
    body.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        escape_html(&event.description)
    ));

    if !event.tags.is_empty() {
        body.push_str("<ul class=\"tags\">\n");
        for tag in &event.tags {
            body.push_str(&format!("<li class=\"tag\">{}</li>\n", escape_html(tag)));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</main>\n");

    document(&event.title, Some(&event.description), &body)
}

/// Renders the page served for unknown event ids.
pub fn render_not_found(options: &SiteOptions) -> String {
    let mut body = String::new();
    body.push_str("<main class=\"not-found\">\n");
    body.push_str("<h1>404 - Event not found</h1>\n");
    body.push_str(&format!(
        "<p><a href=\"{}\">Back to all events</a></p>\n",
        escape_html(&options.index_href())
    ));
    body.push_str("</main>\n");

    document(&format!("Not found | {}", options.title), None, &body)
}
