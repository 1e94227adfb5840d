//! Plain-text and JSON rendering of the current view.

use folio_core::{Record, SortSpec, Tags};
use folio_engine::{count_label, rarity_class, reward_label, CatalogSession, View};
use serde::Serialize;

const HEADERS: [&str; 8] = [
    "ID", "Card", "Character", "Vol", "Book", "Gender", "Rarity", "Reward",
];

/// Column gap in the table.
const GAP: &str = "  ";

fn join_tags(tags: Option<&Tags<String>>) -> String {
    tags.map(|tags| tags.iter().map(String::as_str).collect::<Vec<_>>().join(", "))
        .unwrap_or_default()
}

fn row_cells(record: &Record) -> [String; 8] {
    [
        record.id.clone(),
        record.card_name.clone(),
        record.character.clone(),
        record.volume.map(|v| v.to_string()).unwrap_or_default(),
        join_tags(record.book.as_ref()),
        join_tags(record.gender.as_ref()),
        record.rarity.clone().unwrap_or_default(),
        reward_label(record),
    ]
}

// =============================================================================
// Table
// =============================================================================

/// Render the view as an aligned table followed by the count line.
pub fn render_table(view: &View<'_>) -> String {
    let rows: Vec<[String; 8]> = view.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    if !rows.is_empty() {
        push_line(&mut out, HEADERS.iter().copied(), &widths);
        for row in &rows {
            push_line(&mut out, row.iter().map(String::as_str), &widths);
        }
        out.push('\n');
    }
    out.push_str(&count_label(view.len()));
    out.push('\n');
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 8]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join(GAP).trim_end());
    out.push('\n');
}

// =============================================================================
// Detail
// =============================================================================

/// Render the record under the cursor with its position and paging flags.
///
/// None when the detail display is closed.
pub fn render_detail(session: &CatalogSession) -> Option<String> {
    let record = session.current()?;
    let position = session.cursor().position()?;
    let affordances = session.affordances();

    let mut lines = vec![format!("{} ({})", record.card_name, record.id)];
    let mut field = |label: &str, value: String| {
        if !value.is_empty() {
            lines.push(format!("  {label:<10} {value}"));
        }
    };

    field("Character", record.character.clone());
    field(
        "Volume",
        record.volume.map(|v| v.to_string()).unwrap_or_default(),
    );
    field("Book", join_tags(record.book.as_ref()));
    field("Gender", join_tags(record.gender.as_ref()));
    field(
        "Rarity",
        record
            .rarity
            .as_deref()
            .map(|rarity| format!("{rarity} [{}]", rarity_class(record)))
            .unwrap_or_default(),
    );
    field("Reward", reward_label(record));
    field("Message", record.message.clone().unwrap_or_default());
    field("Image", record.image.clone().unwrap_or_default());

    let previous = if affordances.previous { "< prev" } else { "      " };
    let next = if affordances.next { "next >" } else { "" };
    lines.push(format!(
        "  {previous}  {} of {}  {next}",
        position + 1,
        session.len()
    ));

    let mut out = lines.join("\n").trim_end().to_string();
    out.push('\n');
    Some(out)
}

// =============================================================================
// JSON
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRow<'a> {
    #[serde(flatten)]
    record: &'a Record,
    reward_label: String,
    rarity_class: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonListing<'a> {
    count: usize,
    count_label: String,
    sort: SortSpec,
    cards: Vec<JsonRow<'a>>,
}

/// Render the view as JSON, with the display helpers precomputed per card.
pub fn render_json(session: &CatalogSession) -> Result<String, serde_json::Error> {
    let view = session.view();
    let listing = JsonListing {
        count: view.len(),
        count_label: session.count_label(),
        sort: session.sort_spec(),
        cards: view
            .iter()
            .map(|record| JsonRow {
                record,
                reward_label: reward_label(record),
                rarity_class: rarity_class(record),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{RecordStore, SortKey};
    use folio_engine::FilterCriteria;

    fn test_session() -> CatalogSession {
        let store = RecordStore::new(vec![
            Record::new("c-2", "Sunrise", "Sol")
                .with_volume(2)
                .with_book(vec!["Spring", "Summer"])
                .with_rarity("Super Rare")
                .with_reward("Cups", 8.0),
            Record::new("c-1", "Moonlit Duet", "Luna")
                .with_volume(1)
                .with_gender("Female"),
        ])
        .unwrap();
        CatalogSession::new(store, SortSpec::default())
    }

    #[test]
    fn test_table() {
        let session = test_session();
        let table = render_table(&session.view());
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("c-1"));
        assert!(lines[2].starts_with("c-2"));
        assert!(lines[2].contains("Spring, Summer"));
        assert!(lines[2].ends_with("8🏆"));
        assert_eq!(lines.last(), Some(&"2 cards shown"));
    }

    #[test]
    fn test_empty_table_is_count_only() {
        let mut session = test_session();
        session.set_criteria(FilterCriteria::new().with_search("nothing"));
        assert_eq!(render_table(&session.view()), "0 cards shown\n");
    }

    #[test]
    fn test_detail() {
        let mut session = test_session();
        assert!(render_detail(&session).is_none());

        session.open(&"c-1".into());
        let detail = render_detail(&session).unwrap();
        assert!(detail.starts_with("Moonlit Duet (c-1)"));
        assert!(detail.contains("Gender     Female"));
        assert!(detail.contains("1 of 2  next >"));
        assert!(!detail.contains("< prev"));

        session.next();
        let detail = render_detail(&session).unwrap();
        assert!(detail.contains("Rarity     Super Rare [super-rare]"));
        assert!(detail.contains("< prev  2 of 2"));
        assert!(!detail.contains("next >"));
    }

    #[test]
    fn test_detail_after_oversized_step() {
        let mut session = test_session();
        session.open(&"c-1".into());
        session.step_by(isize::MAX);
        let detail = render_detail(&session).unwrap();
        assert!(detail.starts_with("Sunrise (c-2)"));
        assert!(detail.contains("< prev  2 of 2"));
    }

    #[test]
    fn test_json() {
        let mut session = test_session();
        session.set_sort(SortSpec::descending(SortKey::Reward));

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&session).unwrap()).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["countLabel"], "2 cards shown");
        assert_eq!(json["sort"]["key"], "reward");
        assert_eq!(json["sort"]["direction"], "descending");
        assert_eq!(json["cards"][0]["id"], "c-2");
        assert_eq!(json["cards"][0]["cardName"], "Sunrise");
        assert_eq!(json["cards"][0]["rewardLabel"], "8🏆");
        assert_eq!(json["cards"][0]["rarityClass"], "super-rare");
        assert_eq!(json["cards"][1]["rewardLabel"], "");
    }
}
