//! Table formatting for short URL listings using comfy-table

use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, presets::NOTHING};

use crate::client::ShortUrlRow;

pub const HEADERS: [&str; 4] = ["Created", "Short URL", "Long URL", "Visits"];

/// Render rows as a borderless table, one line per short URL.
pub fn render_short_urls(rows: &[ShortUrlRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        HEADERS
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.created),
            Cell::new(&row.short_url)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&row.long_url)
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Cell::new(row.visits).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}
