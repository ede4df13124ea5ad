use anyhow::Result;
use scraper::{Html, Selector};

use crate::fetch::resolve_href;
use crate::models::MunicipalityRef;
use crate::parser::cell_text;

// The report template puts two header rows above the municipality listing.
// There is no semantic header to query, so the position is assumed.
const HEADER_ROWS: usize = 2;
const NAME_CELL: usize = 1;

/// Parse a district report page into its municipality roster, in page order.
/// Rows without a link in the first cell (subtotals and the like) are
/// skipped; the link text is the municipality code.
pub fn parse_municipalities(html: &str, base_url: &str) -> Result<Vec<MunicipalityRef>> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let mut municipalities = Vec::new();

    for row in document.select(&row_selector).skip(HEADER_ROWS) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < 2 {
            continue;
        }

        let link = match cells[0].select(&link_selector).next() {
            Some(link) => link,
            None => continue,
        };
        let href = match link.value().attr("href") {
            Some(href) => href,
            None => continue,
        };

        municipalities.push(MunicipalityRef {
            code: cell_text(link),
            name: cell_text(cells[NAME_CELL]),
            detail_url: resolve_href(base_url, href)?,
        });
    }

    Ok(municipalities)
}
