use std::collections::HashMap;

use anyhow::Result;
use scraper::{Html, Selector};

use crate::fetch::{resolve_href, PageFetcher};
use crate::parser::cell_text;

pub const MAIN_URL: &str = "https://www.volby.cz/pls/ps2017nss/ps3?xjazyk=CZ";

// Fixed cell positions in the top-level district table.
const NAME_CELL: usize = 1;
const LINK_CELL: usize = 3;

/// Fetch the top-level report page and map district name to report URL.
pub fn fetch_districts(fetcher: &impl PageFetcher) -> Result<HashMap<String, String>> {
    let html = fetcher.fetch(MAIN_URL)?;
    parse_districts(&html, MAIN_URL)
}

/// The top page mixes region headers and subtotal rows with district rows;
/// only rows with more than two cells and a link in the fourth cell count.
/// A repeated district name overwrites the earlier entry.
pub fn parse_districts(html: &str, base_url: &str) -> Result<HashMap<String, String>> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let mut districts = HashMap::new();

    for row in document.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() <= 2 {
            continue;
        }

        let href = match cells
            .get(LINK_CELL)
            .and_then(|cell| cell.select(&link_selector).next())
            .and_then(|link| link.value().attr("href"))
        {
            Some(href) => href,
            None => continue,
        };

        let name = cell_text(cells[NAME_CELL]);
        districts.insert(name, resolve_href(base_url, href)?);
    }

    Ok(districts)
}
