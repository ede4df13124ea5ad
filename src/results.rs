use std::collections::HashMap;

use scraper::{Html, Selector};

use crate::models::MunicipalityStats;
use crate::parser::{cell_text, parse_count};

// Municipality detail pages carry one summary table followed by one or more
// party tables. There are no semantic headers to query, so extraction is
// positional against the fixed report template.
const MIN_TABLES: usize = 3;

// Cell positions in the summary table's flattened cell list.
const REGISTERED_CELL: usize = 3;
const ENVELOPES_CELL: usize = 4;
const VALID_VOTES_CELL: usize = 7;

// Per party table: header rows to skip and cell positions within a row.
const HEADER_ROWS: usize = 2;
const PARTY_NAME_CELL: usize = 1;
const PARTY_VOTES_CELL: usize = 2;

/// Parse one municipality detail page. Returns `None` when the page does not
/// yield a complete statistics record; a partial record is never produced.
/// Party rows that fail to parse are dropped individually.
pub fn parse_results(html: &str) -> Option<MunicipalityStats> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let tables: Vec<_> = document.select(&table_selector).collect();
    if tables.len() < MIN_TABLES {
        return None;
    }

    let summary_cells: Vec<_> = tables[0].select(&cell_selector).collect();
    let registered_voters = parse_count(&cell_text(*summary_cells.get(REGISTERED_CELL)?))?;
    let issued_envelopes = parse_count(&cell_text(*summary_cells.get(ENVELOPES_CELL)?))?;
    let valid_votes = parse_count(&cell_text(*summary_cells.get(VALID_VOTES_CELL)?))?;

    let mut party_votes = HashMap::new();
    for table in &tables[1..] {
        for row in table.select(&row_selector).skip(HEADER_ROWS) {
            let cells: Vec<_> = row.select(&cell_selector).collect();
            if cells.len() < 3 {
                continue;
            }
            if let Some(votes) = parse_count(&cell_text(cells[PARTY_VOTES_CELL])) {
                party_votes.insert(cell_text(cells[PARTY_NAME_CELL]), votes);
            }
        }
    }

    Some(MunicipalityStats {
        registered_voters,
        issued_envelopes,
        valid_votes,
        party_votes,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_results;

    fn summary_table(registered: &str, envelopes: &str, valid: &str) -> String {
        format!(
            "<table><tr>\
               <td>c0</td><td>c1</td><td>c2</td>\
               <td>{registered}</td><td>{envelopes}</td>\
               <td>c5</td><td>c6</td><td>{valid}</td>\
             </tr></table>"
        )
    }

    fn party_table(rows: &[(&str, &str, &str)]) -> String {
        let mut table = String::from("<table><tr><th>h</th></tr><tr><th>h</th></tr>");
        for (number, name, votes) in rows {
            table.push_str(&format!(
                "<tr><td>{number}</td><td>{name}</td><td>{votes}</td></tr>"
            ));
        }
        table.push_str("</table>");
        table
    }

    #[test]
    fn parses_summary_and_party_tables() {
        let html = format!(
            "{}{}{}",
            summary_table("1\u{a0}234", "900", "877"),
            party_table(&[("1", "Strana A", "500"), ("2", "Strana B", "321")]),
            party_table(&[("3", "Strana C", "56")]),
        );
        let stats = parse_results(&html).unwrap();
        assert_eq!(stats.registered_voters, 1234);
        assert_eq!(stats.issued_envelopes, 900);
        assert_eq!(stats.valid_votes, 877);
        assert_eq!(stats.party_votes.len(), 3);
        assert_eq!(stats.party_votes["Strana A"], 500);
        assert_eq!(stats.party_votes["Strana C"], 56);
    }

    #[test]
    fn too_few_tables_is_absent() {
        let html = format!(
            "{}{}",
            summary_table("100", "90", "88"),
            party_table(&[("1", "Strana A", "88")]),
        );
        assert!(parse_results(&html).is_none());
    }

    #[test]
    fn unparsable_summary_cell_is_absent() {
        let html = format!(
            "{}{}{}",
            summary_table("abc", "90", "88"),
            party_table(&[("1", "Strana A", "88")]),
            party_table(&[]),
        );
        assert!(parse_results(&html).is_none());
    }

    #[test]
    fn missing_summary_cell_is_absent() {
        let html = format!(
            "<table><tr><td>only</td><td>four</td><td>cells</td><td>here</td></tr></table>{}{}",
            party_table(&[("1", "Strana A", "88")]),
            party_table(&[]),
        );
        assert!(parse_results(&html).is_none());
    }

    #[test]
    fn bad_party_row_is_dropped_but_rest_survive() {
        let html = format!(
            "{}{}{}",
            summary_table("100", "90", "88"),
            party_table(&[("1", "Strana A", "50"), ("2", "Strana B", "-")]),
            party_table(&[("3", "Strana C", "38")]),
        );
        let stats = parse_results(&html).unwrap();
        assert_eq!(stats.party_votes.len(), 2);
        assert!(!stats.party_votes.contains_key("Strana B"));
    }

    #[test]
    fn party_table_header_rows_are_skipped() {
        let html = format!(
            "{}{}{}",
            summary_table("100", "90", "88"),
            "<table>\
               <tr><td>x</td><td>Hlavička</td><td>header-not-a-count</td></tr>\
               <tr><td>x</td><td>Hlavička</td><td>header-not-a-count</td></tr>\
               <tr><td>1</td><td>Strana A</td><td>88</td></tr>\
             </table>",
            party_table(&[]),
        );
        let stats = parse_results(&html).unwrap();
        assert_eq!(stats.party_votes.len(), 1);
        assert_eq!(stats.party_votes["Strana A"], 88);
    }
}
