use std::collections::{BTreeMap, BTreeSet};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::fetch::PageFetcher;
use crate::models::{MunicipalityRef, MunicipalityStats, ResultRow};
use crate::municipalities::parse_municipalities;
use crate::results::parse_results;
use crate::{debug_eprintln, debug_println};

// Small pause between municipality fetches to be respectful to the server.
const REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Crawl one district: fetch its roster, fetch and parse every municipality
/// detail page, and merge the results into the final sorted row set.
/// Municipalities without a complete statistics record are dropped entirely.
pub fn scrape_district(fetcher: &impl PageFetcher, district_url: &str) -> Result<Vec<ResultRow>> {
    let roster_html = fetcher.fetch(district_url)?;
    let roster = parse_municipalities(&roster_html, district_url)?;
    println!("Found {} municipalities", roster.len());

    let mut collected = Vec::new();
    for municipality in roster {
        debug_println!(
            "Scraping municipality {} ({})",
            municipality.name,
            municipality.detail_url
        );
        let html = fetcher.fetch(&municipality.detail_url)?;
        match parse_results(&html) {
            Some(stats) => collected.push((municipality, stats)),
            None => {
                debug_eprintln!("Skipping {}: no parsable result tables", municipality.name)
            }
        }
        thread::sleep(REQUEST_DELAY);
    }
    println!("Scraped {} municipalities with results", collected.len());

    Ok(merge_rows(collected))
}

/// Merge per-municipality results into rows with an identical column set:
/// the union of all party names seen in the run, zero-filled where a
/// municipality did not report a party, sorted by municipality name.
pub fn merge_rows(results: Vec<(MunicipalityRef, MunicipalityStats)>) -> Vec<ResultRow> {
    let all_parties: BTreeSet<String> = results
        .iter()
        .flat_map(|(_, stats)| stats.party_votes.keys().cloned())
        .collect();

    let mut rows: Vec<ResultRow> = results
        .into_iter()
        .map(|(municipality, stats)| {
            let party_votes: BTreeMap<String, u32> = all_parties
                .iter()
                .map(|party| {
                    let votes = stats.party_votes.get(party).copied().unwrap_or(0);
                    (party.clone(), votes)
                })
                .collect();
            ResultRow {
                code: municipality.code,
                name: municipality.name,
                registered_voters: stats.registered_voters,
                issued_envelopes: stats.issued_envelopes,
                valid_votes: stats.valid_votes,
                party_votes,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}
