use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};

use crate::models::ResultRow;

const FIXED_HEADERS: [&str; 5] = [
    "Kód obce",
    "Název obce",
    "Voliči v seznamu",
    "Vydané obálky",
    "Platné hlasy",
];

/// Write the aggregated rows to a CSV file. Every row carries the same party
/// key set, so the first row's keys double as the party column headers; an
/// empty row set still produces a file with the fixed headers.
pub fn save_rows_to_csv(rows: &[ResultRow], output_path: &str) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path))?;
    write_rows(rows, file)?;
    println!("Saved {} rows to {}", rows.len(), output_path);
    Ok(())
}

pub fn write_rows<W: Write>(rows: &[ResultRow], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    let party_columns: Vec<&str> = rows
        .first()
        .map(|row| row.party_votes.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let mut header: Vec<&str> = FIXED_HEADERS.to_vec();
    header.extend(&party_columns);
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![
            row.code.clone(),
            row.name.clone(),
            row.registered_voters.to_string(),
            row.issued_envelopes.to_string(),
            row.valid_votes.to_string(),
        ];
        for column in &party_columns {
            let votes = row.party_votes.get(*column).copied().unwrap_or(0);
            record.push(votes.to_string());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
