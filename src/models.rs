use std::collections::{BTreeMap, HashMap};

/// One municipality as listed on a district report page.
#[derive(Debug, Clone)]
pub struct MunicipalityRef {
    pub code: String,
    pub name: String,
    pub detail_url: String,
}

/// Raw figures extracted from one municipality detail page. `party_votes`
/// only holds the parties that page actually reported; zero-filling against
/// the run-wide party set happens later in the aggregator.
#[derive(Debug, Clone)]
pub struct MunicipalityStats {
    pub registered_voters: u32,
    pub issued_envelopes: u32,
    pub valid_votes: u32,
    pub party_votes: HashMap<String, u32>,
}

/// One output row: fixed columns plus a vote count for every party seen
/// anywhere in the run. All rows of a run share the same party key set.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub code: String,
    pub name: String,
    pub registered_voters: u32,
    pub issued_envelopes: u32,
    pub valid_votes: u32,
    pub party_votes: BTreeMap<String, u32>,
}
