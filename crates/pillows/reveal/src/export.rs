use pillows_traits::check;
use pillows_types::{TraitLookup, TraitRecord};
use tracing::warn;

use crate::error::{QueryError, QueryResult};
use crate::query::RangeQuery;

/// Drain `query` into export records, validating each item.
///
/// Fails on the first unavailable item or the first rule violation.
/// Records are buffered one chunk at a time, never the whole window up front.
pub fn collect_records(query: RangeQuery) -> QueryResult<Vec<TraitRecord>> {
    let mut records = Vec::with_capacity(query.size_hint().0.min(query.chunk_size()));
    for item in query {
        let traits = match item.traits {
            TraitLookup::Available(traits) => traits,
            TraitLookup::Unavailable => return Err(QueryError::NotYetRevealed),
        };
        if let Err(violation) = check(&traits) {
            warn!(index = item.index, %violation, "derived item failed validation");
            return Err(QueryError::RuleViolation {
                index: item.index,
                violation,
            });
        }
        records.push(TraitRecord::new(item.index, &traits));
    }
    Ok(records)
}

/// Pretty-printed JSON array of records.
pub fn records_to_json(records: &[TraitRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
