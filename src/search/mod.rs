pub mod classifier;
pub mod evaluator;
pub mod filters;
pub mod formatter;

#[cfg(test)]
pub(crate) mod tests;

use crate::dex::Dex;
use crate::errors::SearchResult;
use schema::SpeciesData;

pub use classifier::Token;
pub use filters::QueryFilters;
pub use formatter::{format_results, SampleRng, MAX_DISPLAYED};

/// One parsed dexsearch invocation: classified tokens accumulated into
/// filter categories, ready to evaluate against a dex snapshot. Built once
/// per invocation and discarded after formatting.
#[derive(Debug, Clone)]
pub struct DexQuery {
    filters: QueryFilters,
}

impl DexQuery {
    /// Split a raw comma-separated query, classify every token, and
    /// accumulate the categories. Any unrecognized token or cardinality
    /// violation aborts the whole parse; nothing partial is kept.
    pub fn parse(dex: &Dex, raw: &str) -> SearchResult<DexQuery> {
        let mut filters = QueryFilters::new();

        for raw_token in raw.split(',') {
            let token = classifier::classify(dex, raw_token)?;
            filters.accumulate(token)?;
        }
        filters.validate()?;

        Ok(DexQuery { filters })
    }

    /// Whether the query carries the `all` modifier. Exposed so the caller
    /// can reject `all` combined with broadcast before evaluating.
    pub fn requests_all(&self) -> bool {
        self.filters.all
    }

    /// Evaluate against a dex snapshot, returning matches in pokedex order.
    pub fn evaluate<'d>(&self, dex: &'d Dex) -> SearchResult<Vec<&'d SpeciesData>> {
        evaluator::evaluate(dex, &self.filters)
    }
}
