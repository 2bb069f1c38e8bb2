//! Tag search across all albums
//!
//! A query is one or two [`TagClause`]s. A photo satisfies a clause when it
//! carries at least one tag whose type equals the clause's type (ignoring
//! case) and whose value contains the clause's query (ignoring case). An
//! empty query matches every value of that type. With two clauses,
//! [`SearchMode::All`] requires both and [`SearchMode::Any`] either.
//!
//! Results are [`PhotoId`] handles into the live library, not snapshots:
//! retagging a photo after a search changes what the handle shows.

mod query;

pub use query::{SearchMode, SearchQuery, TagClause};

use crate::model::PhotoId;
use crate::store::Library;
use std::collections::HashSet;

/// Photos matching `query`, each once, in first-encountered order
///
/// Albums are scanned in creation order and photos in album order.
#[must_use]
pub fn search(library: &Library, query: &SearchQuery) -> Vec<PhotoId> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for (album, _) in library.albums() {
        for (id, photo) in library.photos_in(album) {
            if seen.contains(&id) {
                continue;
            }
            seen.insert(id);
            if query.matches(photo) {
                results.push(id);
            }
        }
    }

    tracing::debug!(%query, matches = results.len(), "search finished");
    results
}
