//! Search command

use super::Result;
use crate::search::{SearchMode, SearchQuery, TagClause};
use crate::store::Session;
use crate::view::rows_for;
use crate::{AlbumrError, output};

/// Execute the search command
///
/// Each clause is `TYPE=QUERY`; a bare `TYPE` matches any value of that type.
///
/// # Errors
/// Returns an error if no clause is given or JSON output fails
pub fn execute(
    session: &Session,
    clauses: &[String],
    mode: SearchMode,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let clauses: Vec<TagClause> = clauses.iter().map(|c| TagClause::parse(c)).collect();
    let query = SearchQuery::from_clauses(clauses, mode)
        .ok_or_else(|| AlbumrError::InvalidInput("No search clause provided".into()))?;

    let library = session.library();
    let rows = rows_for(library, library.search(&query));

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        if !quiet {
            println!("No photos match {query}");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} photo(s) matching {query}:", rows.len());
    }
    for row in &rows {
        println!("{}", output::photo_row(row, quiet));
    }
    Ok(())
}
