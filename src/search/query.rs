//! Search clauses and how they combine

use crate::model::{Photo, Tag, fold_tag_type};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How two clauses combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Both clauses must match (AND)
    #[default]
    All,
    /// Either clause may match (OR)
    Any,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("AND"),
            Self::Any => f.write_str("OR"),
        }
    }
}

/// One `tag type` + `query` condition
///
/// Both sides are normalized once at construction: the type is compared
/// case-insensitively and the query is a trimmed, lowercased substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagClause {
    tag_type: String,
    query: String,
}

impl TagClause {
    #[must_use]
    pub fn new(tag_type: impl AsRef<str>, query: impl AsRef<str>) -> Self {
        Self {
            tag_type: fold_tag_type(tag_type.as_ref()),
            query: query.as_ref().trim().to_lowercase(),
        }
    }

    /// Parse `TYPE=QUERY`, or a bare `TYPE` meaning any value
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.split_once('=') {
            Some((tag_type, query)) => Self::new(tag_type, query),
            None => Self::new(text, ""),
        }
    }

    #[must_use]
    pub fn tag_type(&self) -> &str {
        &self.tag_type
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn matches_tag(&self, tag: &Tag) -> bool {
        fold_tag_type(tag.tag_type()) == self.tag_type
            && (self.query.is_empty() || tag.value().to_lowercase().contains(&self.query))
    }

    #[must_use]
    pub fn matches(&self, photo: &Photo) -> bool {
        photo.tags().iter().any(|tag| self.matches_tag(tag))
    }
}

impl fmt::Display for TagClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~\"{}\"", self.tag_type, self.query)
    }
}

/// One clause, optionally combined with a second
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    first: TagClause,
    second: Option<(SearchMode, TagClause)>,
}

impl SearchQuery {
    #[must_use]
    pub const fn single(clause: TagClause) -> Self {
        Self {
            first: clause,
            second: None,
        }
    }

    #[must_use]
    pub const fn with_mode(first: TagClause, mode: SearchMode, second: TagClause) -> Self {
        Self {
            first,
            second: Some((mode, second)),
        }
    }

    /// Require a second clause as well (replaces any existing second clause)
    #[must_use]
    pub fn and(self, clause: TagClause) -> Self {
        Self::with_mode(self.first, SearchMode::All, clause)
    }

    /// Accept a second clause instead (replaces any existing second clause)
    #[must_use]
    pub fn or(self, clause: TagClause) -> Self {
        Self::with_mode(self.first, SearchMode::Any, clause)
    }

    /// Build from one or two clauses; any beyond the second are ignored
    #[must_use]
    pub fn from_clauses(clauses: Vec<TagClause>, mode: SearchMode) -> Option<Self> {
        let mut clauses = clauses.into_iter();
        let first = clauses.next()?;
        Some(match clauses.next() {
            Some(second) => Self::with_mode(first, mode, second),
            None => Self::single(first),
        })
    }

    #[must_use]
    pub const fn first(&self) -> &TagClause {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> Option<(SearchMode, &TagClause)> {
        self.second.as_ref().map(|(mode, clause)| (*mode, clause))
    }

    #[must_use]
    pub fn matches(&self, photo: &Photo) -> bool {
        let first = self.first.matches(photo);
        match &self.second {
            None => first,
            Some((SearchMode::All, second)) => first && second.matches(photo),
            Some((SearchMode::Any, second)) => first || second.matches(photo),
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if let Some((mode, second)) = &self.second {
            write!(f, " {mode} {second}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_normalizes() {
        let clause = TagClause::new(" Location ", "  MAZE ");
        assert_eq!(clause.tag_type(), "location");
        assert_eq!(clause.query(), "maze");
    }

    #[test]
    fn test_parse() {
        assert_eq!(TagClause::parse("Person=Pac"), TagClause::new("Person", "Pac"));
        assert_eq!(TagClause::parse("Person"), TagClause::new("Person", ""));
        assert_eq!(TagClause::parse("Person=a=b").query(), "a=b");
    }

    #[test]
    fn test_matches_tag() {
        let tag = Tag::new("Location", "Haunted Maze").unwrap();
        assert!(TagClause::new("location", "maze").matches_tag(&tag));
        assert!(TagClause::new("LOCATION", "").matches_tag(&tag));
        assert!(!TagClause::new("Person", "maze").matches_tag(&tag));
        assert!(!TagClause::new("Location", "castle").matches_tag(&tag));
    }

    #[test]
    fn test_from_clauses() {
        assert!(SearchQuery::from_clauses(Vec::new(), SearchMode::All).is_none());

        let query = SearchQuery::from_clauses(
            vec![TagClause::new("a", "1"), TagClause::new("b", "2")],
            SearchMode::Any,
        )
        .unwrap();
        assert_eq!(query.second().map(|(mode, _)| mode), Some(SearchMode::Any));
    }

    #[test]
    fn test_display() {
        let query = SearchQuery::single(TagClause::new("Location", "Maze"))
            .and(TagClause::new("Person", "Pac"));
        assert_eq!(query.to_string(), "location~\"maze\" AND person~\"pac\"");
    }
}
