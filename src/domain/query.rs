// src/domain/query.rs
use crate::constants::{DEFAULT_LIMIT, DEFAULT_SKIP};

/// Paging and filter parameters shared by list and search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub skip: i64,
    pub limit: i64,
    /// `None` leaves the parameter off the query string entirely.
    pub archived: Option<bool>,
    pub tags: Vec<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
            archived: None,
            tags: vec![],
        }
    }
}

impl ListQuery {
    /// Ordered query pairs; each tag becomes its own `tag=<value>` pair.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("skip".to_string(), self.skip.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(archived) = self.archived {
            pairs.push(("archived".to_string(), archived.to_string()));
        }
        pairs.extend(self.tags.iter().map(|tag| ("tag".to_string(), tag.clone())));
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub filter: ListQuery,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, filter: ListQuery) -> Self {
        Self {
            keyword: keyword.into(),
            filter,
        }
    }

    /// `keyword` leads, followed by the list parameters.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("keyword".to_string(), self.keyword.clone())];
        pairs.extend(self.filter.to_pairs());
        pairs
    }
}
