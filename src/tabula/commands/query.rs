use crate::commands::page::{page_count, paginate};
use crate::commands::search::filter;
use crate::commands::sort::{sort_by, SortKey};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

/// What the table is currently showing: search text, ordering, and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub sort: Option<SortKey>,
    pub page_size: usize,
    pub page_index: usize,
}

impl Query {
    pub fn new(page_size: usize) -> Self {
        Self {
            text: String::new(),
            sort: None,
            page_size,
            page_index: 0,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }
}

/// One rendered page of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub records: Vec<Record>,
    /// Rows matching the search, across all pages.
    pub total: usize,
    pub page_index: usize,
    pub page_count: usize,
}

/// filter → sort → paginate, in that order.
pub fn run<S: DataStore>(store: &S, query: &Query) -> Result<Page> {
    let matched = filter(&store.records(), &query.text);
    let view = match query.sort {
        Some(key) => sort_by(&matched, key),
        None => matched,
    };

    Ok(Page {
        records: paginate(&view, query.page_size, query.page_index).to_vec(),
        total: view.len(),
        page_index: query.page_index,
        page_count: page_count(view.len(), query.page_size),
    })
}
