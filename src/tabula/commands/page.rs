/// Returns `view[page_index * page_size .. + page_size]`, clamped to the view.
///
/// Out-of-range pages and a zero page size yield an empty slice.
pub fn paginate<T>(view: &[T], page_size: usize, page_index: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let Some(start) = page_index.checked_mul(page_size) else {
        return &[];
    };
    if start >= view.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(view.len());
    &view[start..end]
}

/// Number of pages needed to show `len` rows. An empty view still has one
/// (empty) page so a pager always has something to show.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size).max(1)
}
