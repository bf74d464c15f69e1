//! Fixed-size, 1-indexed pagination over the raw post collection.

/// Slice of `items` shown on `page_number` (1-indexed).
///
/// Page 0 and pages past the last one yield an empty slice. A `page_size` of
/// zero also yields an empty slice.
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }

    let Some(start) = (page_number - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of non-empty pages for `len` items
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}
