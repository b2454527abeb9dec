/// Fixed-size pagination over an already-filtered list. Pages are
/// 1-based, matching the "Page X of Y" label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: usize,
    pub current_page: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    /// Number of pages for `len` items; an empty list still shows one
    /// (empty) page.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// The slice of `items` visible on the current page.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        if start >= items.len() {
            &[]
        } else {
            &items[start..end]
        }
    }

    /// Jump to a page, clamped to `[1, total_pages(len)]`.
    pub fn set_page(&mut self, page: usize, len: usize) {
        self.current_page = page.clamp(1, self.total_pages(len));
    }

    pub fn next_page(&mut self, len: usize) {
        self.set_page(self.current_page + 1, len);
    }

    pub fn prev_page(&mut self, len: usize) {
        self.set_page(self.current_page.saturating_sub(1).max(1), len);
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_items_at_four_per_page_is_two_pages() {
        let p = Pagination::new(4);
        assert_eq!(p.total_pages(7), 2);
        assert_eq!(p.total_pages(8), 2);
        assert_eq!(p.total_pages(9), 3);
        assert_eq!(p.total_pages(0), 1);
    }

    #[test]
    fn page_slices_partition_the_list() {
        let items: Vec<u32> = (0..7).collect();
        let mut p = Pagination::new(4);
        assert_eq!(p.page_slice(&items), &[0, 1, 2, 3]);
        p.set_page(2, items.len());
        assert_eq!(p.page_slice(&items), &[4, 5, 6]);
    }

    #[test]
    fn set_page_clamps_out_of_range() {
        let mut p = Pagination::new(4);
        p.set_page(99, 7);
        assert_eq!(p.current_page, 2);
        p.set_page(0, 7);
        assert_eq!(p.current_page, 1);
    }

    #[test]
    fn next_and_prev_respect_bounds() {
        let mut p = Pagination::new(4);
        assert!(!p.has_prev());
        assert!(p.has_next(7));
        p.next_page(7);
        assert_eq!(p.current_page, 2);
        assert!(!p.has_next(7));
        p.next_page(7);
        assert_eq!(p.current_page, 2);
        p.prev_page(7);
        assert_eq!(p.current_page, 1);
        p.prev_page(7);
        assert_eq!(p.current_page, 1);
    }
}
