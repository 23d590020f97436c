use serde::Serialize;

/// A 1-based page request. Both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
}

impl PageWindow {
    /// Zero-based index of the first item on this page.
    #[must_use]
    pub fn offset(self) -> usize {
        (self.page.max(1) as usize - 1).saturating_mul(self.page_size as usize)
    }

    #[must_use]
    pub fn limit(self) -> usize {
        self.page_size.max(1) as usize
    }

    /// Whether items exist beyond this page given `total` matches.
    #[must_use]
    pub fn has_more(self, total: usize) -> bool {
        self.offset().saturating_add(self.limit()) < total
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matches before pagination.
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Assemble a page whose items were already windowed elsewhere.
    #[must_use]
    pub fn from_window(items: Vec<T>, total: usize, window: PageWindow) -> Self {
        Self {
            items,
            total,
            page: window.page,
            page_size: window.page_size,
            has_more: window.has_more(total),
        }
    }
}

/// Slice `ordered` to `window`. Out-of-range pages are empty, never an error.
#[must_use]
pub fn paginate<T>(ordered: Vec<T>, window: PageWindow) -> Page<T> {
    let total = ordered.len();
    let items = ordered
        .into_iter()
        .skip(window.offset())
        .take(window.limit())
        .collect();
    Page::from_window(items, total, window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(page: u32, page_size: u32) -> PageWindow {
        PageWindow { page, page_size }
    }

    #[test]
    fn third_page_of_twenty_five() {
        let records: Vec<u32> = (1..=25).collect();
        let page = paginate(records, window(3, 10));
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
        assert!(!page.has_more);
    }

    #[test]
    fn has_more_when_items_remain() {
        let page = paginate((1..=25).collect::<Vec<u32>>(), window(2, 10));
        assert_eq!(page.items.len(), 10);
        assert!(page.has_more);
    }

    #[test]
    fn exact_boundary_has_no_more() {
        let page = paginate((1..=20).collect::<Vec<u32>>(), window(2, 10));
        assert_eq!(page.items.len(), 10);
        assert!(!page.has_more);
    }

    #[test]
    fn out_of_range_page_is_empty_with_total() {
        let page = paginate((1..=5).collect::<Vec<u32>>(), window(9, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
        assert!(!page.has_more);
    }

    #[test]
    fn concatenated_pages_reproduce_the_list() {
        let all: Vec<u32> = (1..=23).collect();
        let size = 4;
        let pages = all.len().div_ceil(size as usize);
        let mut rebuilt = Vec::new();
        for n in 1..=pages {
            let page = paginate(all.clone(), window(u32::try_from(n).unwrap(), size));
            rebuilt.extend(page.items);
        }
        assert_eq!(rebuilt, all);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let page = paginate(vec![1, 2, 3], window(u32::MAX, 50));
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn serializes_camel_case() {
        let page = paginate(vec![1], window(1, 12));
        let json = serde_json::to_value(&page).expect("serialize");
        assert_eq!(json["pageSize"], 12);
        assert_eq!(json["hasMore"], false);
    }
}
