//! Result presentation: pagination, exports, external tool links

mod export;
mod links;

pub use export::{clipboard_text, export_csv, write_csv, CSV_HEADERS};
pub use links::ExternalTool;

use crate::types::DomainCandidate;

/// Fixed-size pagination over an already sorted candidate list
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: usize,
}

/// One page of results, 1-based
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub items: &'a [DomainCandidate],
    pub number: usize,
    pub total_pages: usize,
    /// 1-based index of the first item on this page (0 when empty)
    pub start: usize,
    /// 1-based index of the last item on this page (0 when empty)
    pub end: usize,
    pub total: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Slice out a page. Out-of-range numbers clamp to the nearest valid
    /// page; an empty list yields an empty page 1.
    pub fn page<'a>(&self, items: &'a [DomainCandidate], number: usize) -> Page<'a> {
        let total = items.len();
        let total_pages = self.total_pages(total);

        if total == 0 {
            return Page {
                items: &[],
                number: 1,
                total_pages: 0,
                start: 0,
                end: 0,
                total: 0,
            };
        }

        let number = number.clamp(1, total_pages);
        let start_index = (number - 1) * self.page_size;
        let end_index = (start_index + self.page_size).min(total);

        Page {
            items: &items[start_index..end_index],
            number,
            total_pages,
            start: start_index + 1,
            end: end_index,
            total,
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(n: usize) -> Vec<DomainCandidate> {
        (0..n)
            .map(|i| DomainCandidate {
                domain: format!("domain{}.com", i),
                keyword: "k".to_string(),
                city: "c".to_string(),
                state: "s".to_string(),
                population: 0,
                available: false,
                trademark: false,
            })
            .collect()
    }

    #[test]
    fn test_full_and_partial_pages() {
        let paginator = Paginator::new(20);
        let all = candidates(45);

        let first = paginator.page(&all, 1);
        assert_eq!(first.items.len(), 20);
        assert_eq!((first.start, first.end), (1, 20));
        assert_eq!(first.total_pages, 3);

        let last = paginator.page(&all, 3);
        assert_eq!(last.items.len(), 5);
        assert_eq!((last.start, last.end), (41, 45));
        assert_eq!(last.items[0].domain, "domain40.com");
    }

    #[test]
    fn test_out_of_range_pages_clamp() {
        let paginator = Paginator::new(10);
        let all = candidates(25);

        assert_eq!(paginator.page(&all, 0).number, 1);
        assert_eq!(paginator.page(&all, 99).number, 3);
        assert_eq!(paginator.page(&all, 99).items.len(), 5);
    }

    #[test]
    fn test_empty_list() {
        let paginator = Paginator::new(50);
        let page = paginator.page(&[], 1);
        assert_eq!(page.items.len(), 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!((page.start, page.end), (0, 0));
    }

    #[test]
    fn test_zero_page_size_clamps_to_one() {
        let paginator = Paginator::new(0);
        assert_eq!(paginator.page_size(), 1);
        assert_eq!(paginator.total_pages(3), 3);
    }
}
