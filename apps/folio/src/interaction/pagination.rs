//! Publications pagination.
//!
//! A page request hides every publication item, then after
//! [`REVEAL_DELAY`] reveals the items of the requested page with a
//! staggered, alternating slide-in. Previous/next controls are disabled at
//! the first/last page; there is no wraparound.

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 6;

/// Delay between hiding the old page and revealing the new one.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Extra animation delay per position within the page.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Reveal state of one publication item on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reveal {
    Hidden,
    SlideLeft,
    SlideRight,
}

impl Reveal {
    /// Animation class applied to a revealed item.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Reveal::Hidden => None,
            Reveal::SlideLeft => Some("animate-slide-left"),
            Reveal::SlideRight => Some("animate-slide-right"),
        }
    }

    pub fn is_visible(self) -> bool {
        self != Reveal::Hidden
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReveal {
    pub reveal: Reveal,
    /// Staggered animation delay; zero for hidden items.
    pub delay: Duration,
}

impl ItemReveal {
    /// Inline style for the item: laid out with its stagger delay, or
    /// removed from the layout.
    pub fn style(&self) -> String {
        if self.reveal.is_visible() {
            format!(
                "display: grid; animation-delay: {}s;",
                self.delay.as_secs_f64()
            )
        } else {
            "display: none;".to_string()
        }
    }
}

/// Everything the view needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub current_page: usize,
    pub total_pages: usize,
    /// One entry per publication item, in list order.
    pub items: Vec<ItemReveal>,
    pub reveal_after: Duration,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PageView {
    /// Indices of the items visible on this page.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.reveal.is_visible())
            .map(|(i, _)| i)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    per_page: usize,
    current_page: usize,
}

impl Paginator {
    /// `per_page` of zero is treated as one.
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Paginator {
            total_items,
            per_page: per_page.max(1),
            current_page: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// `ceil(total_items / per_page)`; zero when there are no items.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Moves to page `page` (1-based), clamped to the valid range.
    pub fn show_page(&mut self, page: usize) -> PageView {
        let last = self.total_pages().max(1);
        let clamped = page.clamp(1, last);
        if clamped != page {
            warn!("Requested publications page {page} is out of range; showing page {clamped}");
        }
        self.current_page = clamped;
        self.view()
    }

    /// Advances one page; stays put on the last page.
    pub fn next(&mut self) -> PageView {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
        self.view()
    }

    /// Goes back one page; stays put on the first page.
    pub fn prev(&mut self) -> PageView {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
        self.view()
    }

    pub fn view(&self) -> PageView {
        let start = (self.current_page - 1) * self.per_page;
        let end = start + self.per_page;

        let items = (0..self.total_items)
            .map(|index| {
                if (start..end).contains(&index) {
                    let position = index - start;
                    let reveal = if position % 2 == 0 {
                        Reveal::SlideLeft
                    } else {
                        Reveal::SlideRight
                    };
                    ItemReveal {
                        reveal,
                        delay: STAGGER_STEP * position as u32,
                    }
                } else {
                    ItemReveal {
                        reveal: Reveal::Hidden,
                        delay: Duration::ZERO,
                    }
                }
            })
            .collect();

        let total_pages = self.total_pages();
        PageView {
            current_page: self.current_page,
            total_pages,
            items,
            reveal_after: REVEAL_DELAY,
            prev_disabled: self.current_page <= 1,
            next_disabled: self.current_page >= total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(Paginator::new(14, 6).total_pages(), 3);
        assert_eq!(Paginator::new(12, 6).total_pages(), 2);
        assert_eq!(Paginator::new(1, 6).total_pages(), 1);
        assert_eq!(Paginator::new(0, 6).total_pages(), 0);
    }

    #[test]
    fn test_first_page_reveals_first_six() {
        let mut pager = Paginator::new(14, DEFAULT_ITEMS_PER_PAGE);
        let view = pager.show_page(1);
        assert_eq!(view.visible_indices(), vec![0, 1, 2, 3, 4, 5]);
        assert!(view.prev_disabled);
        assert!(!view.next_disabled);
    }

    #[test]
    fn test_last_page_of_fourteen_shows_two() {
        let mut pager = Paginator::new(14, 6);
        let view = pager.show_page(3);
        assert_eq!(view.visible_indices(), vec![12, 13]);
        assert_eq!(view.current_page, 3);
        assert!(view.next_disabled);
        assert!(!view.prev_disabled);
    }

    #[test]
    fn test_reveal_alternates_by_position_within_page() {
        let mut pager = Paginator::new(14, 6);
        let view = pager.show_page(2);
        assert_eq!(view.items[6].reveal, Reveal::SlideLeft);
        assert_eq!(view.items[7].reveal, Reveal::SlideRight);
        assert_eq!(view.items[8].reveal, Reveal::SlideLeft);
        assert_eq!(view.items[0].reveal, Reveal::Hidden);
        assert_eq!(view.items[8].delay, Duration::from_millis(200));
        assert_eq!(view.reveal_after, REVEAL_DELAY);
    }

    #[test]
    fn test_item_style_carries_stagger_delay() {
        let view = Paginator::new(14, 6).view();
        assert_eq!(view.items[0].style(), "display: grid; animation-delay: 0s;");
        assert_eq!(view.items[3].style(), "display: grid; animation-delay: 0.3s;");
        assert_eq!(view.items[6].style(), "display: none;");
    }

    #[test]
    fn test_out_of_range_requests_are_clamped() {
        let mut pager = Paginator::new(14, 6);
        assert_eq!(pager.show_page(0).current_page, 1);
        assert_eq!(pager.show_page(99).current_page, 3);
    }

    #[test]
    fn test_next_and_prev_stop_at_boundaries() {
        let mut pager = Paginator::new(14, 6);
        assert_eq!(pager.prev().current_page, 1);
        pager.next();
        pager.next();
        let view = pager.next();
        assert_eq!(view.current_page, 3);
        assert!(view.next_disabled);
        assert_eq!(pager.prev().current_page, 2);
    }

    #[test]
    fn test_single_page_disables_both_controls() {
        let view = Paginator::new(4, 6).view();
        assert!(view.prev_disabled);
        assert!(view.next_disabled);
        assert_eq!(view.visible_indices().len(), 4);
    }

    #[test]
    fn test_no_items_disables_both_controls() {
        let mut pager = Paginator::new(0, 6);
        let view = pager.show_page(1);
        assert_eq!(view.total_pages, 0);
        assert!(view.items.is_empty());
        assert!(view.prev_disabled && view.next_disabled);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let pager = Paginator::new(3, 0);
        assert_eq!(pager.per_page(), 1);
        assert_eq!(pager.total_pages(), 3);
    }
}
