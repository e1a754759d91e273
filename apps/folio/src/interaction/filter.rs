//! Project category filter.
//!
//! Selecting a tag fades and shrinks the non-matching projects at once and
//! drops them from the layout after [`HIDE_DELAY`]. Matching projects come
//! back immediately.

use std::time::Duration;

use serde::Serialize;

/// The filter tag that matches every project.
pub const ALL: &str = "all";

/// Hidden items fade and shrink first, then leave the layout after this delay.
pub const HIDE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemVisibility {
    Visible,
    Hidden,
}

impl ItemVisibility {
    /// Inline style applied as soon as the filter changes.
    pub fn style(self) -> &'static str {
        match self {
            ItemVisibility::Visible => "display: block; opacity: 1; transform: scale(1);",
            ItemVisibility::Hidden => "opacity: 0; transform: scale(0.8);",
        }
    }

    /// Inline style once [`HIDE_DELAY`] has passed.
    pub fn settled_style(self) -> &'static str {
        match self {
            ItemVisibility::Visible => self.style(),
            ItemVisibility::Hidden => "display: none; opacity: 0; transform: scale(0.8);",
        }
    }
}

/// Result of applying the active filter to the project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterView {
    pub active: String,
    /// One entry per project item, in list order.
    pub items: Vec<ItemVisibility>,
    /// When hidden items switch from their transition style to
    /// `display: none`.
    pub hide_after: Duration,
}

impl FilterView {
    pub fn visible_count(&self) -> usize {
        self.items
            .iter()
            .filter(|v| **v == ItemVisibility::Visible)
            .count()
    }
}

/// Project category filter. Exactly one tag is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    active: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter {
            active: ALL.to_string(),
        }
    }
}

impl CategoryFilter {
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Makes `tag` the single active filter.
    pub fn select(&mut self, tag: &str) {
        self.active = tag.to_string();
    }

    pub fn matches(&self, category: &str) -> bool {
        self.active == ALL || self.active == category
    }

    /// Visibility of each item given its category, in list order.
    pub fn visibility<'a, I>(&self, categories: I) -> Vec<ItemVisibility>
    where
        I: IntoIterator<Item = &'a str>,
    {
        categories
            .into_iter()
            .map(|category| {
                if self.matches(category) {
                    ItemVisibility::Visible
                } else {
                    ItemVisibility::Hidden
                }
            })
            .collect()
    }

    pub fn view<'a, I>(&self, categories: I) -> FilterView
    where
        I: IntoIterator<Item = &'a str>,
    {
        FilterView {
            active: self.active.clone(),
            items: self.visibility(categories),
            hide_after: HIDE_DELAY,
        }
    }
}

/// Filter buttons to offer: "all" followed by each distinct category in
/// order of first appearance.
pub fn filter_tags<'a, I>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tags = vec![ALL.to_string()];
    for category in categories {
        if !category.is_empty() && !tags.iter().any(|t| t == category) {
            tags.push(category.to_string());
        }
    }
    tags
}
