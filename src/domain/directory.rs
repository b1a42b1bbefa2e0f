//! Search, pagination and page-number arithmetic for the member directory.
//!
//! Everything here is a pure function of `(members, query, page)`, so the
//! dashboard can recompute its view from scratch after every change.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::Member;

pub const PAGE_SIZE: usize = 10;
pub const PAGE_WINDOW: usize = 10;

/// Case-insensitive substring match against the searchable fields.
pub fn matches_query(member: &Member, query: &str) -> bool {
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }

    let profile = &member.profile;
    [
        &profile.first_name,
        &profile.last_name,
        &profile.nickname,
        &profile.role,
        &profile.furigana,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}

pub fn filter_members<'a>(
    members: &'a [Member],
    query: &str,
) -> Vec<&'a Member> {
    members
        .iter()
        .filter(|member| matches_query(member, query))
        .collect()
}

pub fn total_pages(item_count: usize) -> usize {
    item_count.div_ceil(PAGE_SIZE)
}

/// Pulls `page` into `[1, total_pages]`. An empty result set still has page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Items shown on `page` (1-based). Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Page-number buttons to render around `current_page`.
pub fn page_window(
    current_page: usize,
    total_pages: usize,
) -> RangeInclusive<usize> {
    if total_pages <= PAGE_WINDOW {
        return 1..=total_pages;
    }

    let start = current_page
        .saturating_sub(PAGE_WINDOW / 2)
        .max(1)
        .min(total_pages - (PAGE_WINDOW - 1));
    start..=start + (PAGE_WINDOW - 1)
}

/// Which navigation buttons are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControls {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

impl PageControls {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let has_previous = current_page > 1;
        let has_next = current_page < total_pages;
        Self {
            first: has_previous,
            previous: has_previous,
            next: has_next,
            last: has_next,
        }
    }
}

/// "Showing from–to of filtered" numbers for the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySummary {
    pub total_members: usize,
    pub filtered_members: usize,
    pub showing_from: usize,
    pub showing_to: usize,
}

impl DirectorySummary {
    pub fn new(
        total_members: usize,
        filtered_members: usize,
        page: usize,
    ) -> Self {
        if filtered_members == 0 {
            return Self {
                total_members,
                filtered_members,
                showing_from: 0,
                showing_to: 0,
            };
        }

        let start = (page - 1) * PAGE_SIZE;
        Self {
            total_members,
            filtered_members,
            showing_from: start + 1,
            showing_to: (start + PAGE_SIZE).min(filtered_members),
        }
    }
}
