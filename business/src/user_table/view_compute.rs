use std::any::{Any, TypeId};

use roster_model::{User, filter_users, page_count, page_range, sort_users};
use roster_states::{Compute, ComputeDeps, Dep, Updater, assign_impl};

use super::UserTableState;

/// What the table renders this frame: search, then sort, then slice.
///
/// Derived from [`UserTableState`] on every change, never edited directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTableView {
    /// Rows of the current page, in display order.
    pub rows: Vec<User>,
    /// Number of users matching the search, across all pages.
    pub filtered_count: usize,
    pub total_count: usize,
    /// 1-based current page.
    pub page: usize,
    pub page_count: usize,
}

impl Default for UserTableView {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filtered_count: 0,
            total_count: 0,
            page: 1,
            page_count: 0,
        }
    }
}

impl UserTableView {
    pub fn derive(state: &UserTableState) -> Self {
        let mut filtered = filter_users(state.users(), state.search_term());
        sort_users(&mut filtered, state.sort());

        let page = state.current_page();
        let rows = filtered[page_range(page, filtered.len())]
            .iter()
            .map(|user| (*user).clone())
            .collect();

        Self {
            rows,
            filtered_count: filtered.len(),
            total_count: state.users().len(),
            page,
            page_count: page_count(filtered.len()),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

impl Compute for UserTableView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn deps(&self) -> ComputeDeps {
        (vec![TypeId::of::<UserTableState>()], Vec::new())
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let state = deps.state::<UserTableState>();
        updater.set(Self::derive(state));
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
