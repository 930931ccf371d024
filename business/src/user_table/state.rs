//! Working state of the user table.
//!
//! Everything the table shows is derived from this state by
//! [`UserTableView`](super::UserTableView); nothing here caches a filtered or
//! sorted copy of the list.

use std::any::Any;

use chrono::{DateTime, Utc};
use roster_model::{SortConfig, User, UserField, filter_users, page_count};
use roster_states::{State, state_assign_impl};

/// The open "edit username" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    pub user_id: u32,
    /// Current text of the name input.
    pub input: String,
}

#[derive(Debug, Clone)]
pub struct UserTableState {
    /// Working list, replaced by loads and edited in place.
    users: Vec<User>,
    is_loading: bool,
    load_error: Option<String>,
    last_loaded: Option<DateTime<Utc>>,
    search_term: String,
    sort: Option<SortConfig>,
    /// 1-based.
    current_page: usize,
    edit: Option<EditDialog>,
}

impl Default for UserTableState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            // The table mounts straight into its initial load.
            is_loading: true,
            load_error: None,
            last_loaded: None,
            search_term: String::new(),
            sort: None,
            current_page: 1,
            edit: None,
        }
    }
}

impl State for UserTableState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

impl UserTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with `users` already loaded.
    pub fn with_users(users: Vec<User>) -> Self {
        let mut state = Self::default();
        state.replace_users(users, Utc::now());
        state
    }

    // =====================
    // Load
    // =====================

    /// Replace the working list with a freshly loaded dataset.
    ///
    /// Takes `now` as a parameter so tests control the timestamp.
    pub fn replace_users(&mut self, users: Vec<User>, now: DateTime<Utc>) {
        self.users = users;
        self.is_loading = false;
        self.load_error = None;
        self.last_loaded = Some(now);
        self.clamp_page();
    }

    pub fn fail_load(&mut self, error: String) {
        self.is_loading = false;
        self.load_error = Some(error);
    }

    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.load_error = None;
    }

    // =====================
    // Search, sort, paging
    // =====================

    /// Set the search term and go back to the first page.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn request_sort(&mut self, field: UserField) {
        self.sort = Some(SortConfig::request(self.sort, field));
    }

    /// Number of pages for the current search.
    pub fn page_count(&self) -> usize {
        page_count(filter_users(&self.users, &self.search_term).len())
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.page_count() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Pull the current page back onto the last non-empty page.
    pub fn clamp_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.page_count().max(1));
    }

    // =====================
    // Edit dialog
    // =====================

    /// Open the dialog pre-filled with the user's current name.
    ///
    /// Returns `false` when no user has this id.
    pub fn open_edit(&mut self, user_id: u32) -> bool {
        let Some(user) = self.users.iter().find(|user| user.id == user_id) else {
            log::warn!("Cannot edit unknown user {user_id}");
            return false;
        };
        self.edit = Some(EditDialog {
            user_id,
            input: user.name.clone(),
        });
        true
    }

    /// Write the dialog input into the selected user's name and close the dialog.
    ///
    /// Any input is accepted, including an empty name. Returns the edited id.
    pub fn confirm_edit(&mut self) -> Option<u32> {
        let EditDialog { user_id, input } = self.edit.take()?;
        let user = self.users.iter_mut().find(|user| user.id == user_id)?;
        log::info!("Renamed user {user_id} from {:?} to {input:?}", user.name);
        user.name = input;
        // The new name may no longer match the search.
        self.clamp_page();
        Some(user_id)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    // =====================
    // Getters
    // =====================

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn last_loaded(&self) -> Option<DateTime<Utc>> {
        self.last_loaded
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn edit_dialog(&self) -> Option<&EditDialog> {
        self.edit.as_ref()
    }

    /// Name input of the open dialog, for binding to a text field.
    pub fn edit_input_mut(&mut self) -> Option<&mut String> {
        self.edit.as_mut().map(|dialog| &mut dialog.input)
    }
}
