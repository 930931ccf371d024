//! Domain types shared by the table UI and the list service.
//!
//! Both sides page and filter the same dataset, so the arithmetic lives here
//! once instead of being re-implemented per consumer.

pub mod mock_data;
pub mod pagination;
pub mod search;
pub mod sort;
pub mod user;

pub use mock_data::mock_users;
pub use pagination::{ListUsersResponse, PAGE_SIZE, page_count, page_range, parse_page};
pub use search::{filter_users, matches_search};
pub use sort::{SortConfig, SortDirection, UserField, collate_names, sort_users};
pub use user::User;
