//! User table panel and its parts:
//! - `panel`: Loading, error and table states
//! - `search`: Search input
//! - `table`: Table rendering components (columns, header, row, cells)
//! - `pagination`: Prev/Next controls
//! - `modals`: Edit username dialog

mod modals;
mod pagination;
mod panel;
mod search;
pub mod table;

pub use modals::USERNAME_LABEL;
pub use panel::{PanelActions, user_table_panel};
pub use search::SEARCH_PLACEHOLDER;
