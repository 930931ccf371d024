//! Integration tests for the user table panel.
//!
//! Header clicks and row buttons live inside `TableBuilder`, where kittest does
//! not propagate clicks; those interactions go through `common::update_table`,
//! and the action wiring behind them is covered by the panel's unit tests.
//! Controls outside the table (search box, pagination) are driven for real.

use egui::accesskit::Role;
use kittest::Queryable;
use roster_business::{TableConfig, UserTableView};
use roster_model::UserField;

use crate::common::{TestCtx, table_state, update_table, wait_for_load};

mod common;

#[tokio::test]
async fn test_spinner_shown_while_loading() {
    let mut ctx = TestCtx::with_config(TableConfig::default());
    let harness = ctx.harness_mut();

    harness.step();

    assert!(
        harness.query_by_label_contains("Loading users").is_some(),
        "Loading label should be shown during the simulated delay"
    );
    assert!(table_state(harness).users().is_empty());
}

#[tokio::test]
async fn test_first_page_rendered_after_load() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();

    wait_for_load(harness).await;

    assert!(harness.query_by_label_contains("Loading users").is_none());
    assert!(harness.query_by_label("Léa Martin").is_some());
    assert!(harness.query_by_label("Arthur Moreau").is_some());
    // 11th user is on page 2.
    assert!(harness.query_by_label("Zoé Simon").is_none());
    assert!(harness.query_by_label("Page 1").is_some());
    assert!(harness.query_by_label("25 of 25 users").is_some());
}

#[tokio::test]
async fn test_role_label_is_capitalized() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();

    wait_for_load(harness).await;

    assert!(harness.query_all_by_label("Admin").count() > 0);
    assert_eq!(harness.query_all_by_label("admin").count(), 0);
}

#[tokio::test]
async fn test_next_and_previous_buttons_change_page() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    wait_for_load(harness).await;

    harness.get_by_label("Next").click();
    harness.run();

    assert_eq!(table_state(harness).current_page(), 2);
    assert!(harness.query_by_label("Page 2").is_some());
    assert!(harness.query_by_label("Zoé Simon").is_some());
    assert!(harness.query_by_label("Léa Martin").is_none());

    harness.get_by_label("Previous").click();
    harness.run();

    assert_eq!(table_state(harness).current_page(), 1);
    assert!(harness.query_by_label("Léa Martin").is_some());
}

#[tokio::test]
async fn test_previous_disabled_on_first_page() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    wait_for_load(harness).await;

    harness.get_by_label("Previous").click();
    harness.run();

    assert_eq!(table_state(harness).current_page(), 1);
}

#[tokio::test]
async fn test_next_disabled_on_last_page() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    wait_for_load(harness).await;

    for _ in 0..2 {
        harness.get_by_label("Next").click();
        harness.run();
    }
    assert_eq!(table_state(harness).current_page(), 3);

    harness.get_by_label("Next").click();
    harness.run();

    assert_eq!(table_state(harness).current_page(), 3);
    assert!(harness.query_by_label("Page 3").is_some());
    assert_eq!(harness.state().state.ctx.cached::<UserTableView>().rows.len(), 5);
}

#[tokio::test]
async fn test_search_filters_rows_and_resets_page() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    wait_for_load(harness).await;

    harness.get_by_label("Next").click();
    harness.run();

    harness.get_by_role(Role::TextInput).focus();
    harness.run();
    harness.get_by_role(Role::TextInput).type_text("ro");
    harness.run();

    assert_eq!(table_state(harness).search_term(), "ro");
    assert_eq!(table_state(harness).current_page(), 1);
    assert!(harness.query_by_label("Emma Robert").is_some());
    assert!(harness.query_by_label("Lucas Roux").is_some());
    assert!(harness.query_by_label("Léa Martin").is_none());
    assert!(harness.query_by_label("4 of 25 users").is_some());
}

#[tokio::test]
async fn test_search_without_match_shows_empty_state() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    wait_for_load(harness).await;

    update_table(harness, |state| state.search("nobody here"));

    assert!(harness.query_by_label("No users found").is_some());
    harness.get_by_label("Next").click();
    harness.run();
    assert_eq!(table_state(harness).current_page(), 1);
}

#[tokio::test]
async fn test_sort_indicator_follows_requests() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    wait_for_load(harness).await;

    assert!(harness.query_by_label("Name").is_some());

    update_table(harness, |state| state.request_sort(UserField::Name));
    assert!(harness.query_by_label("Name ▲").is_some());
    // "Adam David" sorts first.
    let view = harness.state().state.ctx.cached::<UserTableView>();
    assert_eq!(view.rows[0].name, "Adam David");

    update_table(harness, |state| state.request_sort(UserField::Name));
    assert!(harness.query_by_label("Name ▼").is_some());
    let view = harness.state().state.ctx.cached::<UserTableView>();
    assert_eq!(view.rows[0].name, "Zoé Simon");
}

#[tokio::test]
async fn test_row_and_header_controls_rendered() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    wait_for_load(harness).await;

    assert_eq!(harness.query_all_by_label("Edit").count(), 10);
    assert!(harness.query_by_label("Email").is_some());
    assert!(harness.query_by_label("Type").is_some());
    assert!(harness.query_by_label("Actions").is_some());
}

#[tokio::test]
async fn test_last_loaded_time_shown() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    wait_for_load(harness).await;

    assert!(table_state(harness).last_loaded().is_some());
    assert!(harness.query_by_label_contains("Last loaded at").is_some());
}
