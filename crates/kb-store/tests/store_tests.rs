mod common;

use common::{harness, loaded_harness};

use kb_core::{BoardGateway, ColumnSpec};

use googletest::prelude::*;

#[tokio::test]
async fn given_new_store_when_constructed_then_it_is_loading_and_empty() {
    let h = harness();

    assert_that!(h.store.is_loading(), eq(true));
    assert_that!(h.store.is_updating(), eq(false));
    assert_that!(h.store.boards(), is_empty());
    assert_that!(h.store.current_board(), none());
}

#[tokio::test]
async fn given_boards_when_first_refreshing_then_first_board_is_selected() {
    let mut h = harness();
    h.gateway
        .create_board("Alpha", &[ColumnSpec::new("Todo")])
        .await
        .unwrap();
    h.gateway
        .create_board("Beta", &[ColumnSpec::new("Todo")])
        .await
        .unwrap();

    h.store.refresh_boards().await;

    assert_that!(h.store.boards(), len(eq(2)));
    assert_that!(
        h.store.current_board().map(|b| b.name.as_str()),
        some(eq("Alpha"))
    );
    assert_that!(h.store.is_loading(), eq(false));
    assert_that!(h.store.is_updating(), eq(false));
}

#[tokio::test]
async fn given_empty_gateway_when_refreshing_then_selection_clears() {
    let mut h = harness();

    h.store.refresh_boards().await;

    assert_that!(h.store.boards(), is_empty());
    assert_that!(h.store.current_board(), none());
    assert_that!(h.store.last_error(), none());
}

#[tokio::test]
async fn given_renamed_board_when_refreshing_then_selection_follows_id() {
    let mut h = loaded_harness().await;
    let id = h.store.current_board().unwrap().id;

    // Another client renames the board behind the store's back.
    h.gateway
        .update_board(
            id,
            kb_core::BoardUpdate {
                name: Some("Platform v2".to_string()),
            },
        )
        .await
        .unwrap();
    h.store.refresh_boards().await;

    let current = h.store.current_board().unwrap();
    assert_that!(current.id, eq(id));
    assert_that!(current.name.as_str(), eq("Platform v2"));
}

#[tokio::test]
async fn given_deleted_selected_board_when_refreshing_then_first_remaining_is_selected() {
    let mut h = loaded_harness().await;
    h.gateway
        .create_board("Second", &[ColumnSpec::new("Todo")])
        .await
        .unwrap();
    h.store.refresh_boards().await;
    let first_id = h.store.current_board().unwrap().id;

    h.gateway.delete_board(first_id).await.unwrap();
    h.store.refresh_boards().await;

    assert_that!(
        h.store.current_board().map(|b| b.name.as_str()),
        some(eq("Second"))
    );
}

#[tokio::test]
async fn given_failing_gateway_when_refreshing_then_prior_snapshot_survives() {
    let mut h = loaded_harness().await;
    let before = h.store.boards().to_vec();

    h.gateway.fail_on("get_boards");
    h.store.refresh_boards().await;

    assert_that!(h.store.boards().len(), eq(before.len()));
    assert_that!(h.store.last_error(), some(anything()));
    assert_that!(h.store.is_loading(), eq(false));
    assert_that!(h.store.is_updating(), eq(false));
}

#[tokio::test]
async fn given_recorded_error_when_refresh_succeeds_then_error_clears() {
    let mut h = loaded_harness().await;
    h.gateway.fail_on("get_boards");
    h.store.refresh_boards().await;
    assert_that!(h.store.last_error(), some(anything()));

    h.gateway.heal();
    h.store.refresh_boards().await;

    assert_that!(h.store.last_error(), none());
}

#[tokio::test]
async fn given_other_board_when_set_current_then_selection_is_replaced() {
    let mut h = loaded_harness().await;
    let other = h
        .gateway
        .create_board("Side project", &[ColumnSpec::new("Todo")])
        .await
        .unwrap();

    h.store.set_current_board(other.clone());

    assert_that!(h.store.current_board().map(|b| b.id), some(eq(other.id)));
}
