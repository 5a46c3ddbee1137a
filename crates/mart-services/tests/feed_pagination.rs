//! Feed paging and the reach-end bridge against a paged backend double.

mod common;

use common::{goods_page, guess_backend};
use futures::future::join_all;
use mart_data::{FetchError, Method, MockTransport};
use mart_services::{FeedBridge, FeedState, LoadOutcome, MartClient};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const GUESS: &str = "/home/goods/guessLike";

// === Paging Tests ===

#[tokio::test]
async fn test_feed_walks_three_pages_then_stops() {
    let mock = guess_backend(3, 10);
    let feed = MartClient::new(mock.clone()).guess_feed();

    for expected_page in 1..=3 {
        let outcome = feed.load_next_page().await.unwrap();
        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                page: expected_page,
                appended: 10
            }
        );
    }
    assert_eq!(feed.state(), FeedState::Exhausted { page: 3 });

    assert_eq!(feed.load_next_page().await.unwrap(), LoadOutcome::Exhausted);
    assert_eq!(mock.call_count(Method::Get, GUESS), 3);

    let ids: Vec<String> = feed.items().into_iter().map(|g| g.id.into_inner()).collect();
    assert_eq!(ids.len(), 30);
    assert_eq!(ids.first().map(String::as_str), Some("g0"));
    assert_eq!(ids.last().map(String::as_str), Some("g29"));
}

#[tokio::test]
async fn test_requests_carry_page_and_size() {
    let mock = guess_backend(3, 10);
    let feed = MartClient::new(mock.clone()).guess_feed();
    feed.load_next_page().await.unwrap();
    feed.load_next_page().await.unwrap();

    let pages: Vec<_> = mock.calls().into_iter().map(|c| c.data).collect();
    assert_eq!(
        pages,
        [
            Some(json!({"page": 1, "pageSize": 10})),
            Some(json!({"page": 2, "pageSize": 10}))
        ]
    );
}

#[tokio::test]
async fn test_second_load_while_in_flight_makes_no_call() {
    let mock = guess_backend(3, 10);
    let feed = MartClient::new(mock.clone()).guess_feed();

    let (first, second) = tokio::join!(feed.load_next_page(), feed.load_next_page());
    assert!(first.unwrap().is_loaded());
    assert_eq!(second.unwrap(), LoadOutcome::Busy);
    assert_eq!(mock.call_count(Method::Get, GUESS), 1);
}

// === Bridge Tests ===

#[tokio::test]
async fn test_burst_of_reach_end_events_loads_one_page() {
    let mock = guess_backend(3, 10);
    let (feed, bridge) = MartClient::new(mock.clone()).mounted_guess_feed();
    bridge.on_reach_end().await.unwrap();
    assert_eq!(feed.len(), 10);

    let outcomes = join_all((0..5).map(|_| bridge.on_reach_end())).await;

    let loaded = outcomes
        .iter()
        .filter(|o| matches!(o, Ok(LoadOutcome::Loaded { page: 2, .. })))
        .count();
    assert_eq!(loaded, 1);
    assert_eq!(mock.call_count(Method::Get, GUESS), 2);
    assert_eq!(feed.len(), 20);
}

#[tokio::test]
async fn test_bridge_before_mount_then_after() {
    let mock = guess_backend(1, 10);
    let client = MartClient::new(mock.clone());
    let bridge = FeedBridge::new();

    assert_eq!(bridge.on_reach_end().await.unwrap(), LoadOutcome::Unmounted);
    assert_eq!(mock.total_calls(), 0);

    let feed = Arc::new(client.guess_feed());
    bridge.register(feed.clone());
    bridge.on_reach_end().await.unwrap();
    assert_eq!(bridge.on_reach_end().await.unwrap(), LoadOutcome::Exhausted);
    assert_eq!(feed.len(), 10);
}

// === Failure Tests ===

#[tokio::test]
async fn test_transport_failure_keeps_last_good_page() {
    let down = Arc::new(AtomicBool::new(false));
    let flag = down.clone();
    let mock = Arc::new(MockTransport::new().on(Method::Get, GUESS, move |spec| {
        if flag.load(Ordering::SeqCst) {
            return Err(FetchError::Transport("network unreachable".into()));
        }
        let page = spec.field("page").and_then(|p| p.as_u64()).unwrap_or(1) as u32;
        Ok(goods_page(page, 10, 3))
    }));
    let (feed, bridge) = MartClient::new(mock.clone()).mounted_guess_feed();

    bridge.on_reach_end().await.unwrap();
    down.store(true, Ordering::SeqCst);

    let err = bridge.on_reach_end().await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(feed.state(), FeedState::Loaded { page: 1, total_pages: 3 });
    assert_eq!(feed.len(), 10);

    down.store(false, Ordering::SeqCst);
    assert_eq!(
        bridge.on_reach_end().await.unwrap(),
        LoadOutcome::Loaded { page: 2, appended: 10 }
    );
    let pages: Vec<_> = mock
        .calls()
        .iter()
        .filter_map(|c| c.field("page").and_then(|p| p.as_u64()))
        .collect();
    assert_eq!(pages, [1, 2, 2]);
}

#[tokio::test]
async fn test_reset_starts_over() {
    let mock = guess_backend(2, 10);
    let feed = MartClient::new(mock).guess_feed();
    feed.load_next_page().await.unwrap();
    feed.load_next_page().await.unwrap();

    feed.reset();
    assert_eq!(feed.state(), FeedState::Idle);
    assert!(feed.is_empty());
    assert_eq!(
        feed.load_next_page().await.unwrap(),
        LoadOutcome::Loaded { page: 1, appended: 10 }
    );
}

// === Hot List Tests ===

#[tokio::test]
async fn test_hot_feed_pages_one_tab() {
    let mock = Arc::new(MockTransport::new().on(Method::Get, "/hot/preference", |spec| {
        let page = spec.field("page").and_then(|p| p.as_u64()).unwrap_or(1) as u32;
        let sub_type = spec.field("subType").cloned().unwrap_or_default();
        Ok(json!({
            "id": "1",
            "title": "特惠推荐",
            "bannerPicture": "b.png",
            "subTypes": [{
                "id": sub_type,
                "title": "抢先尝鲜",
                "goodsItems": goods_page(page, 10, 2)
            }]
        }))
    }));
    let feed = MartClient::new(mock.clone()).hot_feed("/hot/preference", "912000341");

    feed.load_next_page().await.unwrap();
    feed.load_next_page().await.unwrap();
    assert_eq!(feed.len(), 20);
    assert!(!feed.has_more());
    assert_eq!(
        mock.calls()[1].data,
        Some(json!({"page": 2, "pageSize": 10, "subType": "912000341"}))
    );
}

#[tokio::test]
async fn test_hot_feed_missing_tab_is_an_error() {
    let mock = Arc::new(MockTransport::new().respond(
        Method::Get,
        "/hot/new",
        json!({"id": "4", "title": "新鲜好物", "subTypes": []}),
    ));
    let feed = MartClient::new(mock).hot_feed("/hot/new", "missing");

    assert!(feed.load_next_page().await.is_err());
    assert_eq!(feed.state(), FeedState::Idle);
}
