//! End-to-end pipeline tests against an in-memory bucket.

use crate::common::InMemoryBucket;
use bt_error::BtError;
use bt_lister::{Browser, FetchConfig, FilterConfig, MatchAllFilter};
use bt_tree::{RenderEvent, TreeView, build_tree, render_view};

fn trace(view: &TreeView<'_>) -> Vec<String> {
    view.events()
        .iter()
        .map(|event| match event {
            RenderEvent::FolderStart { name, .. } => format!("+{name}"),
            RenderEvent::File { entry } => entry.name().to_string(),
            RenderEvent::FolderEnd { .. } => "-".to_string(),
        })
        .collect()
}

fn browser(bucket: InMemoryBucket) -> Browser<InMemoryBucket, bt_lister::CompositeFilter> {
    let filter = FilterConfig::default().build_filter().unwrap();
    Browser::new(bucket, filter, FetchConfig::default())
}

#[tokio::test]
async fn test_nested_key_renders_folder_chain() {
    let browse = browser(InMemoryBucket::new(10).with_objects(&["a/b/c.png"]))
        .browse(&[])
        .await
        .unwrap();

    let view = render_view(&browse.root);
    assert_eq!(trace(&view), vec!["+a", "+b", "c.png", "-", "-"]);

    let RenderEvent::FolderStart { path, depth, .. } = &view.events()[1] else {
        panic!("expected folder header");
    };
    assert_eq!(*path, "/a/b");
    assert_eq!(*depth, 1);
}

#[tokio::test]
async fn test_default_filters_drop_site_files() {
    let bucket =
        InMemoryBucket::new(10).with_objects(&["x.png", "index.html", "images/y.png"]);

    let browse = browser(bucket).browse(&[]).await.unwrap();

    assert_eq!(trace(&render_view(&browse.root)), vec!["x.png"]);
    assert_eq!(browse.stats.entries_filtered, 2);
}

#[tokio::test]
async fn test_pagination_across_many_pages() {
    let keys: Vec<String> = (0..25).map(|i| format!("photos/{i:03}.png")).collect();
    let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    let bucket = InMemoryBucket::new(10).with_objects(&refs);

    let browser = browser(bucket);
    let browse = browser.browse(&[]).await.unwrap();

    assert_eq!(browse.stats.pages_fetched, 3);
    assert_eq!(browse.root.total_files(), 25);

    let requests = browser.fetcher().transport().requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0], (None, None));
    assert_eq!(requests[1].1.as_deref(), Some("photos/009.png"));
    assert_eq!(requests[2].1.as_deref(), Some("photos/019.png"));
}

#[tokio::test]
async fn test_two_pages_request_second_with_marker() {
    let bucket = InMemoryBucket::new(2).with_objects(&["k1", "k2", "k3"]);
    let browser = Browser::new(bucket, MatchAllFilter, FetchConfig::default());

    let browse = browser.browse(&[]).await.unwrap();

    assert_eq!(
        browser.fetcher().transport().requests(),
        vec![(None, None), (None, Some("k2".to_string()))]
    );
    let names: Vec<&str> = browse.root.files().map(|e| e.key()).collect();
    assert_eq!(names, vec!["k1", "k2", "k3"]);
}

#[tokio::test]
async fn test_prefix_completion_order_does_not_change_tree() {
    let keys = ["p1/a.png", "p1/b.png", "p2/c.png", "p2/d/e.png"];

    let slow_first = InMemoryBucket::new(10)
        .with_objects(&keys)
        .with_slow_prefix("p1/", 40);
    let slow_second = InMemoryBucket::new(10)
        .with_objects(&keys)
        .with_slow_prefix("p2/", 40);

    let prefixes = vec!["p1/".to_string(), "p2/".to_string()];
    let first = browser(slow_first).browse(&prefixes).await.unwrap();
    let second = browser(slow_second).browse(&prefixes).await.unwrap();

    // Top-level folder order follows arrival, contents do not
    let a = first.root.find_folder("p1").unwrap();
    let b = second.root.find_folder("p1").unwrap();
    assert_eq!(a, b);
    assert_eq!(first.root.find_folder("p2/d"), second.root.find_folder("p2/d"));
    assert_eq!(first.root.total_files(), 4);
    assert_eq!(second.root.total_files(), 4);
}

#[tokio::test]
async fn test_files_render_case_insensitive_descending() {
    let bucket = InMemoryBucket::new(10).with_objects(&["a.png", "B.png", "c.png"]);

    let browse = browser(bucket).browse(&[]).await.unwrap();

    assert_eq!(
        trace(&render_view(&browse.root)),
        vec!["c.png", "B.png", "a.png"]
    );
}

#[tokio::test]
async fn test_everything_filtered_gives_empty_view() {
    let bucket = InMemoryBucket::new(10).with_objects(&["index.html", "app.js", "fonts/x.woff"]);

    let browse = browser(bucket).browse(&[]).await.unwrap();

    assert!(render_view(&browse.root).is_empty());
    assert_eq!(browse.stats.entries_kept, 0);
}

#[tokio::test]
async fn test_failure_on_second_page_yields_nothing() {
    let bucket = InMemoryBucket::new(1)
        .with_objects(&["a.png", "b.png"])
        .failing_after("a.png");

    let result = browser(bucket).browse(&[]).await;

    assert!(matches!(result, Err(BtError::Transport(_))));
}

#[tokio::test]
async fn test_failure_in_one_prefix_fails_all() {
    let bucket = InMemoryBucket::new(1)
        .with_objects(&["ok/a.png", "bad/a.png", "bad/b.png"])
        .failing_after("bad/a.png");

    let result = browser(bucket)
        .browse(&["ok/".to_string(), "bad/".to_string()])
        .await;

    let error = result.unwrap_err();
    assert!(error.is_fetch_failure());
}

#[tokio::test]
async fn test_tree_matches_direct_build() {
    let keys = ["z/1.png", "a/2.png", "z/y/3.png", "top.png"];
    let bucket = InMemoryBucket::new(3).with_objects(&keys);

    let browse = Browser::new(bucket, MatchAllFilter, FetchConfig::default())
        .browse(&[])
        .await
        .unwrap();

    // The in-memory bucket lists in key order
    let mut sorted = keys.to_vec();
    sorted.sort();
    let direct = build_tree(sorted.iter().map(|key| {
        bt_types::Entry::new(
            *key,
            bt_types::parse_timestamp("2020-09-13T12:26:40.000Z").unwrap(),
            "\"etag\"",
            100,
        )
        .unwrap()
    }));

    assert_eq!(browse.root, direct);
}
