//! Listing to document, through every sink.

use crate::common::InMemoryBucket;
use bt_lister::{Browser, FetchConfig, FilterConfig};
use bt_present::{HtmlSink, JsonSink, PresentationSink, TextSink};
use bt_tree::render_view;

async fn browse(keys: &[(&str, u64)]) -> bt_lister::Browse {
    let mut bucket = InMemoryBucket::new(2);
    for (key, size) in keys {
        bucket = bucket.with_object(key, *size);
    }
    let filter = FilterConfig::default().build_filter().unwrap();
    Browser::new(bucket, filter, FetchConfig::default())
        .browse(&[])
        .await
        .unwrap()
}

#[tokio::test]
async fn test_html_document() {
    let browse = browse(&[
        ("index.html", 10),
        ("gallery/summer/beach & sun.png", 3 * 1024 * 1024),
        ("gallery/cat.png", 2048),
    ])
    .await;

    let html = HtmlSink::new("https://media.example.com")
        .present(&render_view(&browse.root))
        .unwrap();

    assert!(html.contains("data-toggle-folder=\"/gallery\""));
    assert!(html.contains("data-folder=\"/gallery/summer\""));
    assert!(html.contains("<div class=\"ib-size\">2 items</div>"));
    assert!(html.contains(
        "<a href=\"https://media.example.com/gallery/summer/beach%20%26%20sun.png\">beach &amp; sun.png</a>"
    ));
    assert!(html.contains("<div class=\"ib-size\">3.00 MB</div>"));
    assert!(html.contains("<div class=\"ib-modified\">13.09.2020, 12:26:40</div>"));
    assert!(!html.contains("index.html"));

    // Subfolder rows come before the folder's own files
    let summer = html.find("data-toggle-folder=\"/gallery/summer\"").unwrap();
    let cat = html.find(">cat.png<").unwrap();
    assert!(summer < cat);
}

#[tokio::test]
async fn test_html_placeholder_when_nothing_left() {
    let browse = browse(&[("index.html", 10), ("favicon.ico", 1)]).await;

    let html = HtmlSink::default()
        .present(&render_view(&browse.root))
        .unwrap();

    assert!(html.contains("<div class=\"text-center p-3\"><b>No content available.</b></div>"));
}

#[tokio::test]
async fn test_text_document() {
    let browse = browse(&[("docs/a.pdf", 512), ("docs/B.pdf", 1024)]).await;

    let text = TextSink::new()
        .with_time_format("%Y-%m-%d")
        .present(&render_view(&browse.root))
        .unwrap();

    assert_eq!(
        text,
        "docs/ (2 items)\n  B.pdf  1 KB  2020-09-13\n  a.pdf  512 B  2020-09-13\n"
    );
}

#[tokio::test]
async fn test_json_document() {
    let browse = browse(&[("a/b.png", 7)]).await;

    let json = JsonSink::compact()
        .present(&render_view(&browse.root))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["empty"], false);
    assert_eq!(value["events"][0]["name"], "a");
    assert_eq!(value["events"][1]["entry"]["key"], "a/b.png");
    assert_eq!(value["events"][1]["entry"]["size"], 7);
}
