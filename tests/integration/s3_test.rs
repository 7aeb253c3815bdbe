//! S3 transport tests using LocalStack.

use crate::common::LocalStackTestContext;
use bt_error::BtError;
use bt_lister::s3::{RetryConfig, S3Config, S3Transport, create_s3_client};
use bt_lister::{Browser, FetchConfig, FilterConfig};
use bt_traits::ListingTransport;
use bt_tree::render_view;

async fn transport(ctx: &LocalStackTestContext, bucket: &str, anonymous: bool) -> S3Transport {
    let config = S3Config::new(bucket)
        .with_endpoint(&ctx.endpoint)
        .with_region(&ctx.region)
        .with_anonymous(anonymous);
    let client = create_s3_client(&config).await.unwrap();
    S3Transport::new(client, bucket).with_retry(RetryConfig::disabled())
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_browse_bucket_with_pagination() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bt-browse-pages";
    ctx.fresh_bucket(bucket).await.unwrap();
    for key in [
        "index.html",
        "images/logo.png",
        "photos/2020/a.png",
        "photos/2020/b.png",
        "photos/2021/c.png",
        "photos/readme.txt",
        "videos/",
        "videos/clip.mp4",
    ] {
        ctx.put(bucket, key, 16).await.unwrap();
    }

    let transport = transport(&ctx, bucket, false).await.with_page_size(2);
    let filter = FilterConfig::default().build_filter().unwrap();
    let browser = Browser::new(transport, filter, FetchConfig::default());

    let browse = browser.browse(&[]).await.unwrap();

    assert!(browse.stats.pages_fetched >= 4);
    assert_eq!(browse.stats.entries_kept, 5);
    assert!(browse.root.find_folder("photos/2020").is_some());
    assert!(browse.root.find_folder("videos").is_some());
    assert!(!render_view(&browse.root).is_empty());
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_list_single_prefix_page() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bt-browse-prefix";
    ctx.fresh_bucket(bucket).await.unwrap();
    ctx.put(bucket, "a/one.png", 1).await.unwrap();
    ctx.put(bucket, "a/two.png", 2).await.unwrap();
    ctx.put(bucket, "b/three.png", 3).await.unwrap();

    let transport = transport(&ctx, bucket, false).await;
    let page = transport.list(Some("a/"), None).await.unwrap();

    assert!(!page.truncated);
    assert!(page.next_marker.is_none());
    let keys: Vec<&str> = page.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["a/one.png", "a/two.png"]);
    assert_eq!(page.entries[1].size, 2);
    assert_eq!(transport.description(), "s3://bt-browse-prefix");
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_anonymous_listing_of_public_bucket() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bt-browse-public";
    ctx.fresh_bucket(bucket).await.unwrap();
    ctx.make_public(bucket).await.unwrap();
    ctx.put(bucket, "public/file.txt", 8).await.unwrap();

    let transport = transport(&ctx, bucket, true).await;
    let page = transport.list(None, None).await.unwrap();

    assert_eq!(page.entries.len(), 1);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_missing_bucket_is_transport_error() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let transport = transport(&ctx, "bt-browse-does-not-exist", false).await;
    let result = transport.list(None, None).await;

    assert!(matches!(result, Err(BtError::Transport(_))));
}
