//! # Collection Pipeline Tests
//!
//! Tests for `collect` and `harvest` using a scripted in-memory feed source.

use promptfeed::constants::MAX_PROMPTS;
use promptfeed::{collect, harvest, FeedItem};
use promptfeed_test_utils::{content_item, titled_item, MockFeedSource};

const SOURCE_A: &str = "https://feeds.test/a";
const SOURCE_B: &str = "https://feeds.test/b";
const SOURCE_C: &str = "https://feeds.test/c";

#[tokio::test]
async fn test_end_to_end_with_failing_source() {
    // --- Arrange ---
    let fetcher = MockFeedSource::new()
        .with_items(
            SOURCE_A,
            vec![titled_item(
                "Prompt: cyberpunk city skyline, neon, rain, highly detailed",
            )],
        )
        .with_fetch_failure(SOURCE_B, "connection reset")
        .with_items(
            SOURCE_C,
            vec![content_item(
                "look at this\n```a neon koi pond under the moon```",
                "My render",
            )],
        );

    // --- Act ---
    let document = harvest(&[SOURCE_A, SOURCE_B, SOURCE_C], &fetcher).await;

    // --- Assert ---
    assert_eq!(
        document.prompts,
        vec![
            "cyberpunk city skyline, neon, rain, highly detailed",
            "a neon koi pond under the moon",
        ]
    );
    assert_eq!(fetcher.get_calls(), vec![SOURCE_A, SOURCE_B, SOURCE_C]);
}

#[tokio::test]
async fn test_all_sources_failing_yields_empty() {
    let fetcher = MockFeedSource::new()
        .with_fetch_failure(SOURCE_A, "timeout")
        .with_parse_failure(SOURCE_B, "not xml");

    let candidates = collect(&[SOURCE_A, SOURCE_B, SOURCE_C], &fetcher).await;

    assert!(candidates.is_empty());
    assert_eq!(fetcher.get_calls().len(), 3);
}

#[tokio::test]
async fn test_collect_keeps_duplicates_in_source_then_item_order() {
    // --- Arrange ---
    let shared = "Prompt: ancient library lit by floating candles";
    let fetcher = MockFeedSource::new()
        .with_items(
            SOURCE_A,
            vec![
                titled_item(shared),
                titled_item("Prompt: clockwork owl perched on a brass branch"),
            ],
        )
        .with_items(SOURCE_B, vec![titled_item(shared)]);

    // --- Act ---
    let candidates = collect(&[SOURCE_A, SOURCE_B], &fetcher).await;

    // --- Assert ---
    assert_eq!(
        candidates,
        vec![
            "ancient library lit by floating candles",
            "clockwork owl perched on a brass branch",
            "ancient library lit by floating candles",
        ]
    );
}

#[tokio::test]
async fn test_rich_content_takes_precedence_over_content() {
    let item = FeedItem {
        rich_content: Some("```an art deco train station in the rain```".to_string()),
        content: Some("```this plain body should be ignored entirely```".to_string()),
        snippet: None,
        title: Some("Weekend render".to_string()),
    };
    let fetcher = MockFeedSource::new().with_items(SOURCE_A, vec![item]);

    let candidates = collect(&[SOURCE_A], &fetcher).await;

    assert_eq!(candidates, vec!["an art deco train station in the rain"]);
}

#[tokio::test]
async fn test_harvest_caps_and_dedupes_across_sources() {
    // --- Arrange ---
    let many: Vec<FeedItem> = (0..40)
        .map(|i| titled_item(&format!("Prompt: generated scene variation number {i}")))
        .collect();
    let shouted: Vec<FeedItem> = (0..40)
        .map(|i| titled_item(&format!("PROMPT: GENERATED SCENE VARIATION NUMBER {i}")))
        .chain((40..80).map(|i| titled_item(&format!("Prompt: generated scene variation number {i}"))))
        .collect();
    let fetcher = MockFeedSource::new()
        .with_items(SOURCE_A, many)
        .with_items(SOURCE_B, shouted);

    // --- Act ---
    let document = harvest(&[SOURCE_A, SOURCE_B], &fetcher).await;

    // --- Assert ---
    assert_eq!(document.prompts.len(), MAX_PROMPTS);
    assert_eq!(document.prompts[0], "generated scene variation number 0");
    assert_eq!(document.prompts[39], "generated scene variation number 39");
    assert_eq!(document.prompts[40], "generated scene variation number 40");
    assert_eq!(
        document.prompts[MAX_PROMPTS - 1],
        "generated scene variation number 49"
    );
}
