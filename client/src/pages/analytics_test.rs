use super::*;

use serde_json::json;

#[test]
fn sample_counts_cover_three_categories() {
    let sample = sample_category_counts();
    assert_eq!(sample.len(), 3);
    assert_eq!(sample[1], CategoryCount { category: "NSFW".to_owned(), count: 450 });
}

#[test]
fn extract_category_counts_reads_by_category_pairs() {
    let overview = json!({
        "total_flagged": 3,
        "by_category": [
            {"category": "Spam", "count": 2},
            {"category": "Hate Speech", "count": 1}
        ]
    });
    assert_eq!(
        extract_category_counts(&overview),
        vec![
            CategoryCount { category: "Spam".to_owned(), count: 2 },
            CategoryCount { category: "Hate Speech".to_owned(), count: 1 },
        ]
    );
}

#[test]
fn extract_category_counts_skips_malformed_entries() {
    let overview = json!({
        "by_category": [
            {"category": "Spam", "count": 2},
            {"category": "NSFW"},
            {"count": 7},
            "not-an-object"
        ]
    });
    assert_eq!(
        extract_category_counts(&overview),
        vec![CategoryCount { category: "Spam".to_owned(), count: 2 }]
    );
}

#[test]
fn extract_category_counts_missing_key_yields_empty() {
    assert!(extract_category_counts(&json!({"total_flagged": 0})).is_empty());
}

#[test]
fn extract_category_counts_non_array_yields_empty() {
    assert!(extract_category_counts(&json!({"by_category": "nope"})).is_empty());
}
