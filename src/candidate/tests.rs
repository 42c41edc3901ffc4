use super::*;
use crate::listing::Listing;

fn listings(n: usize) -> Vec<Listing> {
    (0..n)
        .map(|i| {
            Listing::new(
                format!("商品{}", i),
                1000 * (i as u64 + 1),
                "新品、未使用",
                format!("https://jp.mercari.com/item/m{}", i),
            )
        })
        .collect()
}

fn evaluation(titles: usize, levels: usize, reasons: usize) -> Evaluation {
    Evaluation {
        titles_translated: (0..titles).map(|i| format!("Item {}", i)).collect(),
        match_levels: (0..levels).map(|_| "Good match".to_string()).collect(),
        match_reasons: (0..reasons).map(|i| format!("reason {}", i)).collect(),
    }
}

#[test]
fn test_align_zips_in_order() {
    let batch = CandidateBatch::align(listings(3), evaluation(3, 3, 3)).unwrap();

    assert_eq!(batch.len(), 3);
    for (i, candidate) in batch.iter().enumerate() {
        assert_eq!(candidate.listing.title_native, format!("商品{}", i));
        assert_eq!(candidate.title_translated, format!("Item {}", i));
        assert_eq!(candidate.match_reason, format!("reason {}", i));
    }
}

#[test]
fn test_align_rejects_short_titles() {
    let err = CandidateBatch::align(listings(3), evaluation(2, 3, 3)).unwrap_err();
    assert_eq!(
        err,
        AlignmentError::LengthMismatch {
            field: "titles_translated",
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn test_align_rejects_long_match_levels() {
    let err = CandidateBatch::align(listings(2), evaluation(2, 3, 2)).unwrap_err();
    assert!(matches!(
        err,
        AlignmentError::LengthMismatch {
            field: "match_levels",
            ..
        }
    ));
}

#[test]
fn test_align_rejects_missing_reasons() {
    let err = CandidateBatch::align(listings(2), evaluation(2, 2, 0)).unwrap_err();
    assert!(err.to_string().contains("match_reasons"));
}

#[test]
fn test_align_empty_batch() {
    let batch = CandidateBatch::align(vec![], Evaluation::default()).unwrap();
    assert!(batch.is_empty());
    assert!(batch.titles_translated().is_empty());
}

#[test]
fn test_titles_translated_follow_batch_order() {
    let batch = CandidateBatch::align(listings(2), evaluation(2, 2, 2)).unwrap();
    assert_eq!(batch.titles_translated(), vec!["Item 0", "Item 1"]);
}

#[test]
fn test_evaluation_accepts_titles_en_alias() {
    let json = r#"{
        "titles_en": ["Sony WH-1000XM4"],
        "match_levels": ["Excellent match"],
        "match_reasons": ["Exact model, black, new"]
    }"#;

    let evaluation: Evaluation = serde_json::from_str(json).unwrap();
    assert_eq!(evaluation.titles_translated, vec!["Sony WH-1000XM4"]);
}
