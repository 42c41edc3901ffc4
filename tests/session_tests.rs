//! Replaying recorded sessions through the full pipeline.

mod common;

use std::fs;
use std::sync::Arc;

use marketpick::embedding::MiniLmEmbedder;
use marketpick::pipeline::{
    MockEvaluator, MockExtractor, MockRetriever, PipelineError, RecommendationPipeline,
    RecommendationReport, RecordedSession, Recommender,
};
use marketpick::search::SearchParams;

use common::fixtures::{MATCH_LEVELS, evaluation_with_levels, half_similarity_embedder, listings_at};

fn session(prices: &[u64]) -> RecordedSession {
    let levels: Vec<&str> = MATCH_LEVELS.iter().cycle().take(prices.len()).copied().collect();
    RecordedSession {
        request: "request".to_string(),
        search: SearchParams {
            keywords_en: vec!["camera".to_string()],
            keywords_ja: vec!["カメラ".to_string()],
            ..Default::default()
        },
        listings: listings_at(prices),
        evaluation: evaluation_with_levels(&levels),
    }
}

#[test]
fn test_session_file_round_trip_through_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, serde_json::to_string(&session(&[1000, 2000, 3000, 4000])).unwrap())
        .unwrap();

    let recorded = Arc::new(RecordedSession::from_path(&path).unwrap());
    let pipeline = RecommendationPipeline::new(
        Arc::clone(&recorded),
        Arc::clone(&recorded),
        Arc::clone(&recorded),
        Recommender::new(half_similarity_embedder()),
    );

    let report = pipeline.run(&recorded.request).unwrap();

    assert_eq!(report.candidate_count, 4);
    let titles: Vec<&str> = report
        .recommendations
        .iter()
        .map(|r| r.title_translated.as_str())
        .collect();
    assert_eq!(titles, vec!["Item 0", "Item 1", "Item 2"]);

    let json = report.to_json_pretty().unwrap();
    let parsed: RecommendationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_recorded_evaluation_follows_candidate_limit() {
    let recorded = Arc::new(session(&[500, 400, 300, 200, 100, 50]));
    let pipeline = RecommendationPipeline::new(
        Arc::clone(&recorded),
        Arc::clone(&recorded),
        Arc::clone(&recorded),
        Recommender::new(MiniLmEmbedder::stub().unwrap()),
    )
    .with_max_candidates(4);

    let report = pipeline.run("request").unwrap();

    assert_eq!(report.candidate_count, 4);
    assert!(
        report
            .recommendations
            .iter()
            .all(|r| r.listing.price >= 200)
    );
}

#[test]
fn test_pipeline_with_mock_collaborators() {
    let retriever = Arc::new(MockRetriever::new(listings_at(&[1200, 900])));
    let evaluator = Arc::new(MockEvaluator::echo("Excellent match"));
    let pipeline = RecommendationPipeline::new(
        MockExtractor::new(session(&[]).search),
        Arc::clone(&retriever),
        Arc::clone(&evaluator),
        Recommender::new(half_similarity_embedder()),
    )
    .with_search_base_url("http://localhost:8080/search");

    let report = pipeline.run("request").unwrap();

    assert_eq!(evaluator.call_count(), 1);
    assert_eq!(evaluator.seen_titles(), vec!["商品0", "商品1"]);
    assert_eq!(report.recommendations[0].title_translated, "商品1");
    assert!(retriever.requested_urls()[0].starts_with("http://localhost:8080/search?"));
}

#[test]
fn test_bad_search_base_url_is_search_error() {
    let recorded = Arc::new(session(&[1000]));
    let pipeline = RecommendationPipeline::new(
        Arc::clone(&recorded),
        Arc::clone(&recorded),
        Arc::clone(&recorded),
        Recommender::new(half_similarity_embedder()),
    )
    .with_search_base_url("::not a url::");

    let err = pipeline.run("request").unwrap_err();
    assert!(matches!(err, PipelineError::Search(_)));
}
