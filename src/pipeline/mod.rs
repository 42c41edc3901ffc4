//! Recommendation orchestration.
//!
//! [`Recommender`] is the in-process core: normalize, align, score and select for one
//! request. [`RecommendationPipeline`] wraps it with the external collaborators
//! (extraction, retrieval, evaluation) behind narrow traits, and [`RecordedSession`]
//! replays captured collaborator output for offline runs.

pub mod collaborators;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod recommender;
pub mod recorded;
pub mod report;
pub mod runner;


pub use collaborators::{ListingEvaluator, ListingRetriever, SearchExtractor};
pub use error::{CollaboratorError, PipelineError, SessionError};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockEvaluator, MockExtractor, MockRetriever};
pub use recommender::Recommender;
pub use recorded::RecordedSession;
pub use report::RecommendationReport;
pub use runner::RecommendationPipeline;
