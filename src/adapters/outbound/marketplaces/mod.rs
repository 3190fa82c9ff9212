/// Marketplace adapters implementing the ReviewSource port
mod caching_source;
mod sample_feed;

pub use caching_source::CachingReviewSource;
pub use sample_feed::SampleReviewFeed;

use crate::ports::outbound::ReviewSource;
use crate::trust_scoring::domain::Platform;
use std::sync::Arc;

/// One caching sample feed per supported marketplace.
///
/// This is the source set the service runs with until real marketplace
/// integrations exist; it exercises the same fan-out, caching and
/// failure paths those integrations will use.
pub fn sample_sources() -> Vec<Arc<dyn ReviewSource>> {
    Platform::ALL
        .into_iter()
        .map(|platform| {
            Arc::new(CachingReviewSource::new(SampleReviewFeed::new(platform)))
                as Arc<dyn ReviewSource>
        })
        .collect()
}
