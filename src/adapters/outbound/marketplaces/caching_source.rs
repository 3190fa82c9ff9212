use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::ports::outbound::{ReviewSource, ReviewSubject};
use crate::shared::Result;
use crate::trust_scoring::domain::{Platform, Review};

/// Cache key for collected reviews. Reviews belong to a product listing,
/// so the key is the listing identity rather than our internal product id,
/// which changes on every analysis.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    name: String,
    url: Option<String>,
}

impl CacheKey {
    fn new(subject: &ReviewSubject) -> Self {
        Self {
            name: subject.name.to_lowercase(),
            url: subject.url.clone(),
        }
    }
}

/// CachingReviewSource wraps a ReviewSource and adds in-memory caching.
///
/// This adapter implements the decorator pattern to add caching capability
/// to any ReviewSource implementation. The cache is thread-safe and
/// suitable for concurrent access.
///
/// A cache hit re-attributes the stored reviews to the product currently
/// being analyzed and gives them fresh review ids, so storage never sees
/// duplicate keys when the same listing is analyzed twice.
pub struct CachingReviewSource<S: ReviewSource> {
    inner: S,
    cache: Arc<DashMap<CacheKey, Vec<Review>>>,
}

impl<S: ReviewSource> CachingReviewSource<S> {
    /// Creates a new caching source wrapping the given inner source
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn reattribute(cached: &[Review], subject: &ReviewSubject) -> Vec<Review> {
        cached
            .iter()
            .map(|review| {
                let mut review = review.clone();
                review.id = Uuid::new_v4();
                review.product_id = subject.product_id;
                review
            })
            .collect()
    }
}

#[async_trait]
impl<S: ReviewSource> ReviewSource for CachingReviewSource<S> {
    fn platform(&self) -> Platform {
        self.inner.platform()
    }

    async fn fetch_reviews(&self, subject: &ReviewSubject) -> Result<Vec<Review>> {
        let key = CacheKey::new(subject);

        // Check cache first
        if let Some(cached) = self.cache.get(&key) {
            return Ok(Self::reattribute(&cached, subject));
        }

        // Cache miss: collect from the inner source
        let reviews = self.inner.fetch_reviews(subject).await?;

        // Only successful lookups are cached; a failing marketplace gets
        // retried on the next analysis.
        self.cache.insert(key, reviews.clone());

        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock source for testing that tracks call counts
    struct CountingSource {
        call_count: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReviewSource for CountingSource {
        fn platform(&self) -> Platform {
            Platform::Amazon
        }

        async fn fetch_reviews(&self, subject: &ReviewSubject) -> Result<Vec<Review>> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("marketplace down");
            }
            Ok(vec![Review {
                id: Uuid::new_v4(),
                product_id: subject.product_id,
                author: "A".to_string(),
                rating: crate::trust_scoring::domain::Rating::new(4).unwrap(),
                title: "T".to_string(),
                content: "C".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                verified: true,
                platform: Platform::Amazon,
            }])
        }
    }

    fn subject_named(name: &str) -> ReviewSubject {
        ReviewSubject {
            product_id: Uuid::new_v4(),
            name: name.to_string(),
            url: None,
        }
    }

    #[tokio::test]
    async fn test_second_lookup_hits_the_cache() {
        let source = CachingReviewSource::new(CountingSource::new(false));

        source.fetch_reviews(&subject_named("Lamp")).await.unwrap();
        source.fetch_reviews(&subject_named("Lamp")).await.unwrap();

        assert_eq!(source.inner.calls(), 1);
        assert_eq!(source.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_cache_key_ignores_name_case() {
        let source = CachingReviewSource::new(CountingSource::new(false));

        source.fetch_reviews(&subject_named("Lamp")).await.unwrap();
        source.fetch_reviews(&subject_named("LAMP")).await.unwrap();

        assert_eq!(source.inner.calls(), 1);
    }

    #[tokio::test]
    async fn test_different_listings_miss_the_cache() {
        let source = CachingReviewSource::new(CountingSource::new(false));

        source.fetch_reviews(&subject_named("Lamp")).await.unwrap();
        source.fetch_reviews(&subject_named("Kettle")).await.unwrap();

        assert_eq!(source.inner.calls(), 2);
    }

    #[tokio::test]
    async fn test_cache_hit_reattributes_ownership() {
        let source = CachingReviewSource::new(CountingSource::new(false));

        let first = subject_named("Lamp");
        let second = subject_named("Lamp");
        let original = source.fetch_reviews(&first).await.unwrap();
        let cached = source.fetch_reviews(&second).await.unwrap();

        assert_eq!(cached[0].product_id, second.product_id);
        assert_ne!(cached[0].product_id, original[0].product_id);
        assert_ne!(cached[0].id, original[0].id);
        assert_eq!(cached[0].content, original[0].content);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let source = CachingReviewSource::new(CountingSource::new(true));

        assert!(source.fetch_reviews(&subject_named("Lamp")).await.is_err());
        assert!(source.fetch_reviews(&subject_named("Lamp")).await.is_err());

        assert_eq!(source.inner.calls(), 2);
        assert_eq!(source.cache_size(), 0);
    }
}
