use async_trait::async_trait;
use chrono::{NaiveTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

use super::schema::{ProductRow, ReviewRow, CREATE_TABLES};
use crate::ports::outbound::{
    AnalyticsRepository, DashboardSnapshot, PlatformCount, ProductRepository, ReviewRepository,
};
use crate::shared::Result;
use crate::trust_scoring::domain::{Product, Review};

/// Upper bound on reviews returned for a single product.
const MAX_REVIEWS_RETURNED: u32 = 100;

/// SQLite adapter implementing the storage ports
///
/// One store owns one connection pool and implements `ProductRepository`,
/// `ReviewRepository` and `AnalyticsRepository` on top of it. The store
/// is `Clone`; clones share the pool.
///
/// # Async Support
/// All queries run through sqlx's async API on the shared pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens the database file, creating it and the schema if missing
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the schema
    /// statements fail.
    pub async fn connect(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Opens a private in-memory database
    ///
    /// Each connection to `sqlite::memory:` gets its own database, so
    /// the pool is capped at a single connection.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        for statement in CREATE_TABLES {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

const PRODUCT_COLUMNS: &str = "p.id, p.name, p.description, p.url, p.created_at, \
     s.overall_score, s.total_reviews, s.aspect_analysis, \
     s.summary, s.recommendation, s.updated_at";

#[async_trait]
impl ProductRepository for SqliteStore {
    async fn insert_analyzed(&self, product: &Product, reviews: &[Review]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO products (id, name, description, url, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.url.as_deref())
        .bind(product.created_at)
        .execute(&mut *tx)
        .await?;

        if let Some(score) = &product.trust_score {
            sqlx::query(
                "INSERT INTO trust_scores \
                 (product_id, overall_score, total_reviews, aspect_analysis, \
                  summary, recommendation, updated_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(score.product_id.to_string())
            .bind(score.overall_score)
            .bind(score.total_reviews as i64)
            .bind(serde_json::to_string(&score.aspect_analysis)?)
            .bind(&score.summary)
            .bind(&score.recommendation)
            .bind(score.updated_at)
            .execute(&mut *tx)
            .await?;
        }

        let stored_at = Utc::now();
        for review in reviews {
            sqlx::query(
                "INSERT INTO reviews \
                 (id, product_id, author, rating, title, content, \
                  review_date, verified, platform, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(review.id.to_string())
            .bind(review.product_id.to_string())
            .bind(&review.author)
            .bind(review.rating.stars() as i64)
            .bind(&review.title)
            .bind(&review.content)
            .bind(review.date)
            .bind(review.verified)
            .bind(review.platform.as_str())
            .bind(stored_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p \
             LEFT JOIN trust_scores s ON s.product_id = p.id \
             WHERE p.id = ?"
        );
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn list_recent(&self, limit: u32, offset: u32) -> Result<Vec<Product>> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p \
             LEFT JOIN trust_scores s ON s.product_id = p.id \
             ORDER BY p.created_at DESC, p.id \
             LIMIT ? OFFSET ?"
        );
        let rows = sqlx::query_as::<_, ProductRow>(&query)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    async fn count_products(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}

#[async_trait]
impl ReviewRepository for SqliteStore {
    async fn reviews_for_product(&self, product_id: &str) -> Result<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            "SELECT id, product_id, author, rating, title, content, \
                    review_date, verified, platform \
             FROM reviews \
             WHERE product_id = ? \
             ORDER BY review_date DESC, created_at DESC \
             LIMIT ?",
        )
        .bind(product_id)
        .bind(MAX_REVIEWS_RETURNED as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ReviewRow::into_review).collect()
    }
}

#[async_trait]
impl AnalyticsRepository for SqliteStore {
    async fn dashboard_snapshot(&self) -> Result<DashboardSnapshot> {
        let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        let total_reviews: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(&self.pool)
            .await?;
        let average_trust_score: Option<f64> =
            sqlx::query_scalar("SELECT AVG(overall_score) FROM trust_scores")
                .fetch_one(&self.pool)
                .await?;

        let platform_rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT platform, COUNT(*) AS count FROM reviews \
             GROUP BY platform \
             ORDER BY count DESC, platform ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let day_start = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();

        let products_analyzed_today: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE created_at >= ?")
                .bind(day_start)
                .fetch_one(&self.pool)
                .await?;
        let reviews_processed_today: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE created_at >= ?")
                .bind(day_start)
                .fetch_one(&self.pool)
                .await?;
        let trust_scores_updated_today: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM trust_scores WHERE updated_at >= ?")
                .bind(day_start)
                .fetch_one(&self.pool)
                .await?;

        Ok(DashboardSnapshot {
            total_products: total_products as u64,
            total_reviews: total_reviews as u64,
            average_trust_score: average_trust_score.unwrap_or(0.0),
            platform_distribution: platform_rows
                .into_iter()
                .map(|(platform, count)| PlatformCount {
                    platform,
                    count: count as u64,
                })
                .collect(),
            products_analyzed_today: products_analyzed_today as u64,
            reviews_processed_today: reviews_processed_today as u64,
            trust_scores_updated_today: trust_scores_updated_today as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trust_scoring::domain::{
        Aspect, AspectAnalysis, Platform, ProductDraft, Rating, Sentiment, TrustScore,
    };
    use chrono::{Duration, NaiveDate};
    use uuid::Uuid;

    fn plain_product(name: &str) -> Product {
        Product::from_draft(ProductDraft::new(Some(name.to_string()), None, None).unwrap())
    }

    fn scored_product(name: &str, overall: f64) -> Product {
        let mut product = plain_product(name);
        product.trust_score = Some(TrustScore {
            product_id: product.id,
            overall_score: overall,
            total_reviews: 2,
            aspect_analysis: Aspect::ALL
                .into_iter()
                .map(|aspect| AspectAnalysis {
                    aspect,
                    score: overall,
                    sentiment: Sentiment::Neutral,
                    key_points: vec!["steady".to_string()],
                })
                .collect(),
            summary: "Mixed reviews overall.".to_string(),
            recommendation: "consider - reviews are mixed".to_string(),
            updated_at: Utc::now(),
        });
        product
    }

    fn review_for(product: &Product, stars: u8, platform: Platform, day: u32) -> Review {
        Review {
            id: Uuid::new_v4(),
            product_id: product.id,
            author: "Reviewer".to_string(),
            rating: Rating::new(stars).unwrap(),
            title: "Review title".to_string(),
            content: "Review content".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            verified: true,
            platform,
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch_round_trip() {
        let store = SqliteStore::in_memory().await.unwrap();
        let mut product = scored_product("Wireless Mouse", 77.5);
        product.url = Some("https://example.com/mouse".to_string());
        let reviews = vec![
            review_for(&product, 4, Platform::Amazon, 10),
            review_for(&product, 3, Platform::Ebay, 12),
        ];

        store.insert_analyzed(&product, &reviews).await.unwrap();

        let fetched = store
            .fetch_product(&product.id.to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.id, product.id);
        assert_eq!(fetched.name, "Wireless Mouse");
        assert_eq!(fetched.url.as_deref(), Some("https://example.com/mouse"));

        let score = fetched.trust_score.unwrap();
        assert_eq!(score.overall_score, 77.5);
        assert_eq!(score.total_reviews, 2);
        assert_eq!(score.aspect_analysis.len(), 3);
        assert_eq!(score.aspect_analysis[0].aspect, Aspect::Quality);
        assert_eq!(score.recommendation, "consider - reviews are mixed");
    }

    #[tokio::test]
    async fn test_fetch_product_unknown_and_invalid_ids() {
        let store = SqliteStore::in_memory().await.unwrap();

        let unknown = store.fetch_product(&Uuid::new_v4().to_string()).await.unwrap();
        assert!(unknown.is_none());

        let invalid = store.fetch_product("not-a-uuid").await.unwrap();
        assert!(invalid.is_none());
    }

    #[tokio::test]
    async fn test_product_without_score_round_trips_as_unscored() {
        let store = SqliteStore::in_memory().await.unwrap();
        let product = plain_product("Unscored Gadget");

        store.insert_analyzed(&product, &[]).await.unwrap();

        let fetched = store
            .fetch_product(&product.id.to_string())
            .await
            .unwrap()
            .unwrap();
        assert!(fetched.trust_score.is_none());
    }

    #[tokio::test]
    async fn test_list_recent_orders_newest_first() {
        let store = SqliteStore::in_memory().await.unwrap();
        let mut oldest = scored_product("Oldest", 60.0);
        oldest.created_at = Utc::now() - Duration::minutes(30);
        let mut middle = scored_product("Middle", 70.0);
        middle.created_at = Utc::now() - Duration::minutes(15);
        let newest = scored_product("Newest", 80.0);

        store.insert_analyzed(&oldest, &[]).await.unwrap();
        store.insert_analyzed(&middle, &[]).await.unwrap();
        store.insert_analyzed(&newest, &[]).await.unwrap();

        let first_page = store.list_recent(2, 0).await.unwrap();
        let names: Vec<&str> = first_page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Newest", "Middle"]);

        let second_page = store.list_recent(2, 2).await.unwrap();
        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].name, "Oldest");

        assert_eq!(store.count_products().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_reviews_for_product_newest_first() {
        let store = SqliteStore::in_memory().await.unwrap();
        let product = plain_product("Gadget");
        let reviews = vec![
            review_for(&product, 5, Platform::Amazon, 5),
            review_for(&product, 2, Platform::Walmart, 12),
            review_for(&product, 4, Platform::Target, 8),
        ];

        store.insert_analyzed(&product, &reviews).await.unwrap();

        let stored = store
            .reviews_for_product(&product.id.to_string())
            .await
            .unwrap();
        let days: Vec<u32> = stored
            .iter()
            .map(|r| {
                use chrono::Datelike;
                r.date.day()
            })
            .collect();
        assert_eq!(days, vec![12, 8, 5]);

        let none = store
            .reviews_for_product(&Uuid::new_v4().to_string())
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_snapshot_aggregates() {
        let store = SqliteStore::in_memory().await.unwrap();
        let first = scored_product("First", 80.0);
        let second = scored_product("Second", 60.0);
        let first_reviews = vec![
            review_for(&first, 5, Platform::Amazon, 10),
            review_for(&first, 4, Platform::Amazon, 11),
        ];
        let second_reviews = vec![review_for(&second, 3, Platform::Ebay, 12)];

        store.insert_analyzed(&first, &first_reviews).await.unwrap();
        store
            .insert_analyzed(&second, &second_reviews)
            .await
            .unwrap();

        let snapshot = store.dashboard_snapshot().await.unwrap();
        assert_eq!(snapshot.total_products, 2);
        assert_eq!(snapshot.total_reviews, 3);
        assert!((snapshot.average_trust_score - 70.0).abs() < 1e-9);
        assert_eq!(snapshot.platform_distribution.len(), 2);
        assert_eq!(snapshot.platform_distribution[0].platform, "Amazon");
        assert_eq!(snapshot.platform_distribution[0].count, 2);
        assert_eq!(snapshot.products_analyzed_today, 2);
        assert_eq!(snapshot.reviews_processed_today, 3);
        assert_eq!(snapshot.trust_scores_updated_today, 2);
    }

    #[tokio::test]
    async fn test_dashboard_snapshot_on_empty_database() {
        let store = SqliteStore::in_memory().await.unwrap();

        let snapshot = store.dashboard_snapshot().await.unwrap();
        assert_eq!(snapshot.total_products, 0);
        assert_eq!(snapshot.average_trust_score, 0.0);
        assert!(snapshot.platform_distribution.is_empty());
    }

    #[tokio::test]
    async fn test_insert_analyzed_rejects_duplicate_product() {
        let store = SqliteStore::in_memory().await.unwrap();
        let product = scored_product("Duplicate", 70.0);
        let reviews = vec![review_for(&product, 4, Platform::Amazon, 10)];

        store.insert_analyzed(&product, &reviews).await.unwrap();
        let second = store.insert_analyzed(&product, &reviews).await;
        assert!(second.is_err());

        // The failed insert must not leave partial rows behind.
        assert_eq!(store.count_products().await.unwrap(), 1);
        let stored = store
            .reviews_for_product(&product.id.to_string())
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
    }
}
