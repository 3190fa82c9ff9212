//! Table definitions and row-to-domain conversions.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::Result;
use crate::trust_scoring::domain::{AspectAnalysis, Product, Rating, Review, TrustScore};

/// Statements run at startup. All of them are idempotent so reopening
/// an existing database is safe.
pub(super) const CREATE_TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS products (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        url TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS trust_scores (
        product_id TEXT PRIMARY KEY REFERENCES products(id),
        overall_score REAL NOT NULL,
        total_reviews INTEGER NOT NULL,
        aspect_analysis TEXT NOT NULL,
        summary TEXT NOT NULL,
        recommendation TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS reviews (
        id TEXT PRIMARY KEY,
        product_id TEXT NOT NULL REFERENCES products(id),
        author TEXT NOT NULL,
        rating INTEGER NOT NULL,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        review_date TEXT NOT NULL,
        verified INTEGER NOT NULL,
        platform TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_reviews_product ON reviews(product_id)",
    "CREATE INDEX IF NOT EXISTS idx_products_created ON products(created_at)",
];

/// One product row joined with its (optional) trust score row.
#[derive(Debug, FromRow)]
pub(super) struct ProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub overall_score: Option<f64>,
    pub total_reviews: Option<i64>,
    pub aspect_analysis: Option<String>,
    pub summary: Option<String>,
    pub recommendation: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductRow {
    pub(super) fn into_product(self) -> Result<Product> {
        let id = Uuid::parse_str(&self.id)?;
        let trust_score = match (
            self.overall_score,
            self.total_reviews,
            self.aspect_analysis,
            self.summary,
            self.recommendation,
            self.updated_at,
        ) {
            (
                Some(overall_score),
                Some(total_reviews),
                Some(aspects),
                Some(summary),
                Some(recommendation),
                Some(updated_at),
            ) => {
                let aspect_analysis: Vec<AspectAnalysis> = serde_json::from_str(&aspects)?;
                Some(TrustScore {
                    product_id: id,
                    overall_score,
                    total_reviews: u32::try_from(total_reviews)?,
                    aspect_analysis,
                    summary,
                    recommendation,
                    updated_at,
                })
            }
            _ => None,
        };

        Ok(Product {
            id,
            name: self.name,
            description: self.description,
            url: self.url,
            trust_score,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ReviewRow {
    pub id: String,
    pub product_id: String,
    pub author: String,
    pub rating: i64,
    pub title: String,
    pub content: String,
    pub review_date: NaiveDate,
    pub verified: bool,
    pub platform: String,
}

impl ReviewRow {
    pub(super) fn into_review(self) -> Result<Review> {
        Ok(Review {
            id: Uuid::parse_str(&self.id)?,
            product_id: Uuid::parse_str(&self.product_id)?,
            author: self.author,
            rating: Rating::new(u8::try_from(self.rating)?)?,
            title: self.title,
            content: self.content,
            date: self.review_date,
            verified: self.verified,
            platform: self.platform.parse()?,
        })
    }
}
