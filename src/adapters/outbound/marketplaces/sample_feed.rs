use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::ports::outbound::{ReviewSource, ReviewSubject};
use crate::shared::Result;
use crate::trust_scoring::domain::{Platform, Rating, Review};

/// One canned review as it appears in the sample data set.
struct SampleReview {
    platform: Platform,
    author: &'static str,
    rating: u8,
    title: &'static str,
    content: &'static str,
    date: (i32, u32, u32),
    verified: bool,
}

/// The canned review set, one entry per marketplace. Chosen to span the
/// rating range and to talk about quality, delivery and customer
/// service in different tones, so every scoring path gets exercised.
const SAMPLE_REVIEWS: &[SampleReview] = &[
    SampleReview {
        platform: Platform::Amazon,
        author: "John D.",
        rating: 5,
        title: "Excellent product!",
        content: "This product exceeded my expectations. The quality is outstanding and delivery was super fast. Customer service was also very helpful when I had questions.",
        date: (2024, 1, 15),
        verified: true,
    },
    SampleReview {
        platform: Platform::Ebay,
        author: "Sarah M.",
        rating: 4,
        title: "Good value for money",
        content: "Pretty good product overall. The quality is decent for the price. Delivery took a bit longer than expected but it arrived safely.",
        date: (2024, 1, 10),
        verified: true,
    },
    SampleReview {
        platform: Platform::Walmart,
        author: "Mike R.",
        rating: 3,
        title: "Average product",
        content: "It's okay, nothing special. The quality is average and the customer service was slow to respond. Delivery was on time though.",
        date: (2024, 1, 8),
        verified: false,
    },
    SampleReview {
        platform: Platform::Target,
        author: "Lisa K.",
        rating: 2,
        title: "Not as described",
        content: "The product didn't match the description. Quality was poor and it broke after a few days. Customer service was unhelpful.",
        date: (2024, 1, 5),
        verified: true,
    },
    SampleReview {
        platform: Platform::AliExpress,
        author: "David L.",
        rating: 5,
        title: "Perfect!",
        content: "Absolutely love this product! Amazing quality, fast delivery, and great customer service. Would definitely buy again.",
        date: (2024, 1, 12),
        verified: true,
    },
];

/// SampleReviewFeed adapter serving canned reviews for one marketplace
///
/// Stands in for a real marketplace integration. Every product gets the
/// same reviews for this platform, which keeps analyses deterministic
/// and the service usable without any external credentials.
pub struct SampleReviewFeed {
    platform: Platform,
}

impl SampleReviewFeed {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    fn build_review(&self, sample: &SampleReview, subject: &ReviewSubject) -> Result<Review> {
        let (year, month, day) = sample.date;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| anyhow::anyhow!("invalid sample review date {:?}", sample.date))?;

        Ok(Review {
            id: Uuid::new_v4(),
            product_id: subject.product_id,
            author: sample.author.to_string(),
            rating: Rating::new(sample.rating)?,
            title: sample.title.to_string(),
            content: sample.content.to_string(),
            date,
            verified: sample.verified,
            platform: sample.platform,
        })
    }
}

#[async_trait]
impl ReviewSource for SampleReviewFeed {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn fetch_reviews(&self, subject: &ReviewSubject) -> Result<Vec<Review>> {
        SAMPLE_REVIEWS
            .iter()
            .filter(|sample| sample.platform == self.platform)
            .map(|sample| self.build_review(sample, subject))
            .collect()
    }
}
