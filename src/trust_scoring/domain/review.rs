use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marketplace a review was collected from.
///
/// The serialized names are the display names the API exposes, so they
/// round-trip unchanged through storage and JSON responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Amazon,
    #[serde(rename = "eBay")]
    Ebay,
    Walmart,
    Target,
    AliExpress,
}

impl Platform {
    /// All supported marketplaces, in the order reviews are reported.
    pub const ALL: [Platform; 5] = [
        Platform::Amazon,
        Platform::Ebay,
        Platform::Walmart,
        Platform::Target,
        Platform::AliExpress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Ebay => "eBay",
            Platform::Walmart => "Walmart",
            Platform::Target => "Target",
            Platform::AliExpress => "AliExpress",
        }
    }

    /// Position in the canonical platform order, used for stable sorting.
    pub fn ordinal(&self) -> usize {
        Platform::ALL
            .iter()
            .position(|p| p == self)
            .unwrap_or(Platform::ALL.len())
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown platform '{}'. Expected one of: Amazon, eBay, Walmart, Target, AliExpress",
                    s
                )
            })
    }
}

/// NewType wrapper for a star rating, validated to the 1-5 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> crate::shared::Result<Self> {
        Rating::try_from(stars).map_err(|e| anyhow::anyhow!(e))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }

    /// Rating mapped onto [-1.0, 1.0], with 3 stars as the neutral point.
    pub fn polarity(&self) -> f64 {
        (f64::from(self.0) - 3.0) / 2.0
    }

    /// Rating mapped onto [0.0, 1.0], with 1 star at 0 and 5 stars at 1.
    pub fn fraction(&self) -> f64 {
        (f64::from(self.0) - 1.0) / 4.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        if !(Rating::MIN..=Rating::MAX).contains(&stars) {
            return Err(format!(
                "Rating must be between {} and {} stars, got {}",
                Rating::MIN,
                Rating::MAX,
                stars
            ));
        }
        Ok(Rating(stars))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single customer review collected from a marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub product_id: Uuid,
    pub author: String,
    pub rating: Rating,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub verified: bool,
    pub platform: Platform,
}

impl Review {
    /// Title and body joined for text analysis.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }

    /// Weight applied when aggregating scores. Verified purchases count
    /// for more than unverified ones.
    pub fn weight(&self) -> f64 {
        if self.verified {
            crate::trust_scoring::policies::score_bands::VERIFIED_REVIEW_WEIGHT
        } else {
            1.0
        }
    }
}
