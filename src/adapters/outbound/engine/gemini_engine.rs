use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::outbound::AnalysisEngine;
use crate::shared::Result;
use crate::trust_scoring::domain::{
    clamp_score, round_score, Aspect, AspectAnalysis, Product, Review, Sentiment, TrustScore,
};
use crate::trust_scoring::policies::score_bands::sentiment_for_polarity;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// The JSON document the model is asked to produce.
#[derive(Debug, Deserialize)]
struct EngineVerdict {
    overall_score: f64,
    aspect_analysis: Vec<EngineAspect>,
    summary: String,
    recommendation: String,
}

#[derive(Debug, Deserialize)]
struct EngineAspect {
    aspect: String,
    score: f64,
    #[serde(default)]
    sentiment: Option<Sentiment>,
    #[serde(default)]
    key_points: Vec<String>,
}

/// GeminiEngine adapter scoring reviews through the Gemini API
///
/// This adapter implements the AnalysisEngine port by prompting a Gemini
/// model for a structured verdict and converting the reply into a
/// `TrustScore`. Model output is untrusted: scores are clamped into
/// range, aspects are matched by name and reordered, and anything that
/// still fails validation is rejected so the caller's fallback kicks in.
pub struct GeminiEngine {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    max_retries: u32,
}

impl GeminiEngine {
    const API_BASE: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    const TIMEOUT_SECONDS: u64 = 30;
    const MAX_KEY_POINTS: usize = 3;

    /// Creates a new Gemini engine with default configuration
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("trust-lens/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: Self::API_BASE.to_string(),
            max_retries: 3,
        })
    }

    /// Points the engine at a different endpoint, e.g. a regional
    /// deployment or an API-compatible proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_prompt(product: &Product, reviews: &[Review]) -> String {
        let mut reviews_text = String::new();
        for review in reviews {
            let status = if review.verified {
                "verified"
            } else {
                "unverified"
            };
            reviews_text.push_str(&format!(
                "- {}/5 stars on {} ({}): {} - {}\n",
                review.rating, review.platform, status, review.title, review.content
            ));
        }

        format!(
            "Analyze these product reviews for trust and quality insights:\n\n\
             Product: {}\n\
             Description: {}\n\n\
             Reviews:\n{}\n\
             Provide a JSON response with:\n\
             1. overall_score (0-100)\n\
             2. aspect_analysis for exactly these aspects: Quality, Delivery, Customer Service\n\
             \x20  - aspect (the aspect name)\n\
             \x20  - score (0-100)\n\
             \x20  - sentiment (positive/neutral/negative)\n\
             \x20  - key_points (list of 2-3 key insights)\n\
             3. summary (2-3 sentences)\n\
             4. recommendation (buy/consider/avoid with brief reason)\n\n\
             Format as valid JSON only.",
            product.name, product.description, reviews_text
        )
    }

    /// Requests an analysis with retry logic (async)
    async fn fetch_with_retry(&self, prompt: &str) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.request_analysis(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        // Retry after a short wait (async)
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    /// Sends one generateContent request and returns the reply text
    async fn request_analysis(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            urlencoding::encode(&self.model)
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Gemini API returned status code {}", response.status());
        }

        let body: GenerateContentResponse = response.json().await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| anyhow::anyhow!("Gemini API returned no candidates"))
    }

    /// Cuts the JSON object out of the reply, which models like to wrap
    /// in markdown fences or prose.
    fn extract_json(text: &str) -> Result<&str> {
        let start = text
            .find('{')
            .ok_or_else(|| anyhow::anyhow!("no JSON object in engine response"))?;
        let end = text
            .rfind('}')
            .filter(|&end| end > start)
            .ok_or_else(|| anyhow::anyhow!("unterminated JSON object in engine response"))?;
        Ok(&text[start..=end])
    }

    /// Converts the model's verdict into a validated TrustScore.
    fn parse_verdict(product: &Product, total_reviews: u32, payload: &str) -> Result<TrustScore> {
        let verdict: EngineVerdict = serde_json::from_str(payload)?;

        let mut analyses = Vec::with_capacity(Aspect::ALL.len());
        for aspect in Aspect::ALL {
            let found = verdict
                .aspect_analysis
                .iter()
                .find(|entry| Self::match_aspect(&entry.aspect) == Some(aspect))
                .ok_or_else(|| {
                    anyhow::anyhow!("engine response is missing the {} aspect", aspect)
                })?;

            let score = round_score(clamp_score(found.score));
            let sentiment = found
                .sentiment
                .unwrap_or_else(|| sentiment_for_polarity((score - 50.0) / 50.0));
            let mut key_points = found.key_points.clone();
            key_points.truncate(Self::MAX_KEY_POINTS);

            analyses.push(AspectAnalysis {
                aspect,
                score,
                sentiment,
                key_points,
            });
        }

        let score = TrustScore {
            product_id: product.id,
            overall_score: round_score(clamp_score(verdict.overall_score)),
            total_reviews,
            aspect_analysis: analyses,
            summary: verdict.summary.trim().to_string(),
            recommendation: verdict.recommendation.trim().to_string(),
            updated_at: Utc::now(),
        };
        score.validate()?;
        Ok(score)
    }

    fn match_aspect(name: &str) -> Option<Aspect> {
        let normalized = name.trim().to_lowercase().replace('_', " ");
        Aspect::ALL
            .into_iter()
            .find(|aspect| aspect.label() == normalized)
    }
}

#[async_trait]
impl AnalysisEngine for GeminiEngine {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn analyze(&self, product: &Product, reviews: &[Review]) -> Result<TrustScore> {
        let prompt = Self::build_prompt(product, reviews);
        let raw = self.fetch_with_retry(&prompt).await?;
        let payload = Self::extract_json(&raw)?;
        Self::parse_verdict(product, reviews.len() as u32, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trust_scoring::domain::{Platform, ProductDraft, Rating};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn product() -> Product {
        Product::from_draft(
            ProductDraft::new(Some("Desk Lamp".to_string()), None, None).unwrap(),
        )
    }

    fn review() -> Review {
        Review {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            author: "John D.".to_string(),
            rating: Rating::new(4).unwrap(),
            title: "Solid".to_string(),
            content: "Good quality".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            verified: true,
            platform: Platform::Amazon,
        }
    }

    fn verdict_json() -> String {
        r#"{
            "overall_score": 82,
            "aspect_analysis": [
                {"aspect": "Customer Service", "score": 70, "sentiment": "neutral", "key_points": ["responsive"]},
                {"aspect": "Quality", "score": 88, "sentiment": "positive", "key_points": ["well made", "durable"]},
                {"aspect": "Delivery", "score": 75, "sentiment": "positive", "key_points": ["fast"]}
            ],
            "summary": "Well liked overall.",
            "recommendation": "buy - solid track record"
        }"#
        .to_string()
    }

    #[test]
    fn test_prompt_includes_product_and_reviews() {
        let prompt = GeminiEngine::build_prompt(&product(), &[review()]);
        assert!(prompt.contains("Product: Desk Lamp"));
        assert!(prompt.contains("4/5 stars on Amazon (verified)"));
        assert!(prompt.contains("Format as valid JSON only."));
    }

    #[test]
    fn test_extract_json_from_fenced_reply() {
        let reply = "Here you go:\n```json\n{\"overall_score\": 80}\n```\nHope that helps!";
        assert_eq!(
            GeminiEngine::extract_json(reply).unwrap(),
            "{\"overall_score\": 80}"
        );
    }

    #[test]
    fn test_extract_json_rejects_reply_without_object() {
        assert!(GeminiEngine::extract_json("I cannot do that").is_err());
        assert!(GeminiEngine::extract_json("} backwards {").is_err());
    }

    #[test]
    fn test_parse_verdict_reorders_aspects() {
        let score = GeminiEngine::parse_verdict(&product(), 5, &verdict_json()).unwrap();

        let aspects: Vec<Aspect> = score.aspect_analysis.iter().map(|a| a.aspect).collect();
        assert_eq!(aspects, Aspect::ALL.to_vec());
        assert_eq!(score.aspect_analysis[0].score, 88.0);
        assert_eq!(score.overall_score, 82.0);
        assert_eq!(score.total_reviews, 5);
    }

    #[test]
    fn test_parse_verdict_clamps_out_of_range_scores() {
        let payload = r#"{
            "overall_score": 140,
            "aspect_analysis": [
                {"aspect": "Quality", "score": -20, "sentiment": "negative", "key_points": []},
                {"aspect": "Delivery", "score": 300, "sentiment": "positive", "key_points": []},
                {"aspect": "Customer Service", "score": 55, "sentiment": "neutral", "key_points": []}
            ],
            "summary": "s",
            "recommendation": "r"
        }"#;
        let score = GeminiEngine::parse_verdict(&product(), 0, payload).unwrap();

        assert_eq!(score.overall_score, 100.0);
        assert_eq!(score.aspect_analysis[0].score, 0.0);
        assert_eq!(score.aspect_analysis[1].score, 100.0);
    }

    #[test]
    fn test_parse_verdict_rejects_missing_aspect() {
        let payload = r#"{
            "overall_score": 70,
            "aspect_analysis": [
                {"aspect": "Quality", "score": 70, "sentiment": "positive", "key_points": []}
            ],
            "summary": "s",
            "recommendation": "r"
        }"#;
        assert!(GeminiEngine::parse_verdict(&product(), 0, payload).is_err());
    }

    #[test]
    fn test_parse_verdict_derives_missing_sentiment_from_score() {
        let payload = r#"{
            "overall_score": 70,
            "aspect_analysis": [
                {"aspect": "Quality", "score": 90, "key_points": []},
                {"aspect": "Delivery", "score": 50, "key_points": []},
                {"aspect": "Customer Service", "score": 10, "key_points": []}
            ],
            "summary": "s",
            "recommendation": "r"
        }"#;
        let score = GeminiEngine::parse_verdict(&product(), 0, payload).unwrap();

        assert_eq!(score.aspect_analysis[0].sentiment, Sentiment::Positive);
        assert_eq!(score.aspect_analysis[1].sentiment, Sentiment::Neutral);
        assert_eq!(score.aspect_analysis[2].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_parse_verdict_caps_key_points() {
        let payload = r#"{
            "overall_score": 70,
            "aspect_analysis": [
                {"aspect": "Quality", "score": 70, "sentiment": "positive",
                 "key_points": ["a", "b", "c", "d", "e"]},
                {"aspect": "Delivery", "score": 70, "sentiment": "positive", "key_points": []},
                {"aspect": "Customer Service", "score": 70, "sentiment": "positive", "key_points": []}
            ],
            "summary": "s",
            "recommendation": "r"
        }"#;
        let score = GeminiEngine::parse_verdict(&product(), 0, payload).unwrap();
        assert_eq!(score.aspect_analysis[0].key_points.len(), 3);
    }

    #[test]
    fn test_match_aspect_accepts_capitalization_variants() {
        assert_eq!(
            GeminiEngine::match_aspect("customer_service"),
            Some(Aspect::CustomerService)
        );
        assert_eq!(
            GeminiEngine::match_aspect(" QUALITY "),
            Some(Aspect::Quality)
        );
        assert_eq!(GeminiEngine::match_aspect("price"), None);
    }
}
