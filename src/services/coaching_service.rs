//! Small generator-backed coaching helpers. Every call absorbs gateway
//! failure into a canned tip so the surrounding screens always have
//! something to show.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::{InferenceClient, InferenceResponse};

const MOTIVATION_FALLBACK: &str =
    "Take a 2-minute stretch break every hour to stay energized!";
const RECOMMENDATION_FALLBACK: &str =
    "Try 10 desk push-ups to strengthen your arms and core.";
const PROGRESS_FALLBACK: &str = "Keep tracking your progress and staying consistent!";

/// Aggregate progress numbers summarized for the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub total_workouts: u32,
    pub total_minutes: u32,
    pub current_streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_rate: Option<f32>,
}

pub struct CoachingService {
    client: Arc<InferenceClient>,
}

impl CoachingService {
    pub fn new(client: Arc<InferenceClient>) -> Self {
        Self { client }
    }

    pub async fn motivational_message(&self) -> InferenceResponse {
        self.ask(
            "Give a short, motivating workplace wellness tip for today (max 30 words).",
            MOTIVATION_FALLBACK,
        )
        .await
    }

    pub async fn quick_recommendation(&self) -> InferenceResponse {
        self.ask(
            "Suggest a quick office-friendly exercise (max 30 words).",
            RECOMMENDATION_FALLBACK,
        )
        .await
    }

    pub async fn analyze_progress(&self, stats: &UserStats) -> InferenceResponse {
        let stats_json = serde_json::to_string(stats).unwrap_or_default();
        let prompt = format!(
            "Analyze this fitness progress data and provide insights: {stats_json}. \
             Focus on trends and actionable recommendations."
        );
        self.ask(&prompt, PROGRESS_FALLBACK).await
    }

    async fn ask(&self, prompt: &str, fallback: &str) -> InferenceResponse {
        match self.client.generate(prompt, None).await {
            Ok(response) => response,
            Err(err) => {
                warn!(%err, "coaching request failed, using canned tip");
                InferenceResponse {
                    content: fallback.to_string(),
                    token_usage: None,
                }
            }
        }
    }
}
