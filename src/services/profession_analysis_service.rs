//! Profession classification: reference set first, generator second,
//! sentinel fallback always.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::api::InferenceClient;
use crate::data::professions;
use crate::models::{ProfessionAnalysis, ProfessionExercise, ProfessionReport};
use crate::services::reconciliation_service;

const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are a professional job analyst. Analyze the given profession and return ONLY a JSON object in this exact format:
{
  "category": "string",
  "characteristics": {
    "physical_demands": ["string"],
    "workplace": ["string"],
    "movements": ["string"]
  },
  "health_risks": ["string"],
  "exercise_recommendations": {
    "types": ["string"],
    "frequency": "string",
    "focus_areas": ["string"]
  }
}

DO NOT include any explanatory text. ONLY return the JSON object."#;

pub struct ProfessionAnalysisService {
    client: Arc<InferenceClient>,
}

impl ProfessionAnalysisService {
    pub fn new(client: Arc<InferenceClient>) -> Self {
        Self { client }
    }

    /// Classify a profession. Infallible: the reference set answers known
    /// professions without a network call; unknown ones go to the
    /// generator, and any failure on that path lands on the sentinel
    /// profile rather than the caller.
    pub async fn analyze(&self, profession: &str) -> ProfessionReport {
        if let Some(profile) = professions::find_profession(profession) {
            info!(profession, matched = profile.name, "profession matched reference set");
            return ProfessionReport::Known(profile);
        }

        let prompt = format!("Analyze this profession: {profession}");
        match self
            .client
            .generate(&prompt, Some(ANALYSIS_SYSTEM_PROMPT))
            .await
        {
            Ok(response) => {
                if let Some(analysis) =
                    reconciliation_service::reconcile_profession_analysis(&response.content)
                {
                    info!(profession, category = %analysis.category, "profession analyzed");
                    return ProfessionReport::Analyzed(analysis);
                }
                warn!(profession, "profession analysis failed reconciliation, using sentinel");
            }
            Err(err) => {
                warn!(profession, %err, "profession analysis request failed, using sentinel");
            }
        }

        ProfessionReport::Analyzed(ProfessionAnalysis::sentinel())
    }

    /// Generate exercises targeted at an analyzed profession's risks.
    /// `None` when the generator output cannot be used; the caller decides
    /// whether to fall back to the general catalog.
    pub async fn generate_exercises(
        &self,
        analysis: &ProfessionAnalysis,
    ) -> Option<Vec<ProfessionExercise>> {
        let characteristics = serde_json::to_string(analysis).ok()?;
        let system_prompt = format!(
            r#"Based on these profession characteristics, generate appropriate exercises:
{characteristics}

Return exercises that:
1. Address specific health risks
2. Can be done in their workplace
3. Counter negative physical effects
4. Match their movement patterns

Format:
{{
  "exercises": [
    {{
      "name": "string",
      "description": "string",
      "duration_minutes": number,
      "target_areas": ["string"],
      "frequency": "string",
      "reason": "string"
    }}
  ]
}}"#
        );

        match self
            .client
            .generate("Generate targeted exercises", Some(&system_prompt))
            .await
        {
            Ok(response) => {
                reconciliation_service::reconcile_profession_exercises(&response.content)
            }
            Err(err) => {
                warn!(%err, "profession exercise generation failed");
                None
            }
        }
    }

    /// Deterministic coaching summary for a reference-set profession.
    pub fn profession_feedback(&self, profession: &str) -> Result<String> {
        let profile = professions::find_profession(profession)
            .ok_or_else(|| anyhow!("unknown profession: {profession}"))?;

        let issues = profile
            .common_issues
            .iter()
            .map(|i| i.issue)
            .collect::<Vec<_>>()
            .join(", ");
        let exercises = profile
            .recommended_exercises
            .iter()
            .map(|e| e.name)
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!(
            "As a {}, you should focus on exercises that address: {issues}. \
             Recommended exercises include: {exercises}.",
            profile.name
        ))
    }
}
