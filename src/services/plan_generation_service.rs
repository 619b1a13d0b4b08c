//! Plan generation orchestration: rules engine, generator-backed path, and
//! the fallback wiring between them.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::{info, warn};

use crate::api::{InferenceClient, InferenceError};
use crate::models::{WorkoutPlan, WorkoutType};
use crate::services::intent_classifier::{self, WorkoutIntent};
use crate::services::{plan_assembler, reconciliation_service};

pub struct PlanGenerationService {
    client: Arc<InferenceClient>,
    rng: Mutex<StdRng>,
}

impl PlanGenerationService {
    pub fn new(client: Arc<InferenceClient>) -> Self {
        Self {
            client,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded variant for reproducible selection.
    pub fn with_seed(client: Arc<InferenceClient>, seed: u64) -> Self {
        Self {
            client,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Rules-engine path: classify, select, assemble. No network, total.
    pub fn generate_local_plan(&self, input: &str) -> WorkoutPlan {
        let intent = intent_classifier::classify(input);
        let mut rng = self.rng.lock().unwrap();
        plan_assembler::assemble(&mut *rng, &intent)
    }

    /// Generator-backed path with the rules engine as fallback terminus.
    ///
    /// Gateway-level terminal failures (auth, network, rate-limit
    /// exhaustion, bad response shape) propagate to the caller unchanged;
    /// no plan is fabricated for them. A response that merely fails
    /// reconciliation is absorbed: the deterministic path takes over and
    /// the caller still gets a valid, non-empty plan.
    pub async fn generate_plan(
        &self,
        input: &str,
        plan_type: WorkoutType,
    ) -> Result<WorkoutPlan, InferenceError> {
        let intent = intent_classifier::classify(input);

        let draft = Self::draft_plan(input, plan_type);
        let prompt = draft.to_string();
        let system_prompt = Self::system_prompt(plan_type, &prompt);

        let response = self.client.generate(&prompt, Some(&system_prompt)).await?;

        if let Some(plan) = reconciliation_service::reconcile_workout_plan(
            &response.content,
            plan_type,
            intent.level,
        ) {
            info!(title = %plan.title, exercises = plan.exercises.len(), "reconciled generated plan");
            return Ok(plan);
        }

        warn!("generated plan failed reconciliation, using rules engine");
        Ok(self.fallback_plan(&intent, plan_type))
    }

    fn fallback_plan(&self, intent: &WorkoutIntent, plan_type: WorkoutType) -> WorkoutPlan {
        match plan_type {
            WorkoutType::Work => {
                plan_assembler::assemble_work_plan(intent.level.exercise_count())
            }
            WorkoutType::Exercise => {
                let mut rng = self.rng.lock().unwrap();
                plan_assembler::assemble(&mut *rng, intent)
            }
        }
    }

    /// Structure the raw request into a draft the generator refines: one
    /// candidate exercise per sentence fragment, `name: description` when
    /// the fragment has a colon.
    fn draft_plan(input: &str, plan_type: WorkoutType) -> serde_json::Value {
        let is_work = plan_type == WorkoutType::Work;

        let exercises: Vec<serde_json::Value> = input
            .split(['.', ',', '\n'])
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| {
                let mut parts = fragment.splitn(2, ':');
                let name = parts
                    .next()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .unwrap_or("Exercise");
                let description = parts.next().map(str::trim).unwrap_or(fragment);
                json!({
                    "name": name,
                    "description": description,
                    "duration_minutes": if is_work { json!(5) } else { json!(null) },
                    "sets": if is_work { json!(null) } else { json!(3) },
                    "reps": if is_work { json!(null) } else { json!(10) },
                    "target_areas": ["general"],
                    "is_work_friendly": is_work,
                })
            })
            .collect();

        json!({
            "title": if is_work { "Office Workout" } else { "Exercise Routine" },
            "exercises": exercises,
        })
    }

    fn system_prompt(plan_type: WorkoutType, draft: &str) -> String {
        let (persona, extras) = match plan_type {
            WorkoutType::Work => (
                "workplace wellness expert",
                r#""duration_minutes": number (1-5)"#,
            ),
            WorkoutType::Exercise => (
                "professional fitness trainer",
                r#""sets": number, "reps": number, "equipment_needed": ["string"]"#,
            ),
        };

        format!(
            r#"You are a {persona}.

CRITICAL: Your response must be ONLY this exact JSON structure:
{{
  "title": "string (workout title)",
  "exercises": [
    {{
      "name": "string (exercise name)",
      "description": "string (clear instructions)",
      "target_areas": ["string"],
      {extras}
    }}
  ]
}}

DO NOT include any explanatory text. ONLY return the JSON object.

Convert this workout plan into the JSON format: {draft}"#
        )
    }
}
