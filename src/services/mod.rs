// Engine services

pub mod coaching_service;
pub mod exercise_selector;
pub mod intent_classifier;
pub mod plan_assembler;
pub mod plan_generation_service;
pub mod profession_analysis_service;
pub mod reconciliation_service;

pub use coaching_service::CoachingService;
pub use plan_generation_service::PlanGenerationService;
pub use profession_analysis_service::ProfessionAnalysisService;
