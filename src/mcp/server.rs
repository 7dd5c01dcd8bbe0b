//! MCP Server Implementation
//!
//! Exposes the nutrition tools over MCP. Each `NutriService` value is one
//! session: its targets are never shared with another service instance.

use std::sync::{Arc, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::NutriError;
use crate::models::HealthFlags;
use crate::session::SessionTargets;
use crate::tools::advice;
use crate::tools::catalog;
use crate::tools::lookup::{self, DEFAULT_LOOKUP_GRAMS};
use crate::tools::plan::{self, PlanRequest};
use crate::tools::status::StatusTracker;

/// Nutrition & Health Assistant MCP Service
#[derive(Clone)]
pub struct NutriService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Config,
    session: Arc<std::sync::Mutex<SessionTargets>>,
    tool_router: ToolRouter<NutriService>,
}

impl NutriService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            config,
            session: Arc::new(std::sync::Mutex::new(SessionTargets::new())),
            tool_router: Self::tool_router(),
        }
    }

    fn session(&self) -> Result<MutexGuard<'_, SessionTargets>, McpError> {
        self.session
            .lock()
            .map_err(|_| McpError::internal_error("Session state lock poisoned", None))
    }
}

/// Body returned for lookup misses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Lookup misses are reported in the result body; malformed inputs are invalid params
fn error_result(err: NutriError) -> Result<CallToolResult, McpError> {
    if err.is_lookup_miss() {
        json_result(&ErrorResponse {
            error: err.kind(),
            message: err.to_string(),
        })
    } else {
        Err(McpError::invalid_params(err.to_string(), None))
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupFoodParams {
    /// Food name, e.g. "chicken", "rice", "apple"
    pub name: String,
    /// Quantity in grams, between 1 and 100000 (default 100)
    #[serde(default = "default_lookup_grams")]
    pub grams: f64,
}

fn default_lookup_grams() -> f64 { DEFAULT_LOOKUP_GRAMS }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodsParams {
    /// Category filter: fruits, vegetables, staples, proteins, fast_foods, drinks_and_others
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculatePlanParams {
    /// Date of birth (YYYY-MM-DD)
    pub birth_date: String,
    /// "male" or "female"
    pub gender: String,
    /// Weight in kg (30-300)
    pub weight_kg: f64,
    /// Height in cm (120-230)
    pub height_cm: f64,
    /// "maintain", "lose", or "gain" (default maintain)
    #[serde(default = "default_goal")]
    pub goal: String,
    /// Activity level id or label (default moderate)
    pub activity_level: Option<String>,
    /// Optional goal date (YYYY-MM-DD)
    pub target_date: Option<String>,
}

fn default_goal() -> String { "maintain".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HealthAdviceParams {
    /// Diabetes (type 1 / type 2)
    #[serde(default)]
    pub diabetes: bool,
    /// High blood pressure (hypertension)
    #[serde(default)]
    pub high_bp: bool,
    /// Low blood pressure (hypotension)
    #[serde(default)]
    pub low_bp: bool,
    /// Optional date of birth, shown back as age
    pub birth_date: Option<String>,
    /// Optional weight in kg, shown back for context
    pub weight_kg: Option<f64>,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl NutriService {
    // --- Status ---

    #[tool(description = "Get the current status of the nutrition service including build info, table sizes, session state, and process information")]
    async fn nutriplan_status(&self) -> Result<CallToolResult, McpError> {
        let targets_set = self.session()?.is_set();
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(targets_set);
        json_result(&status)
    }

    #[tool(description = "Get instructions for using the nutrition tools. Call this when starting a session or when unsure how to use the tools.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Food Lookup ---

    #[tool(description = "Look up calories and protein for a quantity of food, with percentages of the session's daily targets and a health tip when available")]
    fn lookup_food(&self, Parameters(p): Parameters<LookupFoodParams>) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        match lookup::lookup_food(&session, self.config.fallback_targets, &p.name, p.grams) {
            Ok(resp) => json_result(&resp),
            Err(e) => error_result(e),
        }
    }

    #[tool(description = "List supported foods with calories and protein per 100 g, optionally filtered by category")]
    fn list_foods(&self, Parameters(p): Parameters<ListFoodsParams>) -> Result<CallToolResult, McpError> {
        match catalog::list_foods(p.category.as_deref()) {
            Ok(resp) => json_result(&resp),
            Err(e) => error_result(e),
        }
    }

    // --- Personal Plan ---

    #[tool(description = "Calculate BMR, maintenance calories, calorie and protein targets, and a sample diet/workout plan. Stores the targets for later food lookups in this session.")]
    fn calculate_plan(&self, Parameters(p): Parameters<CalculatePlanParams>) -> Result<CallToolResult, McpError> {
        let request = PlanRequest {
            birth_date: p.birth_date, gender: p.gender, weight_kg: p.weight_kg, height_cm: p.height_cm,
            goal: p.goal, activity_level: p.activity_level, target_date: p.target_date,
        };
        let mut session = self.session()?;
        match plan::calculate_plan(&mut session, &request, today()) {
            Ok(resp) => json_result(&resp),
            Err(e) => error_result(e),
        }
    }

    #[tool(description = "List activity levels with their maintenance multipliers")]
    fn list_activity_levels(&self) -> Result<CallToolResult, McpError> {
        json_result(&catalog::list_activity_levels())
    }

    #[tool(description = "Get the calorie and protein targets stored by the last calculate_plan call in this session")]
    fn get_session_targets(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&lookup::session_targets(&session, self.config.fallback_targets))
    }

    // --- Health Advisor ---

    #[tool(description = "Get general diet and activity suggestions for diabetes, high blood pressure, and/or low blood pressure. Not medical advice.")]
    fn health_advice(&self, Parameters(p): Parameters<HealthAdviceParams>) -> Result<CallToolResult, McpError> {
        let flags = HealthFlags { diabetes: p.diabetes, high_bp: p.high_bp, low_bp: p.low_bp };
        match advice::health_advice(flags, p.birth_date.as_deref(), p.weight_kg, today()) {
            Ok(resp) => json_result(&resp),
            Err(e) => error_result(e),
        }
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutriService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutriplan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Nutrition & Health Assistant".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nutrition & Health Assistant - food lookup, daily needs, sample plans, and condition-aware tips. \
                 Educational only; not a substitute for professional medical advice. \
                 Call usage_instructions first. \
                 Food: lookup_food, list_foods. \
                 Plan: calculate_plan, list_activity_levels, get_session_targets. \
                 Advice: health_advice."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_params(goal: &str) -> CalculatePlanParams {
        CalculatePlanParams {
            birth_date: "1990-05-20".to_string(),
            gender: "male".to_string(),
            weight_kg: 80.0,
            height_cm: 180.0,
            goal: goal.to_string(),
            activity_level: Some("active".to_string()),
            target_date: None,
        }
    }

    #[test]
    fn test_calculate_plan_records_session() {
        let service = NutriService::new(Config::default());
        assert!(!service.session().unwrap().is_set());

        service.calculate_plan(Parameters(plan_params("gain"))).unwrap();
        let targets = service.session().unwrap().get().unwrap();
        assert!((targets.protein_grams - 144.0).abs() < 1e-9);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let first = NutriService::new(Config::default());
        let second = NutriService::new(Config::default());
        first.calculate_plan(Parameters(plan_params("lose"))).unwrap();

        assert!(first.session().unwrap().is_set());
        assert!(!second.session().unwrap().is_set());

        // Clones belong to the same session
        let clone = first.clone();
        assert!(clone.session().unwrap().is_set());
    }

    #[test]
    fn test_invalid_plan_is_invalid_params() {
        let service = NutriService::new(Config::default());
        let mut params = plan_params("maintain");
        params.height_cm = 300.0;
        assert!(service.calculate_plan(Parameters(params)).is_err());
        assert!(!service.session().unwrap().is_set());
    }

    #[test]
    fn test_unknown_food_is_reported_not_raised() {
        let service = NutriService::new(Config::default());
        let params = LookupFoodParams { name: "dragonfruit".to_string(), grams: 100.0 };
        assert!(service.lookup_food(Parameters(params)).is_ok());

        let params = LookupFoodParams { name: "rice".to_string(), grams: 0.0 };
        assert!(service.lookup_food(Parameters(params)).is_err());

        let params = LookupFoodParams { name: "apple".to_string(), grams: f64::MAX };
        assert!(service.lookup_food(Parameters(params)).is_err());
    }

    #[test]
    fn test_error_result_mapping() {
        assert!(error_result(NutriError::EmptyInput).is_ok());
        assert!(error_result(NutriError::InvalidDate("x".into())).is_err());
    }

    #[test]
    fn test_server_info() {
        let service = NutriService::new(Config::default());
        let info = service.get_info();
        assert_eq!(info.server_info.name, "nutriplan");
        assert!(info.instructions.unwrap().contains("lookup_food"));
    }
}
