//! Macrolog MCP Server Implementation
//!
//! Exposes meal logging, the food library, goals, analytics and the AI
//! features as MCP tools.

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::db::Database;
use crate::insights::{GeminiClient, InsightsError};
use crate::models::{FoodCreate, MealSource};
use crate::tools::status::StatusTracker;
use crate::tools::{analytics, food_library, goals, insights, meals};
use crate::validation::{parse_date, AdvisorInput, GoalsInput, MealMacrosInput};

/// Macrolog MCP Service
#[derive(Clone)]
pub struct MacrologService {
    status_tracker: Arc<StatusTracker>,
    database: Database,
    gemini: Option<Arc<GeminiClient>>,
    trend_days: u32,
    tool_router: ToolRouter<MacrologService>,
}

impl MacrologService {
    pub fn new(config: &Config, database: Database) -> Self {
        let gemini = GeminiClient::from_config(config).ok().map(Arc::new);
        Self {
            status_tracker: Arc::new(StatusTracker::new(
                config.database_path.clone(),
                config.gemini_model.clone(),
                gemini.is_some(),
            )),
            database,
            gemini,
            trend_days: config.trend_days,
            tool_router: Self::tool_router(),
        }
    }

    fn gemini(&self) -> Result<&GeminiClient, McpError> {
        self.gemini
            .as_deref()
            .ok_or_else(|| McpError::internal_error(InsightsError::MissingApiKey.to_string(), None))
    }
}

/// Local wall-clock time, truncated to whole seconds
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn tool_error(e: String) -> McpError {
    McpError::internal_error(e, None)
}

fn optional_date(raw: Option<&str>) -> Result<NaiveDate, McpError> {
    match raw {
        Some(s) => parse_date("date", s).map_err(|e| tool_error(e.to_string())),
        None => Ok(today()),
    }
}

// ============================================================================
// Meal Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogMealParams {
    /// breakfast, lunch, dinner, snack or supplement
    pub meal_type: String,
    pub description: String,
    pub calories: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogLibraryMealParams {
    pub meal_type: String,
    pub food_id: i64,
    /// Portion size in grams
    pub grams: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BackfillMealParams {
    /// Day to log the meal on (YYYY-MM-DD), within the last year
    pub target_date: String,
    pub meal_type: String,
    pub description: String,
    pub calories: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecentMealsParams {
    #[serde(default = "default_recent_limit")]
    pub limit: i64,
}

fn default_recent_limit() -> i64 { meals::DEFAULT_RECENT_LIMIT }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IdParams {
    pub id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DailySummaryParams {
    /// YYYY-MM-DD; defaults to today
    pub date: Option<String>,
}

// ============================================================================
// Food Library Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddFoodParams {
    pub name: String,
    /// Per 100 g
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFoodsParams {
    pub query: String,
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

fn default_search_limit() -> i64 { 20 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CatalogSearchParams {
    /// At least two characters
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodsParams {
    #[serde(default = "default_list_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_list_limit() -> i64 { 50 }

// ============================================================================
// Goals Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetGoalsParams {
    pub age: i64,
    pub height_cm: i64,
    pub weight_kg: f64,
    /// sedentary, light, moderate, very or super
    pub activity_level: String,
    pub calorie_goal: i64,
    pub protein_goal_g: i64,
    pub carbs_goal_g: i64,
    pub fat_goal_g: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecommendGoalsParams {
    pub age: i64,
    /// male or female
    pub sex: String,
    pub height_cm: i64,
    pub weight_kg: f64,
    pub activity_level: String,
    /// lose, maintain or gain
    pub goal: String,
}

// ============================================================================
// Analytics Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TrendParams {
    /// Lookback window in days; defaults to the configured trend window
    pub days: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MissingDaysParams {
    #[serde(default = "default_missing_days")]
    pub days_back: u32,
}

fn default_missing_days() -> u32 { 30 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzePhotosParams {
    /// Local image paths or data URLs (jpg, png, webp, heic), at most 10
    pub images: Vec<String>,
    /// Log the combined estimate right away as this meal type
    pub log_as: Option<String>,
}

#[tool_router]
impl MacrologService {
    // --- Status ---

    #[tool(description = "Get the current status of the macrolog service including build info, database counts, today's totals, AI availability and process information")]
    async fn macrolog_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status(&self.database, today()).map_err(tool_error)?;
        to_json(&status)
    }

    #[tool(description = "Get instructions for logging meals and reading analytics. Call this when starting a logging session or when unsure which tool to use.")]
    fn meal_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::MEAL_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(MEAL_INSTRUCTIONS)]))
    }

    // --- Meals ---

    #[tool(description = "Log a meal with known calories and macros (whole grams) at the current time")]
    fn log_meal(&self, Parameters(p): Parameters<LogMealParams>) -> Result<CallToolResult, McpError> {
        let macros = MealMacrosInput { calories: p.calories, protein_g: p.protein_g, carbs_g: p.carbs_g, fat_g: p.fat_g };
        let result = meals::log_meal(&self.database, now(), &p.meal_type, &p.description, macros, MealSource::Manual)
            .map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Log a portion of a food from the library; macros are scaled from the per-100g values")]
    fn log_library_meal(&self, Parameters(p): Parameters<LogLibraryMealParams>) -> Result<CallToolResult, McpError> {
        let result = meals::log_library_meal(&self.database, now(), &p.meal_type, p.food_id, p.grams).map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Log a meal on a past day (not in the future, at most one year back). Use missing_days to find days without entries.")]
    fn backfill_meal(&self, Parameters(p): Parameters<BackfillMealParams>) -> Result<CallToolResult, McpError> {
        let macros = MealMacrosInput { calories: p.calories, protein_g: p.protein_g, carbs_g: p.carbs_g, fat_g: p.fat_g };
        let result = meals::backfill_meal(&self.database, today(), &p.target_date, &p.meal_type, &p.description, macros)
            .map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "List the most recently logged meals, newest first")]
    fn recent_meals(&self, Parameters(p): Parameters<RecentMealsParams>) -> Result<CallToolResult, McpError> {
        let result = meals::recent_meals(&self.database, p.limit).map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Delete a logged meal")]
    fn delete_meal(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = meals::delete_meal(&self.database, p.id).map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Get the meals and macro totals for a day (default today) with progress against goals")]
    fn daily_summary(&self, Parameters(p): Parameters<DailySummaryParams>) -> Result<CallToolResult, McpError> {
        let date = optional_date(p.date.as_deref())?;
        let result = meals::daily_summary(&self.database, date).map_err(tool_error)?;
        to_json(&result)
    }

    // --- Food Library ---

    #[tool(description = "Add a food to the personal library with macros per 100 g")]
    fn add_food(&self, Parameters(p): Parameters<AddFoodParams>) -> Result<CallToolResult, McpError> {
        let data = FoodCreate { name: p.name, calories: p.calories, protein_g: p.protein_g, carbs_g: p.carbs_g, fat_g: p.fat_g };
        let result = food_library::add_food(&self.database, data).map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Search the food library by name")]
    fn search_foods(&self, Parameters(p): Parameters<SearchFoodsParams>) -> Result<CallToolResult, McpError> {
        let result = food_library::search_foods(&self.database, &p.query, p.limit).map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Suggest up to 5 foods (macros per 100g) from the built-in catalog matching a name; use the values with add_food, log_meal or backfill_meal")]
    fn search_catalog(&self, Parameters(p): Parameters<CatalogSearchParams>) -> Result<CallToolResult, McpError> {
        to_json(&food_library::search_catalog(&p.query))
    }

    #[tool(description = "List the food library alphabetically with pagination")]
    fn list_foods(&self, Parameters(p): Parameters<ListFoodsParams>) -> Result<CallToolResult, McpError> {
        let result = food_library::list_foods(&self.database, p.limit, p.offset).map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Delete a food from the library; meals already logged are not affected")]
    fn delete_food(&self, Parameters(p): Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        let result = food_library::delete_food(&self.database, p.id).map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Add the built-in catalog of common foods to the library; foods already present are skipped")]
    fn seed_food_library(&self) -> Result<CallToolResult, McpError> {
        let result = food_library::seed_food_library(&self.database).map_err(tool_error)?;
        to_json(&result)
    }

    // --- Goals ---

    #[tool(description = "Get the profile and daily goals; has_profile is false until set_goals has been called")]
    fn get_goals(&self) -> Result<CallToolResult, McpError> {
        let result = goals::get_goals(&self.database).map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Set the profile and daily calorie and macro goals (replaces previous goals)")]
    fn set_goals(&self, Parameters(p): Parameters<SetGoalsParams>) -> Result<CallToolResult, McpError> {
        let input = GoalsInput {
            age: p.age, height_cm: p.height_cm, weight_kg: p.weight_kg, activity_level: p.activity_level,
            calorie_goal: p.calorie_goal, protein_goal_g: p.protein_goal_g, carbs_goal_g: p.carbs_goal_g, fat_goal_g: p.fat_goal_g,
        };
        let result = goals::set_goals(&self.database, input).map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Ask the AI goal advisor for daily calorie and macro targets. The recommendation is not saved; call set_goals to apply it.")]
    async fn recommend_goals(&self, Parameters(p): Parameters<RecommendGoalsParams>) -> Result<CallToolResult, McpError> {
        let client = self.gemini()?;
        let input = AdvisorInput {
            age: p.age, sex: p.sex, height_cm: p.height_cm, weight_kg: p.weight_kg,
            activity_level: p.activity_level, goal: p.goal,
        };
        let result = insights::recommend_goals(client, input).await.map_err(tool_error)?;
        to_json(&result)
    }

    // --- Analytics ---

    #[tool(description = "Get per-day totals, weekly averages, logging streaks, macro split and missing days for a lookback window")]
    fn nutrition_trend(&self, Parameters(p): Parameters<TrendParams>) -> Result<CallToolResult, McpError> {
        let days = p.days.unwrap_or(self.trend_days);
        let result = analytics::nutrition_trend(&self.database, today(), days).map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "List past days (excluding today) with no logged meals, oldest first")]
    fn missing_days(&self, Parameters(p): Parameters<MissingDaysParams>) -> Result<CallToolResult, McpError> {
        let result = analytics::missing_days(&self.database, today(), p.days_back).map_err(tool_error)?;
        to_json(&result)
    }

    // --- AI ---

    #[tool(description = "Generate AI coaching insights from the goals and the recent trend. Requires goals and at least one logged day.")]
    async fn generate_insights(&self, Parameters(p): Parameters<TrendParams>) -> Result<CallToolResult, McpError> {
        let client = self.gemini()?;
        let days = p.days.unwrap_or(self.trend_days);
        let result = insights::generate_insights(&self.database, client, today(), days).await.map_err(tool_error)?;
        to_json(&result)
    }

    #[tool(description = "Estimate calories and macros from meal photos. Each photo is analysed separately and the results are summed; set log_as to log the combined meal.")]
    async fn analyze_meal_photos(&self, Parameters(p): Parameters<AnalyzePhotosParams>) -> Result<CallToolResult, McpError> {
        let client = self.gemini()?;
        let result = insights::analyze_meal_photos(&self.database, client, now(), &p.images, p.log_as.as_deref())
            .await
            .map_err(tool_error)?;
        to_json(&result)
    }
}

#[tool_handler]
impl ServerHandler for MacrologService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "macrolog".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Macrolog".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Macrolog - local meal and macro tracking. \
                 IMPORTANT: Call meal_instructions before logging. \
                 Meals: log_meal/log_library_meal/backfill_meal/recent_meals/delete_meal, daily_summary. \
                 Library: add_food/search_foods/list_foods/delete_food, search_catalog, seed_food_library. \
                 Goals: get_goals/set_goals, recommend_goals (AI). \
                 Analytics: nutrition_trend, missing_days. \
                 AI: generate_insights, analyze_meal_photos (need GEMINI_API_KEY). \
                 Status: macrolog_status."
                    .into(),
            ),
        }
    }
}
