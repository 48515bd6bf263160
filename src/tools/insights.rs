//! AI-assisted tools: coaching insights, meal photo analysis, goal advisor.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{info, warn};

use super::analytics::load_history;
use super::meals::{log_meal, LogMealResponse};
use crate::analytics::{summarize_trend, TrendSummary};
use crate::db::Database;
use crate::insights::prompt::{
    advisor_prompt, goal_recommendation_schema, insights_prompt, macro_suggestion_schema, PHOTO_ANALYSIS_PROMPT,
};
use crate::insights::{
    combine_suggestions, image, GeminiClient, GoalRecommendation, InsightsError, MacroSuggestion, Part,
};
use crate::models::{MealSource, Profile};
use crate::validation::{self, AdvisorInput, MealMacrosInput, MAX_DESCRIPTION_CHARS};

pub const MAX_PHOTOS: usize = 10;

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: String,
    pub trend: TrendSummary,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct PhotoFailure {
    pub image: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct PhotoAnalysisResponse {
    /// One entry per successfully analysed photo, in input order
    pub items: Vec<MacroSuggestion>,
    pub total: MacroSuggestion,
    pub failures: Vec<PhotoFailure>,
    pub logged: Option<LogMealResponse>,
    /// Why `log_as` could not log the combined meal; the estimate above is still valid
    pub log_error: Option<String>,
}

/// Coaching insights for the last `window_days`; needs goals and at least one logged day
pub async fn generate_insights(
    db: &Database,
    client: &GeminiClient,
    today: NaiveDate,
    window_days: u32,
) -> Result<InsightsResponse, String> {
    let profile = {
        let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
        Profile::get(&conn)
            .map_err(|e| format!("Failed to get goals: {}", e))?
            .ok_or_else(|| InsightsError::NoProfile.to_string())?
    };

    let history = load_history(db, today, window_days)?;
    let trend = summarize_trend(&history, today, window_days);
    if trend.days_tracked == 0 {
        return Err(InsightsError::NoData(window_days).to_string());
    }

    let prompt = insights_prompt(&profile, &trend);
    let insights = client.generate_text(&prompt).await.map_err(|e| e.to_string())?;

    info!(days_tracked = trend.days_tracked, chars = insights.len(), "Generated insights");
    Ok(InsightsResponse {
        insights,
        trend,
        model: client.model().to_string(),
    })
}

async fn analyze_one(client: &GeminiClient, source: &str) -> Result<MacroSuggestion, InsightsError> {
    let photo = image::load(source).await?;
    client
        .generate_json(
            vec![Part::text(PHOTO_ANALYSIS_PROMPT), Part::image(&photo)],
            macro_suggestion_schema(),
        )
        .await
}

/// Estimate macros for each photo and sum them into one meal.
///
/// A photo that fails is reported and skipped; the call fails only when no
/// photo could be analysed. With `log_as` set the combined meal is logged at
/// `now` with source `ai_photo`.
pub async fn analyze_meal_photos(
    db: &Database,
    client: &GeminiClient,
    now: NaiveDateTime,
    images: &[String],
    log_as: Option<&str>,
) -> Result<PhotoAnalysisResponse, String> {
    if images.is_empty() {
        return Err("At least one image is required".to_string());
    }
    if images.len() > MAX_PHOTOS {
        return Err(format!("At most {} images can be analysed at once", MAX_PHOTOS));
    }
    if let Some(meal_type) = log_as {
        validation::parse_meal_type(meal_type).map_err(|e| e.to_string())?;
    }

    let mut items = Vec::new();
    let mut failures = Vec::new();
    for source in images {
        match analyze_one(client, source).await {
            Ok(suggestion) => items.push(suggestion),
            Err(e) => {
                warn!(image = %source, error = %e, "Photo analysis failed");
                failures.push(PhotoFailure {
                    image: source.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    let total = combine_suggestions(&items).ok_or_else(|| {
        let reasons: Vec<_> = failures.iter().map(|f| f.error.as_str()).collect();
        format!("Failed to analyse any image: {}", reasons.join("; "))
    })?;

    let (logged, log_error) = match log_as {
        Some(meal_type) => match log_suggestion(db, now, meal_type, &total) {
            Ok(logged) => (Some(logged), None),
            Err(e) => {
                warn!(error = %e, "Could not log analysed meal");
                (None, Some(e))
            }
        },
        None => (None, None),
    };

    info!(analysed = items.len(), failed = failures.len(), calories = total.calories, "Analysed meal photos");
    Ok(PhotoAnalysisResponse {
        items,
        total,
        failures,
        logged,
        log_error,
    })
}

/// Cuts a joined description down to the meal limit, ending with "..."
fn fit_description(description: &str) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        return description.to_string();
    }
    let kept: String = description.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
    format!("{}...", kept.trim_end())
}

fn log_suggestion(
    db: &Database,
    now: NaiveDateTime,
    meal_type: &str,
    total: &MacroSuggestion,
) -> Result<LogMealResponse, String> {
    log_meal(
        db,
        now,
        meal_type,
        &fit_description(&total.description),
        MealMacrosInput {
            calories: i64::from(total.calories),
            protein_g: i64::from(total.protein_g),
            carbs_g: i64::from(total.carbs_g),
            fat_g: i64::from(total.fat_g),
        },
        MealSource::AiPhoto,
    )
}

/// Ask Gemini for daily targets; the result is only a suggestion and is not saved
pub async fn recommend_goals(client: &GeminiClient, input: AdvisorInput) -> Result<GoalRecommendation, String> {
    let answers = validation::validate_advisor(&input).map_err(|e| e.to_string())?;

    let recommendation: GoalRecommendation = client
        .generate_json(vec![Part::text(advisor_prompt(&answers))], goal_recommendation_schema())
        .await
        .map_err(|e| e.to_string())?;

    info!(calorie_goal = recommendation.calorie_goal, "Generated goal recommendation");
    Ok(recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::temp_database;
    use crate::models::{ActivityLevel, MacroGoals, ProfileSet};

    fn client() -> GeminiClient {
        GeminiClient::new("test-key", "gemini-test")
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[tokio::test]
    async fn test_insights_require_profile() {
        let (_dir, db) = temp_database();
        let err = generate_insights(&db, &client(), today(), 30).await.unwrap_err();
        assert_eq!(err, InsightsError::NoProfile.to_string());
    }

    #[tokio::test]
    async fn test_insights_require_data() {
        let (_dir, db) = temp_database();
        db.with_conn(|conn| {
            Profile::set(
                conn,
                &ProfileSet {
                    age: 30,
                    height_cm: 170,
                    weight_kg: 65.0,
                    activity_level: ActivityLevel::Light,
                    goals: MacroGoals {
                        calories: 2000,
                        protein_g: 120,
                        carbs_g: 220,
                        fat_g: 65,
                    },
                },
            )
        })
        .unwrap();

        let err = generate_insights(&db, &client(), today(), 30).await.unwrap_err();
        assert_eq!(err, "No meals logged in the last 30 days");
    }

    #[tokio::test]
    async fn test_photo_input_checks() {
        let (_dir, db) = temp_database();
        let now = today().and_hms_opt(12, 0, 0).unwrap();

        assert!(analyze_meal_photos(&db, &client(), now, &[], None).await.is_err());

        let too_many = vec!["a.jpg".to_string(); MAX_PHOTOS + 1];
        assert!(analyze_meal_photos(&db, &client(), now, &too_many, None).await.is_err());

        let one = vec!["a.jpg".to_string()];
        let err = analyze_meal_photos(&db, &client(), now, &one, Some("brunch")).await.unwrap_err();
        assert!(err.starts_with("meal_type"));
    }

    #[tokio::test]
    async fn test_photo_all_images_unreadable() {
        let (dir, db) = temp_database();
        let now = today().and_hms_opt(12, 0, 0).unwrap();
        let images = vec![
            dir.path().join("missing.jpg").display().to_string(),
            dir.path().join("notes.txt").display().to_string(),
        ];

        let err = analyze_meal_photos(&db, &client(), now, &images, None).await.unwrap_err();
        assert!(err.starts_with("Failed to analyse any image"));
    }

    fn plate(description: &str, calories: u32) -> MacroSuggestion {
        MacroSuggestion {
            description: description.to_string(),
            calories,
            protein_g: 30,
            carbs_g: 60,
            fat_g: 20,
        }
    }

    #[test]
    fn test_long_combined_description_is_logged() {
        let (_dir, db) = temp_database();
        let now = today().and_hms_opt(12, 0, 0).unwrap();
        let total = combine_suggestions(&[plate(&"a".repeat(150), 500), plate(&"b".repeat(150), 400)]).unwrap();
        assert_eq!(total.description.chars().count(), 302);

        let logged = log_suggestion(&db, now, "lunch", &total).unwrap();
        assert_eq!(logged.description.chars().count(), MAX_DESCRIPTION_CHARS);
        assert!(logged.description.ends_with("..."));
        assert_eq!(logged.macros.calories, 900);
        assert_eq!(logged.source, MealSource::AiPhoto);
    }

    #[test]
    fn test_fit_description_keeps_short_text() {
        assert_eq!(fit_description("Rice, beans"), "Rice, beans");
        assert_eq!(fit_description(&"x".repeat(MAX_DESCRIPTION_CHARS)).len(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_oversized_meal_reports_log_error() {
        let (_dir, db) = temp_database();
        let now = today().and_hms_opt(12, 0, 0).unwrap();
        let total = combine_suggestions(&[plate("Feast", 6000), plate("Dessert table", 5000)]).unwrap();

        let err = log_suggestion(&db, now, "dinner", &total).unwrap_err();
        assert!(err.starts_with("calories"));
        let count = db.with_conn(crate::models::MealEntry::count).unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_advisor_validates_before_calling() {
        let input = AdvisorInput {
            age: 15,
            sex: "male".to_string(),
            height_cm: 170,
            weight_kg: 60.0,
            activity_level: "moderate".to_string(),
            goal: "maintain".to_string(),
        };
        let err = recommend_goals(&client(), input).await.unwrap_err();
        assert!(err.starts_with("age"));
    }
}
