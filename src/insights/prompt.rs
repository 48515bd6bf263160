//! Prompt text and reply shapes for the three Gemini features.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;

use crate::analytics::TrendSummary;
use crate::models::{ActivityLevel, MacroTotals, Profile};
use crate::validation::{AdvisorAnswers, Sex, WeightGoal};

fn rounded_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom("expected a finite number"));
    }
    Ok(value.round().clamp(0.0, f64::from(u32::MAX)) as u32)
}

/// Estimated contents of one meal photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSuggestion {
    pub description: String,
    #[serde(deserialize_with = "rounded_u32")]
    pub calories: u32,
    #[serde(deserialize_with = "rounded_u32")]
    pub protein_g: u32,
    #[serde(deserialize_with = "rounded_u32")]
    pub carbs_g: u32,
    #[serde(deserialize_with = "rounded_u32")]
    pub fat_g: u32,
}

impl MacroSuggestion {
    pub fn macros(&self) -> MacroTotals {
        MacroTotals::new(self.calories, self.protein_g, self.carbs_g, self.fat_g)
    }
}

/// Sums per-photo suggestions into one meal; descriptions are joined with ", "
pub fn combine_suggestions(suggestions: &[MacroSuggestion]) -> Option<MacroSuggestion> {
    if suggestions.is_empty() {
        return None;
    }
    let totals: MacroTotals = suggestions.iter().map(MacroSuggestion::macros).sum();
    let description = suggestions
        .iter()
        .map(|s| s.description.trim())
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    Some(MacroSuggestion {
        description,
        calories: totals.calories,
        protein_g: totals.protein_g,
        carbs_g: totals.carbs_g,
        fat_g: totals.fat_g,
    })
}

pub const PHOTO_ANALYSIS_PROMPT: &str = "You are a nutrition assistant. Identify the food in this photo \
and estimate the portion shown. Reply with a short description (under 200 characters) and the \
estimated calories and grams of protein, carbohydrates and fat for the whole portion. Use whole numbers.";

pub fn macro_suggestion_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "description": {"type": "string"},
            "calories": {"type": "integer"},
            "protein_g": {"type": "integer"},
            "carbs_g": {"type": "integer"},
            "fat_g": {"type": "integer"}
        },
        "required": ["description", "calories", "protein_g", "carbs_g", "fat_g"]
    })
}

pub fn insights_prompt(profile: &Profile, trend: &TrendSummary) -> String {
    let goals = &profile.goals;
    let weekly = &trend.weekly;
    let missing = if trend.missing_days.is_empty() {
        "none".to_string()
    } else {
        trend
            .missing_days
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "You are a supportive nutrition coach. Review this person's recent tracking and give 3 to 5 \
specific, practical suggestions. Mention what is going well before what to improve. Keep it under 300 words.

Profile: {age} years, {height} cm, {weight:.1} kg, activity: {activity}.
Daily goals: {cal_goal} kcal, protein {p_goal} g, carbs {c_goal} g, fat {f_goal} g.

Last 7 days ({days_logged} days logged): average {avg_cal} kcal, protein {avg_p} g, carbs {avg_c} g, fat {avg_f} g, \
{total_cal} kcal in total.
Macro split of calories: protein {rp}%, carbs {rc}%, fat {rf}%.
Logging streak: current {current} days, longest {longest} days.
Last {window} days: {tracked} days tracked. Days without entries: {missing}.",
        age = profile.age,
        height = profile.height_cm,
        weight = profile.weight_kg,
        activity = profile.activity_level.describe(),
        cal_goal = goals.calories,
        p_goal = goals.protein_g,
        c_goal = goals.carbs_g,
        f_goal = goals.fat_g,
        days_logged = weekly.days_logged,
        avg_cal = weekly.avg_calories,
        avg_p = weekly.avg_protein,
        avg_c = weekly.avg_carbs,
        avg_f = weekly.avg_fat,
        total_cal = weekly.total_calories,
        rp = trend.ratios.protein,
        rc = trend.ratios.carbs,
        rf = trend.ratios.fat,
        current = trend.streak.current_streak,
        longest = trend.streak.longest_streak,
        window = trend.window_days,
        tracked = trend.days_tracked,
        missing = missing,
    )
}

/// Recommended daily targets from the goal advisor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRecommendation {
    #[serde(deserialize_with = "rounded_u32")]
    pub calorie_goal: u32,
    #[serde(deserialize_with = "rounded_u32")]
    pub protein_g: u32,
    #[serde(deserialize_with = "rounded_u32")]
    pub carbs_g: u32,
    #[serde(deserialize_with = "rounded_u32")]
    pub fat_g: u32,
    pub explanation: String,
}

pub fn goal_recommendation_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "calorie_goal": {"type": "integer"},
            "protein_g": {"type": "integer"},
            "carbs_g": {"type": "integer"},
            "fat_g": {"type": "integer"},
            "explanation": {"type": "string"}
        },
        "required": ["calorie_goal", "protein_g", "carbs_g", "fat_g", "explanation"]
    })
}

fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Very => 1.725,
        ActivityLevel::Super => 1.9,
    }
}

fn goal_factor(goal: WeightGoal) -> f64 {
    match goal {
        WeightGoal::Lose => 0.8,
        WeightGoal::Maintain => 1.0,
        WeightGoal::Gain => 1.1,
    }
}

/// Mifflin-St Jeor maintenance calories adjusted for the weight goal
pub fn estimate_calories(answers: &AdvisorAnswers) -> u32 {
    let base = 10.0 * answers.weight_kg + 6.25 * f64::from(answers.height_cm) - 5.0 * f64::from(answers.age);
    let bmr = match answers.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    };
    let tdee = bmr * activity_multiplier(answers.activity_level);
    (tdee * goal_factor(answers.goal)).round().max(0.0) as u32
}

pub fn advisor_prompt(answers: &AdvisorAnswers) -> String {
    let sex = match answers.sex {
        Sex::Male => "male",
        Sex::Female => "female",
    };
    let goal = match answers.goal {
        WeightGoal::Lose => "lose weight (about a 20% calorie deficit)",
        WeightGoal::Maintain => "maintain weight",
        WeightGoal::Gain => "gain muscle (about a 10% calorie surplus)",
    };

    format!(
        "You are a registered dietitian. Recommend daily calorie and macronutrient targets for this person.

Age: {age}
Sex: {sex}
Height: {height} cm
Weight: {weight:.1} kg
Activity: {activity}
Goal: {goal}

A Mifflin-St Jeor estimate for this goal is {estimate} kcal per day. Use it as a starting point. \
Give protein, carbohydrate and fat targets in grams that add up to roughly the calorie target \
(4 kcal per gram of protein and carbohydrate, 9 per gram of fat), and a two or three sentence explanation.",
        age = answers.age,
        sex = sex,
        height = answers.height_cm,
        weight = answers.weight_kg,
        activity = answers.activity_level.describe(),
        goal = goal,
        estimate = estimate_calories(answers),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::summarize_trend;
    use crate::insights::gemini::parse_json_reply;
    use crate::models::MacroGoals;
    use chrono::NaiveDate;

    fn suggestion(description: &str, calories: u32) -> MacroSuggestion {
        MacroSuggestion {
            description: description.to_string(),
            calories,
            protein_g: 10,
            carbs_g: 20,
            fat_g: 5,
        }
    }

    #[test]
    fn test_combine_suggestions() {
        assert!(combine_suggestions(&[]).is_none());

        let combined = combine_suggestions(&[suggestion("Rice", 200), suggestion("Grilled chicken", 250)]).unwrap();
        assert_eq!(combined.description, "Rice, Grilled chicken");
        assert_eq!(combined.calories, 450);
        assert_eq!(combined.protein_g, 20);
        assert_eq!(combined.fat_g, 10);
    }

    #[test]
    fn test_suggestion_rounds_numbers() {
        let parsed: MacroSuggestion = parse_json_reply(
            r#"{"description": "Oatmeal", "calories": 310.6, "protein_g": 10, "carbs_g": 54.2, "fat_g": -1}"#,
        )
        .unwrap();
        assert_eq!(parsed.calories, 311);
        assert_eq!(parsed.carbs_g, 54);
        assert_eq!(parsed.fat_g, 0);
    }

    #[test]
    fn test_insights_prompt_mentions_metrics() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let profile = Profile {
            age: 35,
            height_cm: 180,
            weight_kg: 82.5,
            activity_level: ActivityLevel::Moderate,
            goals: MacroGoals {
                calories: 2400,
                protein_g: 160,
                carbs_g: 260,
                fat_g: 80,
            },
            updated_at: "2025-03-01 08:00:00".to_string(),
        };
        let trend = summarize_trend(&[], today, 3);

        let prompt = insights_prompt(&profile, &trend);
        assert!(prompt.contains("2400 kcal"));
        assert!(prompt.contains("82.5 kg"));
        assert!(prompt.contains("2025-03-07, 2025-03-08, 2025-03-09"));
        assert!(prompt.contains("current 0 days"));
    }

    fn answers(sex: Sex, goal: WeightGoal) -> AdvisorAnswers {
        AdvisorAnswers {
            age: 30,
            sex,
            height_cm: 180,
            weight_kg: 80.0,
            activity_level: ActivityLevel::Sedentary,
            goal,
        }
    }

    #[test]
    fn test_estimate_calories() {
        // BMR 800 + 1125 - 150 + 5 = 1780, x1.2 = 2136
        assert_eq!(estimate_calories(&answers(Sex::Male, WeightGoal::Maintain)), 2136);
        assert_eq!(estimate_calories(&answers(Sex::Male, WeightGoal::Lose)), 1709);
        // 1614 x 1.2 = 1936.8
        assert_eq!(estimate_calories(&answers(Sex::Female, WeightGoal::Maintain)), 1937);
    }

    #[test]
    fn test_advisor_prompt() {
        let prompt = advisor_prompt(&answers(Sex::Female, WeightGoal::Gain));
        assert!(prompt.contains("Sex: female"));
        assert!(prompt.contains("10% calorie surplus"));
        assert!(prompt.contains("2130 kcal"));
    }

    #[test]
    fn test_recommendation_parse() {
        let parsed: GoalRecommendation = parse_json_reply(
            r#"{"calorie_goal": 2100, "protein_g": 150, "carbs_g": 220, "fat_g": 70, "explanation": "Balanced."}"#,
        )
        .unwrap();
        assert_eq!(parsed.calorie_goal, 2100);
        assert_eq!(parsed.explanation, "Balanced.");
    }
}
