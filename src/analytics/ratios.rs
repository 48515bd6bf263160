use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::daily::DailyMacroTotal;
use super::weekly::week_window;
use crate::models::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Percent of macro-derived calories per macronutrient. Each value is rounded on
/// its own, so the three may sum to 99 or 101.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

fn percent(part: u64, total: u64) -> u32 {
    (part as f64 / total as f64 * 100.0).round() as u32
}

/// Macro split over the same weekly window as the weekly summary
pub fn calculate_macro_ratios(history: &[DailyMacroTotal], today: NaiveDate) -> MacroRatios {
    let (mut protein_kcal, mut carbs_kcal, mut fat_kcal) = (0u64, 0u64, 0u64);
    for day in week_window(history, today) {
        protein_kcal += u64::from(day.protein_grams) * KCAL_PER_G_PROTEIN;
        carbs_kcal += u64::from(day.carb_grams) * KCAL_PER_G_CARBS;
        fat_kcal += u64::from(day.fat_grams) * KCAL_PER_G_FAT;
    }

    let total = protein_kcal + carbs_kcal + fat_kcal;
    if total == 0 {
        return MacroRatios::default();
    }

    MacroRatios {
        protein: percent(protein_kcal, total),
        carbs: percent(carbs_kcal, total),
        fat: percent(fat_kcal, total),
    }
}
