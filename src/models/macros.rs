//! Macro totals
//!
//! Calories plus the three macronutrients, in whole units. Shared by meal
//! entries, daily summaries and library portions.

use serde::{Deserialize, Serialize};

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: u64 = 4;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: u64 = 4;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: u64 = 9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl MacroTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(calories: u32, protein_g: u32, carbs_g: u32, fat_g: u32) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Calories implied by the macronutrients alone (4/4/9 kcal per gram)
    pub fn macro_calories(&self) -> u64 {
        u64::from(self.protein_g) * KCAL_PER_G_PROTEIN
            + u64::from(self.carbs_g) * KCAL_PER_G_CARBS
            + u64::from(self.fat_g) * KCAL_PER_G_FAT
    }
}

impl std::ops::Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, other: MacroTotals) -> MacroTotals {
        MacroTotals {
            calories: self.calories.saturating_add(other.calories),
            protein_g: self.protein_g.saturating_add(other.protein_g),
            carbs_g: self.carbs_g.saturating_add(other.carbs_g),
            fat_g: self.fat_g.saturating_add(other.fat_g),
        }
    }
}

impl std::iter::Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroTotals::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_totals() {
        let total: MacroTotals = vec![
            MacroTotals::new(500, 30, 60, 10),
            MacroTotals::new(250, 20, 5, 15),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, MacroTotals::new(750, 50, 65, 25));
    }

    #[test]
    fn test_add_saturates() {
        let total = MacroTotals::new(u32::MAX, 1, 1, 1) + MacroTotals::new(10, 1, 1, 1);
        assert_eq!(total.calories, u32::MAX);
        assert_eq!(total.protein_g, 2);
    }

    #[test]
    fn test_macro_calories() {
        assert_eq!(MacroTotals::new(0, 50, 50, 50).macro_calories(), 850);
    }
}
