//! Data models
//!
//! Rust structs representing database entities.

mod catalog;
mod food;
mod macros;
mod meal_entry;
mod profile;

pub use catalog::{search_catalog, CatalogFood, CATALOG, MIN_CATALOG_QUERY_CHARS};
pub use food::{Food, FoodCreate};
pub use macros::{MacroTotals, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
pub use meal_entry::{MealEntry, MealEntryCreate, MealSource, MealType, TIMESTAMP_FORMAT};
pub use profile::{ActivityLevel, MacroGoals, Profile, ProfileSet};
