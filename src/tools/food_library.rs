//! Food Library MCP Tools
//!
//! Personal library of foods with macros per 100g.

use serde::Serialize;
use tracing::info;

use crate::db::Database;
use crate::models::{search_catalog as search_builtin, CatalogFood, Food, FoodCreate, CATALOG};

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_PER_100G_CALORIES: f64 = 900.0;
pub const MAX_PER_100G_MACRO: f64 = 100.0;

#[derive(Debug, Serialize)]
pub struct AddFoodResponse {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct SearchFoodsResponse {
    pub foods: Vec<Food>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CatalogSearchResponse {
    pub foods: Vec<CatalogFood>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub foods: Vec<Food>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteFoodResponse {
    pub success: bool,
    pub deleted_id: i64,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub inserted: usize,
    pub skipped: usize,
}

fn check_per_100g(field: &str, value: f64, max: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} cannot be negative", field));
    }
    if value > max {
        return Err(format!("{} must be at most {} per 100g", field, max));
    }
    Ok(())
}

pub fn add_food(db: &Database, data: FoodCreate) -> Result<AddFoodResponse, String> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err("Food name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(format!("Food name must be at most {} characters", MAX_NAME_CHARS));
    }

    check_per_100g("calories", data.calories, MAX_PER_100G_CALORIES)?;
    check_per_100g("protein_g", data.protein_g, MAX_PER_100G_MACRO)?;
    check_per_100g("carbs_g", data.carbs_g, MAX_PER_100G_MACRO)?;
    check_per_100g("fat_g", data.fat_g, MAX_PER_100G_MACRO)?;

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    if Food::get_by_name(&conn, name)
        .map_err(|e| format!("Database error: {}", e))?
        .is_some()
    {
        return Err(format!("A food named '{}' already exists", name));
    }

    let food = Food::create(
        &conn,
        &FoodCreate {
            name: name.to_string(),
            ..data
        },
    )
    .map_err(|e| format!("Failed to create food: {}", e))?;

    info!(id = food.id, name = %food.name, "Added food");
    Ok(AddFoodResponse {
        id: food.id,
        name: food.name,
        created_at: food.created_at,
    })
}

pub fn search_foods(db: &Database, query: &str, limit: i64) -> Result<SearchFoodsResponse, String> {
    let limit = limit.clamp(1, 100);
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let foods = Food::search(&conn, query.trim(), limit).map_err(|e| format!("Search failed: {}", e))?;
    let total = foods.len();
    Ok(SearchFoodsResponse { foods, total })
}

/// Suggestions from the built-in catalog; nothing is stored
pub fn search_catalog(query: &str) -> CatalogSearchResponse {
    let foods: Vec<CatalogFood> = search_builtin(query).into_iter().copied().collect();
    let total = foods.len();
    CatalogSearchResponse { foods, total }
}

pub fn list_foods(db: &Database, limit: i64, offset: i64) -> Result<ListFoodsResponse, String> {
    let limit = limit.clamp(1, 200);
    let offset = offset.max(0);
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let foods = Food::list(&conn, limit, offset).map_err(|e| format!("Failed to list foods: {}", e))?;
    let total = Food::count(&conn).map_err(|e| format!("Failed to count foods: {}", e))?;

    Ok(ListFoodsResponse {
        foods,
        total,
        limit,
        offset,
    })
}

/// Logged meals keep their own copy of the macros, so deleting a food never touches history
pub fn delete_food(db: &Database, id: i64) -> Result<DeleteFoodResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let deleted = Food::delete(&conn, id).map_err(|e| format!("Failed to delete food: {}", e))?;
    if !deleted {
        return Err(format!("Food not found with id: {}", id));
    }

    info!(id, "Deleted food");
    Ok(DeleteFoodResponse {
        success: true,
        deleted_id: id,
    })
}

/// Insert the built-in catalog; foods already present (by name) are left alone
pub fn seed_food_library(db: &Database) -> Result<SeedResponse, String> {
    let mut conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let tx = conn.transaction().map_err(|e| format!("Database error: {}", e))?;

    let mut inserted = 0;
    for food in CATALOG {
        if Food::insert_if_missing(&tx, &food.to_create()).map_err(|e| format!("Failed to seed {}: {}", food.name, e))? {
            inserted += 1;
        }
    }
    tx.commit().map_err(|e| format!("Database error: {}", e))?;

    let skipped = CATALOG.len() - inserted;
    info!(inserted, skipped, "Seeded food library");
    Ok(SeedResponse { inserted, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::temp_database;

    fn banana() -> FoodCreate {
        FoodCreate {
            name: "  Banana ".to_string(),
            calories: 89.0,
            protein_g: 1.1,
            carbs_g: 22.8,
            fat_g: 0.3,
        }
    }

    #[test]
    fn test_add_and_search() {
        let (_dir, db) = temp_database();
        let added = add_food(&db, banana()).unwrap();
        assert_eq!(added.name, "Banana");

        let found = search_foods(&db, "ban", 10).unwrap();
        assert_eq!(found.total, 1);
        assert_eq!(found.foods[0].id, added.id);
        assert_eq!(search_foods(&db, "apple", 10).unwrap().total, 0);
    }

    #[test]
    fn test_add_rejects_duplicates_and_bad_values() {
        let (_dir, db) = temp_database();
        add_food(&db, banana()).unwrap();

        let mut dup = banana();
        dup.name = "BANANA".to_string();
        assert!(add_food(&db, dup).unwrap_err().contains("already exists"));

        let mut negative = banana();
        negative.name = "Odd".to_string();
        negative.fat_g = -1.0;
        assert!(add_food(&db, negative).is_err());

        let mut dense = banana();
        dense.name = "Dense".to_string();
        dense.calories = 1200.0;
        assert!(add_food(&db, dense).is_err());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let (_dir, db) = temp_database();

        let first = seed_food_library(&db).unwrap();
        assert_eq!(first.inserted, CATALOG.len());
        assert_eq!(first.skipped, 0);

        let second = seed_food_library(&db).unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, CATALOG.len());

        let listed = list_foods(&db, 10, 0).unwrap();
        assert_eq!(listed.total, CATALOG.len() as i64);
        assert_eq!(listed.foods.len(), 10);
    }

    #[test]
    fn test_catalog_search_does_not_touch_library() {
        let (_dir, db) = temp_database();
        let found = search_catalog("oat");
        assert!(found.total > 0);
        assert!(found.foods.iter().all(|f| f.name.to_lowercase().contains("oat")));
        assert_eq!(search_catalog("o").total, 0);
        assert_eq!(list_foods(&db, 10, 0).unwrap().total, 0);
    }

    #[test]
    fn test_delete_food() {
        let (_dir, db) = temp_database();
        let added = add_food(&db, banana()).unwrap();
        delete_food(&db, added.id).unwrap();
        assert!(delete_food(&db, added.id).is_err());
    }
}
