//! Built-in food catalog
//!
//! Common foods with macros per 100g. Searched directly for suggestions and
//! used to seed an empty library.

use serde::Serialize;

use super::FoodCreate;

/// Shortest query `search_catalog` answers
pub const MIN_CATALOG_QUERY_CHARS: usize = 2;
pub const MAX_CATALOG_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogFood {
    pub name: &'static str,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

const fn catalog_food(name: &'static str, calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> CatalogFood {
    CatalogFood {
        name,
        calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}

pub const CATALOG: &[CatalogFood] = &[
    // Poultry & Meats
    catalog_food("Chicken Breast (Cooked)", 165.0, 31.0, 0.0, 3.6),
    catalog_food("Chicken Thigh (Cooked)", 209.0, 26.0, 0.0, 10.9),
    catalog_food("Turkey Breast (Cooked)", 135.0, 30.0, 0.0, 0.7),
    catalog_food("Ground Beef (90% lean, cooked)", 176.0, 25.0, 0.0, 8.0),
    catalog_food("Ground Beef (80% lean, cooked)", 254.0, 25.8, 0.0, 16.4),
    catalog_food("Pork Chop (Lean, cooked)", 206.0, 28.3, 0.0, 9.7),
    catalog_food("Bacon (Cooked)", 541.0, 37.0, 1.4, 42.0),
    catalog_food("Steak (Sirloin, cooked)", 271.0, 25.8, 0.0, 18.0),
    // Fish & Seafood
    catalog_food("Salmon (Wild, Cooked)", 208.0, 20.4, 0.0, 13.4),
    catalog_food("Salmon (Atlantic, farmed)", 206.0, 22.0, 0.0, 12.4),
    catalog_food("Tuna (in water, drained)", 116.0, 25.5, 0.0, 0.8),
    catalog_food("Tuna (in oil, drained)", 198.0, 29.1, 0.0, 8.2),
    catalog_food("Cod (Cooked)", 105.0, 23.0, 0.0, 0.9),
    catalog_food("Tilapia (Cooked)", 128.0, 26.0, 0.0, 2.7),
    catalog_food("Shrimp (Cooked)", 99.0, 24.0, 0.2, 0.3),
    // Eggs & Dairy
    catalog_food("Egg (Large, Hard-Boiled)", 155.0, 12.6, 1.1, 10.6),
    catalog_food("Egg White", 52.0, 10.9, 0.7, 0.2),
    catalog_food("Egg Yolk", 322.0, 15.9, 3.6, 26.5),
    catalog_food("Milk (Whole, 3.25% fat)", 61.0, 3.3, 4.8, 3.3),
    catalog_food("Milk (2% fat)", 50.0, 3.3, 4.8, 2.0),
    catalog_food("Milk (Skim)", 34.0, 3.4, 5.0, 0.1),
    catalog_food("Greek Yogurt (Plain, nonfat)", 59.0, 10.0, 3.6, 0.4),
    catalog_food("Greek Yogurt (Plain, whole milk)", 97.0, 9.0, 3.9, 5.0),
    catalog_food("Cottage Cheese (Low-fat)", 72.0, 12.4, 2.7, 1.0),
    catalog_food("Cheddar Cheese", 403.0, 24.9, 1.3, 33.1),
    catalog_food("Mozzarella Cheese", 280.0, 27.5, 2.2, 17.1),
    catalog_food("Feta Cheese", 264.0, 14.2, 4.1, 21.3),
    // Grains & Carbs
    catalog_food("Brown Rice (Cooked)", 123.0, 2.7, 25.6, 0.9),
    catalog_food("White Rice (Cooked)", 130.0, 2.7, 28.2, 0.3),
    catalog_food("Quinoa (Cooked)", 120.0, 4.4, 21.3, 1.9),
    catalog_food("Pasta (Cooked)", 131.0, 5.0, 25.0, 1.1),
    catalog_food("Whole Wheat Pasta (Cooked)", 124.0, 5.3, 26.5, 0.5),
    catalog_food("Oatmeal (Dry)", 389.0, 16.9, 66.3, 6.9),
    catalog_food("Oatmeal (Cooked)", 71.0, 2.5, 12.0, 1.4),
    catalog_food("Whole Wheat Bread", 247.0, 13.0, 41.0, 3.5),
    catalog_food("White Bread", 265.0, 9.0, 49.0, 3.2),
    catalog_food("Bagel (Plain)", 257.0, 10.0, 50.0, 1.5),
    catalog_food("Tortilla (Flour)", 304.0, 8.2, 50.5, 7.3),
    // Legumes & Plant Proteins
    catalog_food("Black Beans (Cooked)", 132.0, 8.9, 23.7, 0.5),
    catalog_food("Chickpeas (Cooked)", 164.0, 8.9, 27.4, 2.6),
    catalog_food("Lentils (Cooked)", 116.0, 9.0, 20.1, 0.4),
    catalog_food("Kidney Beans (Cooked)", 127.0, 8.7, 22.8, 0.5),
    catalog_food("Tofu (Firm)", 144.0, 17.3, 2.8, 8.7),
    catalog_food("Tofu (Silken)", 61.0, 6.9, 2.0, 3.5),
    catalog_food("Tempeh", 193.0, 20.3, 7.6, 10.8),
    catalog_food("Edamame (Cooked)", 122.0, 11.9, 8.9, 5.2),
    // Vegetables
    catalog_food("Broccoli (Steamed)", 35.0, 2.4, 7.1, 0.4),
    catalog_food("Broccoli (Raw)", 34.0, 2.8, 6.6, 0.4),
    catalog_food("Spinach", 23.0, 2.9, 3.6, 0.4),
    catalog_food("Kale", 35.0, 2.9, 4.4, 1.5),
    catalog_food("Carrots", 41.0, 0.9, 9.6, 0.2),
    catalog_food("Bell Pepper (Red)", 31.0, 1.0, 6.0, 0.3),
    catalog_food("Tomato", 18.0, 0.9, 3.9, 0.2),
    catalog_food("Cucumber", 16.0, 0.7, 3.6, 0.1),
    catalog_food("Lettuce (Romaine)", 17.0, 1.2, 3.3, 0.3),
    catalog_food("Cauliflower", 25.0, 1.9, 5.0, 0.3),
    catalog_food("Zucchini", 17.0, 1.2, 3.1, 0.3),
    catalog_food("Asparagus", 20.0, 2.2, 3.9, 0.1),
    catalog_food("Green Beans", 31.0, 1.8, 7.0, 0.2),
    catalog_food("Sweet Potato (Baked)", 90.0, 2.0, 20.7, 0.1),
    catalog_food("Potato (Baked)", 93.0, 2.5, 21.2, 0.1),
    catalog_food("Onion", 40.0, 1.1, 9.3, 0.1),
    catalog_food("Garlic", 149.0, 6.4, 33.1, 0.5),
    catalog_food("Mushrooms", 22.0, 3.1, 3.3, 0.3),
    // Fruits
    catalog_food("Apple", 52.0, 0.3, 13.8, 0.2),
    catalog_food("Banana", 89.0, 1.1, 22.8, 0.3),
    catalog_food("Orange", 47.0, 0.9, 11.8, 0.1),
    catalog_food("Strawberries", 32.0, 0.7, 7.7, 0.3),
    catalog_food("Blueberries", 57.0, 0.7, 14.5, 0.3),
    catalog_food("Raspberries", 52.0, 1.2, 11.9, 0.7),
    catalog_food("Blackberries", 43.0, 1.4, 9.6, 0.5),
    catalog_food("Grapes", 69.0, 0.7, 18.1, 0.2),
    catalog_food("Watermelon", 30.0, 0.6, 7.6, 0.2),
    catalog_food("Pineapple", 50.0, 0.5, 13.1, 0.1),
    catalog_food("Mango", 60.0, 0.8, 15.0, 0.4),
    catalog_food("Pear", 57.0, 0.4, 15.2, 0.1),
    catalog_food("Peach", 39.0, 0.9, 9.5, 0.3),
    catalog_food("Avocado", 160.0, 2.0, 8.5, 14.7),
    // Nuts & Seeds
    catalog_food("Almonds", 579.0, 21.2, 21.6, 49.9),
    catalog_food("Walnuts", 654.0, 15.2, 13.7, 65.2),
    catalog_food("Cashews", 553.0, 18.2, 30.2, 43.8),
    catalog_food("Peanuts", 567.0, 25.8, 16.1, 49.2),
    catalog_food("Peanut Butter", 588.0, 25.0, 20.0, 50.0),
    catalog_food("Almond Butter", 614.0, 20.9, 18.8, 55.5),
    catalog_food("Pecans", 691.0, 9.2, 13.9, 72.0),
    catalog_food("Pistachios", 560.0, 20.2, 27.2, 45.3),
    catalog_food("Sunflower Seeds", 584.0, 20.8, 20.0, 51.5),
    catalog_food("Pumpkin Seeds", 559.0, 30.2, 10.7, 49.0),
    catalog_food("Chia Seeds", 486.0, 16.5, 42.1, 30.7),
    catalog_food("Flax Seeds", 534.0, 18.3, 28.9, 42.2),
    // Protein Supplements
    catalog_food("Whey Protein Powder", 400.0, 80.0, 8.0, 5.0),
    catalog_food("Casein Protein Powder", 380.0, 78.0, 10.0, 2.0),
    catalog_food("Plant Protein Powder", 390.0, 75.0, 12.0, 6.0),
    // Oils & Fats
    catalog_food("Olive Oil (Extra Virgin)", 884.0, 0.0, 0.0, 100.0),
    catalog_food("Coconut Oil", 862.0, 0.0, 0.0, 100.0),
    catalog_food("Butter (Salted)", 717.0, 0.9, 0.1, 81.1),
    catalog_food("Butter (Unsalted)", 717.0, 0.9, 0.1, 81.1),
    catalog_food("Ghee (Clarified Butter)", 876.0, 0.3, 0.0, 99.5),
    catalog_food("Avocado Oil", 884.0, 0.0, 0.0, 100.0),
    catalog_food("Canola Oil", 884.0, 0.0, 0.0, 100.0),
    catalog_food("Sesame Oil", 884.0, 0.0, 0.0, 100.0),
    // Condiments & Sauces
    catalog_food("Ketchup", 101.0, 1.0, 25.0, 0.1),
    catalog_food("Mustard", 66.0, 4.0, 6.0, 3.5),
    catalog_food("Mayonnaise", 680.0, 1.0, 0.6, 75.0),
    catalog_food("BBQ Sauce", 172.0, 1.0, 41.0, 0.5),
    catalog_food("Soy Sauce", 53.0, 5.6, 4.9, 0.1),
    catalog_food("Hot Sauce", 12.0, 0.8, 1.3, 0.5),
    catalog_food("Ranch Dressing", 458.0, 1.4, 6.7, 48.0),
    catalog_food("Italian Dressing", 296.0, 0.2, 11.0, 28.0),
    catalog_food("Balsamic Vinegar", 88.0, 0.5, 17.0, 0.0),
    catalog_food("Salsa", 36.0, 1.5, 7.0, 0.2),
    catalog_food("Hummus", 166.0, 8.0, 14.3, 9.6),
    catalog_food("Guacamole", 150.0, 2.0, 9.0, 13.0),
    // Sweeteners & Baking
    catalog_food("Honey", 304.0, 0.3, 82.4, 0.0),
    catalog_food("Maple Syrup", 260.0, 0.0, 67.0, 0.2),
    catalog_food("White Sugar", 387.0, 0.0, 100.0, 0.0),
    catalog_food("Brown Sugar", 380.0, 0.0, 98.0, 0.0),
    catalog_food("Agave Syrup", 310.0, 0.1, 76.0, 0.5),
    catalog_food("All-Purpose Flour", 364.0, 10.3, 76.3, 1.0),
    catalog_food("Whole Wheat Flour", 340.0, 13.2, 72.0, 1.9),
    catalog_food("Cocoa Powder (Unsweetened)", 228.0, 19.6, 57.9, 13.7),
    // Processed Meats
    catalog_food("Ham (Lean)", 145.0, 21.0, 1.5, 5.5),
    catalog_food("Salami", 336.0, 22.6, 1.6, 26.7),
    catalog_food("Pepperoni", 504.0, 20.4, 4.0, 44.0),
    catalog_food("Turkey Deli Meat", 104.0, 17.1, 4.2, 1.7),
    catalog_food("Chicken Deli Meat", 100.0, 18.0, 2.5, 2.0),
    catalog_food("Sausage (Pork)", 301.0, 12.0, 3.0, 27.0),
    catalog_food("Hot Dog (Beef)", 290.0, 10.4, 3.8, 26.0),
    // More Seafood
    catalog_food("Crab (Cooked)", 97.0, 19.4, 0.0, 1.8),
    catalog_food("Lobster (Cooked)", 89.0, 19.0, 0.0, 0.9),
    catalog_food("Scallops (Cooked)", 111.0, 20.5, 5.4, 1.4),
    catalog_food("Mussels (Cooked)", 172.0, 23.8, 7.4, 4.5),
    catalog_food("Oysters (Raw)", 68.0, 7.1, 3.9, 2.5),
    catalog_food("Sardines (in oil, drained)", 208.0, 24.6, 0.0, 11.5),
    catalog_food("Anchovies", 210.0, 28.9, 0.0, 9.7),
    // More Vegetables
    catalog_food("Brussels Sprouts", 43.0, 3.4, 9.0, 0.3),
    catalog_food("Eggplant", 25.0, 1.0, 5.9, 0.2),
    catalog_food("Cabbage", 25.0, 1.3, 5.8, 0.1),
    catalog_food("Celery", 16.0, 0.7, 3.0, 0.2),
    catalog_food("Radish", 16.0, 0.7, 3.4, 0.1),
    catalog_food("Beets", 43.0, 1.6, 9.6, 0.2),
    catalog_food("Corn (Sweet, cooked)", 96.0, 3.4, 21.0, 1.5),
    catalog_food("Peas (Green, cooked)", 84.0, 5.4, 15.6, 0.2),
    catalog_food("Squash (Winter)", 34.0, 0.8, 9.0, 0.1),
    catalog_food("Pumpkin", 26.0, 1.0, 6.5, 0.1),
    // Dried Fruits
    catalog_food("Raisins", 299.0, 3.1, 79.2, 0.5),
    catalog_food("Dates (Medjool)", 277.0, 1.8, 75.0, 0.2),
    catalog_food("Dried Apricots", 241.0, 3.4, 62.6, 0.5),
    catalog_food("Dried Cranberries", 308.0, 0.1, 82.4, 1.4),
    catalog_food("Prunes", 240.0, 2.2, 63.9, 0.4),
    catalog_food("Dried Figs", 249.0, 3.3, 63.9, 0.9),
    // More Cheese
    catalog_food("Parmesan Cheese", 431.0, 38.5, 4.1, 28.6),
    catalog_food("Swiss Cheese", 380.0, 26.9, 5.4, 27.8),
    catalog_food("Brie Cheese", 334.0, 20.8, 0.5, 27.7),
    catalog_food("Goat Cheese", 364.0, 21.6, 2.5, 29.8),
    catalog_food("Cream Cheese", 342.0, 5.9, 5.5, 34.2),
    catalog_food("Ricotta Cheese (Whole milk)", 174.0, 11.3, 3.0, 13.0),
    // Snacks
    catalog_food("Potato Chips", 536.0, 6.6, 52.9, 34.6),
    catalog_food("Tortilla Chips", 489.0, 7.0, 62.0, 23.0),
    catalog_food("Popcorn (Air-popped)", 387.0, 12.9, 77.8, 4.5),
    catalog_food("Popcorn (Oil-popped)", 500.0, 9.0, 57.2, 28.1),
    catalog_food("Pretzels", 380.0, 10.0, 80.0, 3.0),
    catalog_food("Crackers (Saltine)", 421.0, 9.0, 71.5, 10.2),
    catalog_food("Graham Crackers", 423.0, 6.5, 77.9, 10.1),
    catalog_food("Granola Bar", 471.0, 9.7, 64.4, 20.6),
    catalog_food("Dark Chocolate (70-85% cacao)", 598.0, 7.8, 45.8, 42.6),
    catalog_food("Milk Chocolate", 535.0, 7.6, 59.4, 29.7),
    catalog_food("Cookies (Chocolate Chip)", 488.0, 5.0, 68.0, 22.0),
    // More Grains & Starches
    catalog_food("Couscous (Cooked)", 112.0, 3.8, 23.2, 0.2),
    catalog_food("Barley (Cooked)", 123.0, 2.3, 28.2, 0.4),
    catalog_food("Farro (Cooked)", 170.0, 6.5, 36.0, 1.0),
    catalog_food("Buckwheat (Cooked)", 92.0, 3.4, 19.9, 0.6),
    catalog_food("Millet (Cooked)", 119.0, 3.5, 23.7, 1.0),
    catalog_food("Wild Rice (Cooked)", 101.0, 4.0, 21.3, 0.3),
    catalog_food("Sushi Rice (Cooked)", 130.0, 2.4, 29.0, 0.2),
    // Prepared & Fast Foods
    catalog_food("Pizza (Cheese, thin crust)", 239.0, 10.1, 26.6, 10.4),
    catalog_food("Pizza (Pepperoni)", 298.0, 12.2, 33.5, 12.8),
    catalog_food("French Fries", 312.0, 3.4, 41.4, 15.0),
    catalog_food("Hamburger (Fast food)", 254.0, 12.9, 31.0, 9.4),
    catalog_food("Cheeseburger (Fast food)", 303.0, 15.4, 32.0, 13.5),
    catalog_food("Fried Chicken", 246.0, 18.3, 12.2, 14.7),
    catalog_food("Chicken Nuggets", 296.0, 15.3, 18.1, 18.6),
    catalog_food("Tacos (Beef)", 226.0, 9.4, 18.5, 13.2),
    catalog_food("Burrito (Bean & cheese)", 151.0, 5.9, 19.8, 5.5),
    catalog_food("Sushi (Salmon roll)", 179.0, 8.5, 20.5, 6.8),
    catalog_food("Ramen Noodles (Instant)", 436.0, 8.8, 62.5, 16.3),
    // Specialty & Ethnic Foods
    catalog_food("Falafel", 333.0, 13.3, 31.8, 17.8),
    catalog_food("Naan Bread", 262.0, 8.7, 45.1, 5.1),
    catalog_food("Kimchi", 15.0, 1.1, 2.4, 0.5),
    catalog_food("Sauerkraut", 19.0, 0.9, 4.3, 0.1),
    catalog_food("Seaweed (Nori)", 35.0, 5.8, 5.1, 0.3),
    catalog_food("Miso Paste", 199.0, 12.8, 25.9, 6.0),
    // BEVERAGES - Coffee & Tea
    catalog_food("Coffee (Black)", 2.0, 0.3, 0.0, 0.0),
    catalog_food("Coffee (with milk)", 15.0, 0.8, 1.4, 0.8),
    catalog_food("Latte (Whole milk)", 61.0, 3.3, 4.8, 3.3),
    catalog_food("Cappuccino", 46.0, 2.5, 3.6, 2.5),
    catalog_food("Espresso", 9.0, 0.5, 1.6, 0.2),
    catalog_food("Americano", 3.0, 0.3, 0.5, 0.0),
    catalog_food("Mocha (with whipped cream)", 175.0, 2.3, 26.5, 7.0),
    catalog_food("Frappuccino", 240.0, 4.0, 50.0, 3.0),
    catalog_food("Iced Coffee (Black)", 2.0, 0.3, 0.0, 0.0),
    catalog_food("Cold Brew Coffee", 5.0, 0.3, 0.8, 0.0),
    catalog_food("Tea (Green, unsweetened)", 1.0, 0.0, 0.0, 0.0),
    catalog_food("Tea (Black, unsweetened)", 2.0, 0.0, 0.7, 0.0),
    catalog_food("Tea (Herbal)", 2.0, 0.0, 0.4, 0.0),
    catalog_food("Chai Tea Latte", 120.0, 4.0, 21.0, 2.5),
    catalog_food("Matcha Latte", 70.0, 1.0, 8.0, 3.5),
    catalog_food("Bubble Tea (with tapioca)", 160.0, 0.5, 38.0, 1.5),
    catalog_food("Sweet Tea (Sweetened)", 35.0, 0.0, 8.9, 0.0),
    catalog_food("Iced Tea (Unsweetened)", 2.0, 0.0, 0.7, 0.0),
    // BEVERAGES - Juices
    catalog_food("Orange Juice (100%)", 45.0, 0.7, 10.4, 0.2),
    catalog_food("Apple Juice (100%)", 46.0, 0.1, 11.3, 0.1),
    catalog_food("Grape Juice (100%)", 60.0, 0.4, 14.8, 0.1),
    catalog_food("Cranberry Juice", 46.0, 0.0, 12.2, 0.1),
    catalog_food("Pineapple Juice", 53.0, 0.4, 12.9, 0.1),
    catalog_food("Grapefruit Juice", 39.0, 0.5, 9.2, 0.1),
    catalog_food("Tomato Juice", 17.0, 0.8, 3.9, 0.1),
    catalog_food("Vegetable Juice (V8)", 18.0, 0.8, 3.6, 0.1),
    catalog_food("Lemon Juice (Fresh)", 22.0, 0.4, 6.9, 0.2),
    catalog_food("Lime Juice (Fresh)", 25.0, 0.4, 8.4, 0.1),
    // BEVERAGES - Soft Drinks & Sodas
    catalog_food("Cola (Regular)", 41.0, 0.0, 10.6, 0.0),
    catalog_food("Cola (Diet/Zero)", 0.0, 0.0, 0.0, 0.0),
    catalog_food("Sprite/Lemon-Lime Soda", 38.0, 0.0, 10.0, 0.0),
    catalog_food("Root Beer", 41.0, 0.0, 10.6, 0.0),
    catalog_food("Ginger Ale", 34.0, 0.0, 8.8, 0.0),
    catalog_food("Mountain Dew", 46.0, 0.0, 12.4, 0.0),
    catalog_food("Dr Pepper", 40.0, 0.0, 10.6, 0.0),
    catalog_food("Tonic Water", 34.0, 0.0, 8.8, 0.0),
    catalog_food("Club Soda/Sparkling Water", 0.0, 0.0, 0.0, 0.0),
    catalog_food("Flavored Sparkling Water", 0.0, 0.0, 0.0, 0.0),
    // BEVERAGES - Energy & Sports Drinks
    catalog_food("Red Bull (Regular)", 45.0, 0.4, 11.0, 0.0),
    catalog_food("Red Bull (Sugar-free)", 3.0, 0.4, 0.0, 0.0),
    catalog_food("Monster Energy Drink", 54.0, 0.5, 14.0, 0.0),
    catalog_food("Gatorade", 25.0, 0.0, 6.3, 0.0),
    catalog_food("Powerade", 27.0, 0.0, 7.0, 0.0),
    catalog_food("Coconut Water", 19.0, 0.7, 3.7, 0.2),
    catalog_food("Electrolyte Water", 0.0, 0.0, 0.0, 0.0),
    // BEVERAGES - Milk Alternatives
    catalog_food("Almond Milk (Unsweetened)", 13.0, 0.4, 0.3, 1.1),
    catalog_food("Almond Milk (Sweetened)", 37.0, 0.4, 6.7, 1.0),
    catalog_food("Soy Milk (Unsweetened)", 33.0, 3.3, 1.7, 2.0),
    catalog_food("Soy Milk (Sweetened)", 54.0, 3.3, 6.7, 2.0),
    catalog_food("Oat Milk", 47.0, 1.0, 7.7, 1.5),
    catalog_food("Coconut Milk (Beverage)", 17.0, 0.2, 1.8, 1.3),
    catalog_food("Rice Milk", 47.0, 0.3, 9.3, 1.0),
    catalog_food("Cashew Milk (Unsweetened)", 10.0, 0.3, 0.3, 0.8),
    // BEVERAGES - Smoothies & Shakes
    catalog_food("Green Smoothie (Spinach, banana, almond milk)", 63.0, 1.5, 13.0, 1.2),
    catalog_food("Berry Smoothie", 70.0, 1.0, 16.0, 0.5),
    catalog_food("Protein Shake (with milk)", 110.0, 20.0, 6.0, 1.5),
    catalog_food("Chocolate Milkshake", 223.0, 5.9, 35.5, 6.9),
    catalog_food("Vanilla Milkshake", 210.0, 5.5, 33.0, 6.2),
    catalog_food("Strawberry Milkshake", 215.0, 5.3, 34.0, 6.5),
    // BEVERAGES - Alcoholic Drinks
    catalog_food("Beer (Regular, 12 oz)", 43.0, 0.5, 3.6, 0.0),
    catalog_food("Light Beer (12 oz)", 29.0, 0.2, 1.6, 0.0),
    catalog_food("IPA Beer (12 oz)", 50.0, 0.6, 4.3, 0.0),
    catalog_food("Red Wine (5 oz)", 85.0, 0.1, 2.5, 0.0),
    catalog_food("White Wine (5 oz)", 82.0, 0.1, 2.1, 0.0),
    catalog_food("Champagne (5 oz)", 78.0, 0.2, 1.5, 0.0),
    catalog_food("Vodka (1.5 oz shot)", 97.0, 0.0, 0.0, 0.0),
    catalog_food("Whiskey (1.5 oz shot)", 97.0, 0.0, 0.0, 0.0),
    catalog_food("Rum (1.5 oz shot)", 97.0, 0.0, 0.0, 0.0),
    catalog_food("Tequila (1.5 oz shot)", 97.0, 0.0, 0.0, 0.0),
    catalog_food("Gin (1.5 oz shot)", 97.0, 0.0, 0.0, 0.0),
    catalog_food("Margarita", 168.0, 0.1, 13.0, 0.1),
    catalog_food("Mojito", 143.0, 0.1, 13.7, 0.1),
    catalog_food("Piña Colada", 245.0, 0.7, 31.9, 3.0),
    catalog_food("Bloody Mary", 120.0, 1.5, 5.0, 0.2),
    catalog_food("Long Island Iced Tea", 276.0, 0.0, 33.0, 0.0),
    // BEVERAGES - Other
    catalog_food("Hot Chocolate (with whole milk)", 77.0, 3.2, 10.7, 2.3),
    catalog_food("Hot Chocolate (with water)", 71.0, 2.3, 11.7, 2.3),
    catalog_food("Chocolate Milk (Whole milk)", 83.0, 3.2, 10.3, 3.3),
    catalog_food("Chocolate Milk (Low-fat)", 63.0, 3.2, 10.3, 1.0),
    catalog_food("Eggnog", 135.0, 3.8, 13.5, 7.5),
    catalog_food("Horchata", 103.0, 0.5, 20.0, 2.5),
    catalog_food("Lemonade (Sweetened)", 40.0, 0.1, 10.6, 0.0),
    catalog_food("Lemonade (Sugar-free)", 5.0, 0.0, 1.3, 0.0),
    catalog_food("Vitamin Water", 20.0, 0.0, 5.0, 0.0),
    catalog_food("Kombucha", 30.0, 0.0, 7.0, 0.0),
    catalog_food("Apple Cider (Hot)", 47.0, 0.1, 11.7, 0.1),
    // Additional Popular Foods
    catalog_food("Ice Cream (Vanilla)", 207.0, 3.5, 23.6, 11.0),
    catalog_food("Ice Cream (Chocolate)", 216.0, 3.8, 28.2, 11.0),
    catalog_food("Frozen Yogurt", 127.0, 3.5, 22.0, 4.0),
    catalog_food("Gelato", 160.0, 3.0, 25.0, 6.0),
    catalog_food("Sorbet", 130.0, 0.3, 34.0, 0.0),
    catalog_food("Pancakes (Plain)", 227.0, 6.4, 28.3, 9.7),
    catalog_food("Waffles", 291.0, 7.9, 33.0, 14.1),
    catalog_food("French Toast", 166.0, 6.2, 17.0, 7.3),
    catalog_food("Donut (Glazed)", 452.0, 4.9, 51.3, 25.5),
    catalog_food("Muffin (Blueberry)", 313.0, 6.0, 54.0, 7.4),
    catalog_food("Croissant", 406.0, 8.2, 45.8, 21.0),
    catalog_food("Cinnamon Roll", 310.0, 4.7, 49.7, 10.8),
    catalog_food("Brownie", 466.0, 6.0, 63.0, 23.0),
    catalog_food("Cheesecake", 321.0, 5.5, 25.5, 22.5),
    catalog_food("Tiramisu", 240.0, 4.5, 28.0, 12.0),
    catalog_food("Apple Pie", 237.0, 2.0, 34.0, 11.0),
    catalog_food("Pumpkin Pie", 229.0, 4.0, 30.5, 10.0),
];

impl CatalogFood {
    pub fn to_create(&self) -> FoodCreate {
        FoodCreate {
            name: self.name.to_string(),
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }
}

/// Case-insensitive substring match over catalog names, in catalog order
pub fn search_catalog(query: &str) -> Vec<&'static CatalogFood> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_CATALOG_QUERY_CHARS {
        return Vec::new();
    }
    CATALOG
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&query))
        .take(MAX_CATALOG_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_search_catalog() {
        let found = search_catalog("SALMON");
        let names: Vec<_> = found.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Salmon (Wild, Cooked)", "Salmon (Atlantic, farmed)", "Sushi (Salmon roll)"]);

        assert_eq!(search_catalog("e").len(), 0);
        assert_eq!(search_catalog("  ").len(), 0);
        assert_eq!(search_catalog("zzz-not-a-food").len(), 0);
    }

    #[test]
    fn test_search_catalog_caps_suggestions() {
        assert!(CATALOG.iter().filter(|f| f.name.to_lowercase().contains("cheese")).count() > MAX_CATALOG_SUGGESTIONS);
        let found = search_catalog("cheese");
        assert_eq!(found.len(), MAX_CATALOG_SUGGESTIONS);
        assert_eq!(found[0].name, "Cottage Cheese (Low-fat)");
    }

    #[test]
    fn test_catalog_fits_library_limits() {
        assert!(CATALOG.len() > 250);
        assert!(CATALOG.iter().all(|f| f.name.chars().count() <= 100
            && f.calories <= 900.0
            && f.protein_g <= 100.0
            && f.carbs_g <= 100.0
            && f.fat_g <= 100.0));
    }

    #[test]
    fn test_catalog_names_unique() {
        let names: HashSet<String> = CATALOG.iter().map(|f| f.name.to_lowercase()).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_values_non_negative() {
        assert!(CATALOG
            .iter()
            .all(|f| f.calories >= 0.0 && f.protein_g >= 0.0 && f.carbs_g >= 0.0 && f.fat_g >= 0.0));
    }
}
