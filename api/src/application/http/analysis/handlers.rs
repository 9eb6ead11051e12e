pub mod analyze_ingredients;
