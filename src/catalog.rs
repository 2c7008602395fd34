//! Recetario de la cocina. Se arma al iniciar y no se modifica durante la partida.
use std::collections::HashSet;

use crate::{
    constants::{MAX_RECIPE_INGREDIENTS, MIN_RECIPE_INGREDIENTS},
    errors::KitchenError,
    order::Ingredient,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub dish_name: String,
    pub ingredients: Vec<Ingredient>,
    pub fun_fact: String,
}

impl Recipe {
    /// Valida que la receta tenga entre 3 y 5 ingredientes distintos
    pub fn new(dish_name: &str, ingredients: Vec<Ingredient>, fun_fact: &str) -> Result<Recipe, KitchenError> {
        if dish_name.trim().is_empty() {
            return Err(KitchenError::InvalidRecipe("empty dish name".to_string()));
        }
        if ingredients.len() < MIN_RECIPE_INGREDIENTS || ingredients.len() > MAX_RECIPE_INGREDIENTS {
            return Err(KitchenError::InvalidRecipe(format!(
                "{} needs between {} and {} ingredients, has {}",
                dish_name,
                MIN_RECIPE_INGREDIENTS,
                MAX_RECIPE_INGREDIENTS,
                ingredients.len()
            )));
        }
        let distinct: HashSet<&Ingredient> = ingredients.iter().collect();
        if distinct.len() != ingredients.len() {
            return Err(KitchenError::InvalidRecipe(format!(
                "{} repeats an ingredient",
                dish_name
            )));
        }
        Ok(Recipe {
            dish_name: dish_name.to_string(),
            ingredients,
            fun_fact: fun_fact.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Result<RecipeBook, KitchenError> {
        if recipes.is_empty() {
            return Err(KitchenError::InvalidConfig("the recipe book is empty".to_string()));
        }
        let mut names = HashSet::new();
        for recipe in recipes.iter() {
            if !names.insert(recipe.dish_name.as_str()) {
                return Err(KitchenError::InvalidRecipe(format!(
                    "{} is defined twice",
                    recipe.dish_name
                )));
            }
        }
        Ok(RecipeBook { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, dish_name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.dish_name == dish_name)
    }

    /// Ingredientes que aparecen en alguna receta, sin repetir y en el orden del catalogo
    pub fn ingredients_in_use(&self) -> Vec<Ingredient> {
        Ingredient::all()
            .filter(|ingredient| {
                self.recipes
                    .iter()
                    .any(|recipe| recipe.ingredients.contains(ingredient))
            })
            .collect()
    }
}

impl Default for RecipeBook {
    fn default() -> Self {
        use Ingredient::*;
        let recipes = vec![
            (
                "Phở",
                vec![Noodles, Broth, Beef, Herbs, Lime],
                "Phở originated in Northern Vietnam in the early 20th century.",
            ),
            (
                "Bánh Mì",
                vec![Bread, Pate, Pork, Pickle, Cilantro],
                "Bánh Mì is a fusion of French and Vietnamese cuisine.",
            ),
            (
                "Bún Chả",
                vec![Noodles, Pork, FishSauce, Herbs, Pickle],
                "Bún Chả is a Hanoi specialty dish.",
            ),
            (
                "Gỏi Cuốn",
                vec![RicePaper, Shrimp, Pork, Herbs, Noodles],
                "Gỏi Cuốn are served fresh, not fried.",
            ),
        ];
        RecipeBook {
            recipes: recipes
                .into_iter()
                .map(|(dish_name, ingredients, fun_fact)| Recipe {
                    dish_name: dish_name.to_string(),
                    ingredients,
                    fun_fact: fun_fact.to_string(),
                })
                .collect(),
        }
    }
}
