//! Lectura de la configuracion de la cocina desde un archivo JSON.
//! Los campos que faltan toman los valores de `constants`.
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use crate::{
    catalog::{Recipe, RecipeBook},
    constants::{
        BASE_REWARD, COOK_DURATION_TICKS, MAX_CATCH_UP_TICKS, MAX_CUSTOMERS, MAX_ORDER_INGREDIENTS,
        MAX_PATIENCE, PATIENCE_DECAY_RATE, SPAWN_COOLDOWN_TICKS, STATION_CAPACITY,
        TICKS_PER_SECOND,
    },
    customer::Slot,
    errors::KitchenError,
    order::lookup,
};

#[derive(Deserialize, Debug)]
struct JsonRecipe {
    dish: String,
    ingredients: Vec<String>,
    #[serde(default)]
    fun_fact: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct JsonConfiguration {
    max_customers: Option<usize>,
    cook_duration_ticks: Option<u32>,
    patience_decay_rate: Option<f64>,
    max_patience: Option<f64>,
    station_capacity: Option<usize>,
    spawn_cooldown_ticks: Option<u32>,
    base_reward: Option<u64>,
    max_order_ingredients: Option<usize>,
    ticks_per_second: Option<u32>,
    max_catch_up_ticks: Option<u32>,
    seed: Option<u64>,
    recipes: Vec<JsonRecipe>,
}

/// Constantes de la partida y recetario
#[derive(Debug, Clone)]
pub struct KitchenConfig {
    pub max_customers: usize,
    pub cook_duration_ticks: u32,
    pub patience_decay_rate: f64,
    pub max_patience: f64,
    pub station_capacity: usize,
    pub spawn_cooldown_ticks: u32,
    pub base_reward: u64,
    pub max_order_ingredients: usize,
    pub ticks_per_second: u32,
    pub max_catch_up_ticks: u32,
    pub seed: Option<u64>,
    pub recipes: RecipeBook,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        KitchenConfig {
            max_customers: MAX_CUSTOMERS,
            cook_duration_ticks: COOK_DURATION_TICKS,
            patience_decay_rate: PATIENCE_DECAY_RATE,
            max_patience: MAX_PATIENCE,
            station_capacity: STATION_CAPACITY,
            spawn_cooldown_ticks: SPAWN_COOLDOWN_TICKS,
            base_reward: BASE_REWARD,
            max_order_ingredients: MAX_ORDER_INGREDIENTS,
            ticks_per_second: TICKS_PER_SECOND,
            max_catch_up_ticks: MAX_CATCH_UP_TICKS,
            seed: None,
            recipes: RecipeBook::default(),
        }
    }
}

impl KitchenConfig {
    fn validate(self) -> Result<KitchenConfig, KitchenError> {
        if self.max_customers == 0 || self.max_customers > Slot::ALL.len() {
            return Err(KitchenError::InvalidConfig(format!(
                "max_customers must be between 1 and {}",
                Slot::ALL.len()
            )));
        }
        if self.station_capacity == 0 {
            return Err(KitchenError::InvalidConfig("station_capacity must be positive".to_string()));
        }
        if self.cook_duration_ticks == 0 || self.ticks_per_second == 0 {
            return Err(KitchenError::InvalidConfig(
                "cook_duration_ticks and ticks_per_second must be positive".to_string(),
            ));
        }
        if !(self.patience_decay_rate > 0.0) || !(self.max_patience > 0.0) {
            return Err(KitchenError::InvalidConfig(
                "patience_decay_rate and max_patience must be positive".to_string(),
            ));
        }
        if self.max_order_ingredients == 0 || self.max_order_ingredients > self.station_capacity {
            return Err(KitchenError::InvalidConfig(
                "max_order_ingredients must fit in a station".to_string(),
            ));
        }
        Ok(self)
    }
}

fn build_recipe(json_recipe: JsonRecipe) -> Result<Recipe, KitchenError> {
    let ingredients = json_recipe
        .ingredients
        .iter()
        .map(|name| lookup(name).map(|meta| meta.ingredient))
        .collect::<Result<Vec<_>, _>>()?;
    Recipe::new(&json_recipe.dish, ingredients, &json_recipe.fun_fact)
}

fn build_config(json: JsonConfiguration) -> Result<KitchenConfig, KitchenError> {
    let defaults = KitchenConfig::default();
    let recipes = if json.recipes.is_empty() {
        defaults.recipes
    } else {
        let recipes = json
            .recipes
            .into_iter()
            .map(build_recipe)
            .collect::<Result<Vec<_>, _>>()?;
        RecipeBook::new(recipes)?
    };
    KitchenConfig {
        max_customers: json.max_customers.unwrap_or(defaults.max_customers),
        cook_duration_ticks: json.cook_duration_ticks.unwrap_or(defaults.cook_duration_ticks),
        patience_decay_rate: json.patience_decay_rate.unwrap_or(defaults.patience_decay_rate),
        max_patience: json.max_patience.unwrap_or(defaults.max_patience),
        station_capacity: json.station_capacity.unwrap_or(defaults.station_capacity),
        spawn_cooldown_ticks: json.spawn_cooldown_ticks.unwrap_or(defaults.spawn_cooldown_ticks),
        base_reward: json.base_reward.unwrap_or(defaults.base_reward),
        max_order_ingredients: json
            .max_order_ingredients
            .unwrap_or(defaults.max_order_ingredients),
        ticks_per_second: json.ticks_per_second.unwrap_or(defaults.ticks_per_second),
        max_catch_up_ticks: json.max_catch_up_ticks.unwrap_or(defaults.max_catch_up_ticks),
        seed: json.seed,
        recipes,
    }
    .validate()
}

pub fn parse_config<R: Read>(reader: R) -> Result<KitchenConfig, KitchenError> {
    let json: JsonConfiguration = serde_json::from_reader(reader)?;
    build_config(json)
}

pub fn read_config<P: AsRef<Path>>(path: P) -> Result<KitchenConfig, KitchenError> {
    let file = File::open(path)?;
    parse_config(BufReader::new(file))
}

/// Lee la configuracion. Si el archivo no existe se usan los valores por defecto.
pub fn read_config_or_default<P: AsRef<Path>>(path: P) -> Result<KitchenConfig, KitchenError> {
    match File::open(path.as_ref()) {
        Ok(file) => {
            info!("[CONFIG] Reading kitchen configuration from {}", path.as_ref().display());
            parse_config(BufReader::new(file))
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            warn!(
                "[CONFIG] {} not found, using the default kitchen",
                path.as_ref().display()
            );
            Ok(KitchenConfig::default())
        }
        Err(error) => Err(error.into()),
    }
}
