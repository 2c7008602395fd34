//! Ingredientes y pedidos
use std::collections::BTreeSet;

use serde::Serialize;

use crate::errors::KitchenError;

pub const TOTAL_INGREDIENTS: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Ingredient {
    Noodles,
    Broth,
    Beef,
    Herbs,
    Lime,
    Bread,
    Pate,
    Pork,
    Pickle,
    Cilantro,
    FishSauce,
    RicePaper,
    Shrimp,
    Jalapeno,
}

/// Datos que usa la interfaz para mostrar un ingrediente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientMeta {
    pub ingredient: Ingredient,
    pub display_name: &'static str,
    pub color: (u8, u8, u8),
}

static CATALOG: [IngredientMeta; TOTAL_INGREDIENTS] = [
    meta(Ingredient::Noodles, "Noodles", (245, 222, 179)),
    meta(Ingredient::Broth, "Broth", (205, 133, 63)),
    meta(Ingredient::Beef, "Beef", (139, 0, 0)),
    meta(Ingredient::Herbs, "Herbs", (34, 139, 34)),
    meta(Ingredient::Lime, "Lime", (50, 205, 50)),
    meta(Ingredient::Bread, "Bread", (222, 184, 135)),
    meta(Ingredient::Pate, "Pâté", (160, 82, 45)),
    meta(Ingredient::Pork, "Pork", (255, 160, 122)),
    meta(Ingredient::Pickle, "Pickle", (255, 165, 0)),
    meta(Ingredient::Cilantro, "Cilantro", (0, 100, 0)),
    meta(Ingredient::FishSauce, "Fish Sauce", (184, 134, 11)),
    meta(Ingredient::RicePaper, "Rice Paper", (255, 253, 208)),
    meta(Ingredient::Shrimp, "Shrimp", (250, 128, 114)),
    meta(Ingredient::Jalapeno, "Jalapeno", (220, 20, 60)),
];

const fn meta(ingredient: Ingredient, display_name: &'static str, color: (u8, u8, u8)) -> IngredientMeta {
    IngredientMeta {
        ingredient,
        display_name,
        color,
    }
}

impl Ingredient {
    pub fn all() -> impl Iterator<Item = Ingredient> {
        CATALOG.iter().map(|entry| entry.ingredient)
    }

    pub fn meta(self) -> IngredientMeta {
        CATALOG[self as usize]
    }

    pub fn display_name(self) -> &'static str {
        self.meta().display_name
    }
}

/// Busca un ingrediente por su nombre visible ("Rice Paper") o por su identificador ("RicePaper")
pub fn lookup(name: &str) -> Result<IngredientMeta, KitchenError> {
    let name = name.trim();
    CATALOG
        .iter()
        .find(|entry| {
            entry.display_name.eq_ignore_ascii_case(name)
                || format!("{:?}", entry.ingredient).eq_ignore_ascii_case(name)
        })
        .copied()
        .ok_or_else(|| KitchenError::UnknownIngredient(name.to_string()))
}

/// Pedido de un cliente. Se satisface cuando el conjunto de ingredientes entregado es exactamente el pedido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub dish_name: String,
    pub required: BTreeSet<Ingredient>,
}

impl Order {
    pub fn new<I>(dish_name: &str, required: I) -> Order
    where
        I: IntoIterator<Item = Ingredient>,
    {
        Order {
            dish_name: dish_name.to_string(),
            required: required.into_iter().collect(),
        }
    }

    /// Compara conjuntos: los repetidos no importan, los ingredientes de mas si.
    pub fn is_satisfied_by(&self, contents: &[Ingredient]) -> bool {
        let delivered: BTreeSet<Ingredient> = contents.iter().copied().collect();
        delivered == self.required
    }
}
