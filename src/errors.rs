//! Errores de arranque de la cocina (lectura y validacion de la configuracion).
//! Los resultados de la simulacion no son errores, se reportan como `EventCode`.
use std::fmt;

#[derive(Debug)]
pub enum KitchenError {
    FileReaderError,
    ParseError(String),
    UnknownIngredient(String),
    InvalidRecipe(String),
    InvalidConfig(String),
}

impl fmt::Display for KitchenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitchenError::FileReaderError => write!(f, "could not read the configuration file"),
            KitchenError::ParseError(reason) => write!(f, "malformed configuration: {}", reason),
            KitchenError::UnknownIngredient(name) => write!(f, "unknown ingredient '{}'", name),
            KitchenError::InvalidRecipe(reason) => write!(f, "invalid recipe: {}", reason),
            KitchenError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for KitchenError {}

impl From<std::io::Error> for KitchenError {
    fn from(_: std::io::Error) -> Self {
        KitchenError::FileReaderError
    }
}

impl From<serde_json::Error> for KitchenError {
    fn from(error: serde_json::Error) -> Self {
        KitchenError::ParseError(error.to_string())
    }
}
