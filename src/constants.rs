//! Parametros de configuracion de la cocina. Son los valores por defecto cuando el archivo de configuracion no los define.

/// Cantidad maxima de clientes esperando al mismo tiempo (uno por lugar)
pub const MAX_CUSTOMERS: usize = 3;

/// Ticks que tarda en cocinarse un plato (1.8 segundos a 60 ticks por segundo)
pub const COOK_DURATION_TICKS: u32 = 108;

/// Paciencia que pierde cada cliente por tick
pub const PATIENCE_DECAY_RATE: f64 = 0.05;

/// Paciencia con la que llega un cliente
pub const MAX_PATIENCE: f64 = 100.0;

/// Cantidad maxima de ingredientes en cada estacion
pub const STATION_CAPACITY: usize = 5;

/// Ticks entre dos intentos de hacer llegar un cliente nuevo
pub const SPAWN_COOLDOWN_TICKS: u32 = 300;

/// Puntos base por cada pedido entregado. A esto se le suma la paciencia restante del cliente.
pub const BASE_REWARD: u64 = 100;

/// Cantidad maxima de ingredientes distintos en un pedido.
/// Si la receta tiene mas, se eligen al azar sin repetir.
pub const MAX_ORDER_INGREDIENTS: usize = 3;

/// Ticks de simulacion por segundo
pub const TICKS_PER_SECOND: u32 = 60;

/// Cantidad maxima de ticks que se recuperan en un solo frame despues de un corte
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Cada cuantos ticks se loguean las estadisticas de la partida
pub const STATISTICS_INTERVAL_TICKS: u64 = 300;

/// Tamaño minimo y maximo de una receta
pub const MIN_RECIPE_INGREDIENTS: usize = 3;
pub const MAX_RECIPE_INGREDIENTS: usize = 5;

/// Dimensiones y velocidad del jugador
pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 75.0;
pub const PLAYER_SPEED: f32 = 5.0;

/// Margen con el que se agranda al jugador para saber si esta cerca de una estacion
pub const INTERACTION_MARGIN: f32 = 20.0;

/// Dimensiones de la cocina
pub const KITCHEN_WIDTH: f32 = 1000.0;
pub const KITCHEN_HEIGHT: f32 = 700.0;

/// Tiempo de partida por defecto del binario, en segundos
pub const DEFAULT_SESSION_SECONDS: u64 = 90;

/// Archivo de configuracion por defecto
pub const DEFAULT_CONFIG_PATH: &str = "kitchen.json";
