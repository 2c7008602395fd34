//! Distribucion de la cocina: donde estan los cajones de ingredientes y las estaciones,
//! y a cual de ellos esta cerca el jugador.
use serde::Serialize;

use crate::{
    constants::{
        INTERACTION_MARGIN, KITCHEN_HEIGHT, KITCHEN_WIDTH, PLAYER_HEIGHT, PLAYER_SPEED,
        PLAYER_WIDTH,
    },
    order::Ingredient,
    station::Lane,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Agranda el rectangulo `margin` para cada lado
    pub fn inflate(&self, margin: f32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

/// Lugar con el que el jugador puede interactuar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Zone {
    IngredientBin(Ingredient),
    Station(Lane),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub position: Rect,
    pub carrying: Option<Ingredient>,
    speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Player {
        Player {
            position: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            carrying: None,
            speed: PLAYER_SPEED,
        }
    }

    /// Mueve al jugador un tick sin salirse de la cocina
    pub fn step(&mut self, direction: Direction, bounds: &Rect) {
        let (dx, dy) = match direction {
            Direction::Up => (0.0, -self.speed),
            Direction::Down => (0.0, self.speed),
            Direction::Left => (-self.speed, 0.0),
            Direction::Right => (self.speed, 0.0),
        };
        let max_x = bounds.x + bounds.width - self.position.width;
        let max_y = bounds.y + bounds.height - self.position.height;
        self.position.x = (self.position.x + dx).max(bounds.x).min(max_x);
        self.position.y = (self.position.y + dy).max(bounds.y).min(max_y);
    }
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub bounds: Rect,
    bins: Vec<(Ingredient, Rect)>,
    prep: Rect,
    cook: Rect,
    serve: Rect,
    margin: f32,
}

impl Layout {
    pub fn new(bins: Vec<(Ingredient, Rect)>, prep: Rect, cook: Rect, serve: Rect) -> Layout {
        Layout {
            bounds: Rect::new(0.0, 0.0, KITCHEN_WIDTH, KITCHEN_HEIGHT),
            bins,
            prep,
            cook,
            serve,
            margin: INTERACTION_MARGIN,
        }
    }

    /// Cajones en dos filas arriba a la izquierda y las estaciones en una columna a la derecha de la cocina
    pub fn standard(ingredients: &[Ingredient]) -> Layout {
        let bins = ingredients
            .iter()
            .enumerate()
            .map(|(index, ingredient)| {
                let column = (index % 7) as f32;
                let row = (index / 7) as f32;
                (*ingredient, Rect::new(20.0 + column * 100.0, 20.0 + row * 100.0, 80.0, 80.0))
            })
            .collect();
        Layout::new(
            bins,
            Rect::new(100.0, 450.0, 120.0, 100.0),
            Rect::new(300.0, 450.0, 120.0, 100.0),
            Rect::new(500.0, 450.0, 120.0, 100.0),
        )
    }

    pub fn bins(&self) -> &[(Ingredient, Rect)] {
        &self.bins
    }

    pub fn zone_rect(&self, zone: Zone) -> Option<Rect> {
        match zone {
            Zone::IngredientBin(ingredient) => self
                .bins
                .iter()
                .find(|(bin, _)| *bin == ingredient)
                .map(|(_, rect)| *rect),
            Zone::Station(Lane::Prep) => Some(self.prep),
            Zone::Station(Lane::Cook) => Some(self.cook),
            Zone::Station(Lane::Serve) => Some(self.serve),
        }
    }

    /// Primer lugar cercano al jugador, en orden: cajones, Prep, Cook, Serve
    pub fn zone_near(&self, player: &Rect) -> Option<Zone> {
        let reach = player.inflate(self.margin);
        let bins = self
            .bins
            .iter()
            .map(|(ingredient, rect)| (Zone::IngredientBin(*ingredient), *rect));
        let stations = [
            (Zone::Station(Lane::Prep), self.prep),
            (Zone::Station(Lane::Cook), self.cook),
            (Zone::Station(Lane::Serve), self.serve),
        ];
        bins.chain(stations)
            .find(|(_, rect)| rect.intersects(&reach))
            .map(|(zone, _)| zone)
    }
}
