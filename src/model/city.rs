use super::Building;
use crate::error::CityError;
use serde::Serialize;

/// Most buildings a city can hold.
pub const MAX_BUILDINGS: usize = 10;

/// Append-only, capacity-bounded collection of buildings in insertion order.
#[derive(Debug, Default)]
pub struct City {
    buildings: Vec<Building>,
}

/// Aggregates over every building in the city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityStats {
    pub total_buildings: usize,
    pub total_floors: u64,
    pub total_area: f64,
    pub operational: usize,
    pub under_maintenance: usize,
    pub average_area: f64,
}

impl City {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buildings: Vec::with_capacity(MAX_BUILDINGS),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.buildings.len() >= MAX_BUILDINGS
    }

    #[must_use]
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Fails with [`CityError::Full`] when no more buildings fit.
    pub fn ensure_room(&self) -> Result<(), CityError> {
        if self.is_full() {
            return Err(CityError::Full { max: MAX_BUILDINGS });
        }
        Ok(())
    }

    /// Appends a building, returning its 1-based number.
    pub fn add(&mut self, building: Building) -> Result<usize, CityError> {
        self.ensure_room()?;
        self.buildings.push(building);
        Ok(self.buildings.len())
    }

    /// Looks up a building by its 1-based display number.
    pub fn get(&self, number: i64) -> Result<&Building, CityError> {
        let invalid = CityError::InvalidSelection {
            number,
            len: self.buildings.len(),
        };
        let index = usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| invalid.clone())?;
        self.buildings.get(index).ok_or(invalid)
    }

    /// Single pass over the collection. `None` when the city is empty.
    #[must_use]
    pub fn statistics(&self) -> Option<CityStats> {
        if self.buildings.is_empty() {
            return None;
        }

        let (total_floors, total_area, operational) = self.buildings.iter().fold(
            (0_u64, 0.0_f64, 0_usize),
            |(floors, area, operational), b| {
                (
                    floors + u64::from(b.floors),
                    area + b.total_area(),
                    operational + usize::from(b.operational),
                )
            },
        );

        let count = self.buildings.len();
        Some(CityStats {
            total_buildings: count,
            total_floors,
            total_area,
            operational,
            under_maintenance: count - operational,
            average_area: total_area / count as f64,
        })
    }
}
