//! # Smart City
//!
//! A console manager for the buildings of a small simulated city.
//!
//! ## Features
//!
//! - Add up to ten buildings (name, type, floors, area, capacity, status)
//! - List buildings with their total floor area
//! - Check occupancy efficiency against capacity
//! - Run a maintenance checklist chosen by building type
//! - Aggregate city statistics, as text or JSON
//!
//! ## Example
//!
//! ```
//! use smart_city::model::{Building, City, Efficiency};
//!
//! let mut city = City::new();
//! city.add(Building::new("Central Hospital", "Hospital", 3, 200.0, 500, true))?;
//!
//! let hospital = city.get(1)?;
//! assert_eq!(hospital.total_area(), 600.0);
//! assert_eq!(hospital.efficiency(250), Efficiency::Percent(50.0));
//! # Ok::<(), smart_city::error::CityError>(())
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod ui;
