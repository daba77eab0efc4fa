pub mod building;
pub mod city;
pub mod maintenance;

pub use building::{Building, BuildingKind, Efficiency};
pub use city::{City, CityStats, MAX_BUILDINGS};
pub use maintenance::{checklist_for, maintenance_checklist, Checklist};
