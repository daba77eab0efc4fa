pub mod json;

pub use crate::error::ExportError;
pub use json::{export_json, write_buildings_json, write_stats_json, BuildingRecord};
