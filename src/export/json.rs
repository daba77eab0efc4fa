use crate::error::ExportError;
use crate::model::{Building, CityStats};
use serde::Serialize;
use std::io::Write;

/// Writes `value` as pretty JSON followed by a newline.
pub fn export_json<T: Serialize + ?Sized, W: Write>(
    value: &T,
    writer: &mut W,
) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(value)?;

    writeln!(writer, "{json}").map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

/// A building plus the derived values the text listing shows.
#[derive(Debug, Serialize)]
pub struct BuildingRecord<'a> {
    #[serde(flatten)]
    pub building: &'a Building,
    pub total_area: f64,
    pub status: &'static str,
}

impl<'a> From<&'a Building> for BuildingRecord<'a> {
    fn from(building: &'a Building) -> Self {
        Self {
            building,
            total_area: building.total_area(),
            status: building.status_label(),
        }
    }
}

pub fn write_buildings_json<W: Write>(
    buildings: &[Building],
    writer: &mut W,
) -> Result<(), ExportError> {
    let records: Vec<BuildingRecord<'_>> = buildings.iter().map(BuildingRecord::from).collect();
    export_json(&records, writer)
}

pub fn write_stats_json<W: Write>(stats: &CityStats, writer: &mut W) -> Result<(), ExportError> {
    export_json(stats, writer)
}
