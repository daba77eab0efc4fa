use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;

/// The fixed set of building categories the city knows maintenance plans for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuildingKind {
    Hospital,
    School,
    Office,
    Park,
    Other,
}

impl BuildingKind {
    /// Matches free-text category input, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "hospital" => Self::Hospital,
            "school" => Self::School,
            "office" => Self::Office,
            "park" => Self::Park,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Building {
    pub name: String,
    pub category: String, // as typed by the user
    pub floors: u32,
    pub area_per_floor: f64, // sq meters
    pub capacity: u32,
    pub operational: bool,
}

/// Outcome of comparing a head count against a building's capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Efficiency {
    Overcrowded,
    Empty,
    Percent(f64),
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overcrowded => write!(f, "WARNING: Building is overcrowded!"),
            Self::Empty => write!(f, "Building is empty."),
            Self::Percent(p) => write!(f, "Building Efficiency: {p:.2}%"),
        }
    }
}

impl Building {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        floors: u32,
        area_per_floor: f64,
        capacity: u32,
        operational: bool,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            floors,
            area_per_floor,
            capacity,
            operational,
        }
    }

    #[must_use]
    pub fn kind(&self) -> BuildingKind {
        BuildingKind::from_label(&self.category)
    }

    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.area_per_floor * f64::from(self.floors)
    }

    /// Classifies `occupancy` against capacity.
    ///
    /// Checked in order: more people than capacity is overcrowded, zero people
    /// is empty, anything else (negative counts included) is a percentage of
    /// capacity. A negative count against zero capacity yields negative infinity.
    #[must_use]
    pub fn efficiency(&self, occupancy: i64) -> Efficiency {
        if occupancy > i64::from(self.capacity) {
            Efficiency::Overcrowded
        } else if occupancy == 0 {
            Efficiency::Empty
        } else {
            Efficiency::Percent(occupancy as f64 * 100.0 / f64::from(self.capacity))
        }
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.operational {
            "Operational"
        } else {
            "Under Maintenance"
        }
    }

    /// Multi-line information block used by the building listing.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::from("=== Building Information ===\n");
        let _ = writeln!(out, "Name: {}", self.name);
        let _ = writeln!(out, "Type: {}", self.category);
        let _ = writeln!(out, "Floors: {}", self.floors);
        let _ = writeln!(out, "Area per Floor: {:.2} sq meters", self.area_per_floor);
        let _ = writeln!(out, "Total Area: {:.2} sq meters", self.total_area());
        let _ = writeln!(out, "Status: {}", self.status_label());
        let _ = writeln!(out, "Capacity: {} people", self.capacity);
        out
    }
}
