use super::{Building, BuildingKind};
use std::fmt::Write as _;

pub const MAINTENANCE_COMPLETE: &str = "Maintenance completed!";

const CHECKLISTS: &[(BuildingKind, &[&str])] = &[
    (
        BuildingKind::Hospital,
        &[
            "Checking medical equipment",
            "Sanitizing all areas",
            "Testing emergency systems",
        ],
    ),
    (
        BuildingKind::School,
        &[
            "Inspecting classrooms",
            "Checking educational equipment",
            "Testing fire safety systems",
        ],
    ),
    (
        BuildingKind::Office,
        &[
            "Checking HVAC systems",
            "Testing network infrastructure",
            "Inspecting elevators",
        ],
    ),
    (
        BuildingKind::Park,
        &[
            "Maintaining green spaces",
            "Checking playground equipment",
            "Cleaning pathways",
        ],
    ),
];

const GENERIC_CHECKLIST: &[&str] = &["General building inspection", "Checking basic utilities"];

/// Ordered maintenance steps for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checklist {
    steps: &'static [&'static str],
    generic: bool,
}

impl Checklist {
    #[must_use]
    pub fn steps(&self) -> &'static [&'static str] {
        self.steps
    }

    /// True when the category had no dedicated plan.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        self.generic
    }

    /// Console report for `building_name`, ending with the completion line.
    #[must_use]
    pub fn report(&self, building_name: &str) -> String {
        let mut out = format!("=== Maintenance Check for {building_name} ===\n");
        for step in self.steps {
            let _ = writeln!(out, "- {step}");
        }
        out.push_str(MAINTENANCE_COMPLETE);
        out.push('\n');
        out
    }
}

/// Checklist for a building's category.
///
/// Matching is case-insensitive; unknown categories get the generic two-step plan.
#[must_use]
pub fn maintenance_checklist(building: &Building) -> Checklist {
    checklist_for(building.kind())
}

#[must_use]
pub fn checklist_for(kind: BuildingKind) -> Checklist {
    CHECKLISTS
        .iter()
        .find(|(key, _)| *key == kind)
        .map_or(
            Checklist {
                steps: GENERIC_CHECKLIST,
                generic: true,
            },
            |&(_, steps)| Checklist {
                steps,
                generic: false,
            },
        )
}
