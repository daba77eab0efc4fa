pub const MENU: &str = "\n====== SMART CITY MANAGEMENT SYSTEM ======\n\
1. Add New Building\n\
2. Display All Buildings\n\
3. Check Building Efficiency\n\
4. Perform Maintenance\n\
5. Calculate City Statistics\n\
6. Exit\n";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBuilding,
    ListBuildings,
    CheckEfficiency,
    PerformMaintenance,
    CityStatistics,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::AddBuilding),
            2 => Ok(Self::ListBuildings),
            3 => Ok(Self::CheckEfficiency),
            4 => Ok(Self::PerformMaintenance),
            5 => Ok(Self::CityStatistics),
            6 => Ok(Self::Exit),
            other => Err(other),
        }
    }
}
