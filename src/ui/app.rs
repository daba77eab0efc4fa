use super::console::Console;
use super::menu::{MenuChoice, CHOICE_PROMPT, MENU};
use crate::error::{CityError, InputError};
use crate::export::{write_buildings_json, write_stats_json};
use crate::model::{maintenance_checklist, Building, City, CityStats};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// How listings and statistics are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct App<R, W> {
    city: City,
    console: Console<R, W>,
    format: OutputFormat,
    should_quit: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    #[must_use]
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            city: City::new(),
            console: Console::new(reader, writer),
            format: OutputFormat::Text,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn city(&self) -> &City {
        &self.city
    }

    /// Runs the menu loop until Exit is chosen.
    ///
    /// Returns an error only for malformed or missing input; capacity and
    /// selection problems are reported on the console and the loop continues.
    pub fn run(&mut self) -> Result<(), InputError> {
        while !self.should_quit {
            write!(self.console.writer(), "{MENU}")?;
            let number: i64 = self.console.prompt_integer(CHOICE_PROMPT, "menu choice")?;
            match MenuChoice::try_from(number) {
                Ok(choice) => self.handle_choice(choice)?,
                Err(other) => {
                    warn!(choice = other, "unknown menu choice");
                    self.console.blank()?;
                    self.console.say("Invalid choice! Please try again.")?;
                }
            }
        }
        Ok(())
    }

    fn handle_choice(&mut self, choice: MenuChoice) -> Result<(), InputError> {
        debug!(?choice, buildings = self.city.len(), "dispatch");
        match choice {
            MenuChoice::AddBuilding => self.add_building(),
            MenuChoice::ListBuildings => self.list_buildings(),
            MenuChoice::CheckEfficiency => self.check_efficiency(),
            MenuChoice::PerformMaintenance => self.perform_maintenance(),
            MenuChoice::CityStatistics => self.city_statistics(),
            MenuChoice::Exit => {
                self.console.blank()?;
                self.console
                    .say("Thank you for using Smart City Management System!")?;
                self.should_quit = true;
                Ok(())
            }
        }
    }

    fn add_building(&mut self) -> Result<(), InputError> {
        if let Err(err) = self.city.ensure_room() {
            return self.report_rejection(&err);
        }

        let building = self.read_building()?;
        let name = building.name.clone();
        match self.city.add(building) {
            Ok(number) => {
                info!(number, %name, "building added");
                self.console.blank()?;
                self.console.say("Building added successfully!")
            }
            Err(err) => self.report_rejection(&err),
        }
    }

    fn report_rejection(&mut self, err: &CityError) -> Result<(), InputError> {
        warn!(%err, "add rejected");
        self.console.blank()?;
        self.console.say(&err.to_string())
    }

    fn read_building(&mut self) -> Result<Building, InputError> {
        self.console.blank()?;
        let name = self.console.prompt_line("Enter building name: ", "name")?;
        let category = self.console.prompt_line(
            "Enter building type (Hospital/School/Office/Park): ",
            "building type",
        )?;
        let floors = self
            .console
            .prompt_integer("Enter number of floors: ", "floors")?;
        let area_per_floor = self
            .console
            .prompt_real("Enter area per floor (sq meters): ", "area per floor")?;
        let capacity = self
            .console
            .prompt_integer("Enter capacity (number of people): ", "capacity")?;
        let operational = self
            .console
            .prompt_bool("Is building operational? (true/false): ", "operational")?;

        Ok(Building::new(
            name,
            category,
            floors,
            area_per_floor,
            capacity,
            operational,
        ))
    }

    fn list_buildings(&mut self) -> Result<(), InputError> {
        if self.city.is_empty() {
            self.console.blank()?;
            return self.console.say("No buildings in the city yet!");
        }

        if self.format == OutputFormat::Json {
            write_buildings_json(self.city.buildings(), self.console.writer())?;
            return Ok(());
        }

        self.console.blank()?;
        self.console.say("====== ALL BUILDINGS IN SMART CITY ======")?;
        for (i, building) in self.city.buildings().iter().enumerate() {
            let header = format!("--- Building {} ---", i + 1);
            let report = building.describe();
            self.console.blank()?;
            self.console.say(&header)?;
            write!(self.console.writer(), "{report}")?;
        }
        Ok(())
    }

    /// Prompts for a 1-based building number and resolves it.
    ///
    /// `Ok(None)` means the problem was already reported to the user.
    fn select_building(&mut self) -> Result<Option<Building>, InputError> {
        if self.city.is_empty() {
            self.console.blank()?;
            self.console.say(&CityError::Empty.to_string())?;
            return Ok(None);
        }

        self.console.blank()?;
        let prompt = format!("Enter building number (1-{}): ", self.city.len());
        let number: i64 = self.console.prompt_integer(&prompt, "building number")?;
        match self.city.get(number) {
            Ok(building) => Ok(Some(building.clone())),
            Err(err) => {
                warn!(%err, "selection rejected");
                self.console.say("Invalid building number!")?;
                Ok(None)
            }
        }
    }

    fn check_efficiency(&mut self) -> Result<(), InputError> {
        let Some(building) = self.select_building()? else {
            return Ok(());
        };
        let occupancy: i64 = self
            .console
            .prompt_integer("Enter current occupancy: ", "occupancy")?;
        let efficiency = building.efficiency(occupancy);
        debug!(name = %building.name, occupancy, ?efficiency, "efficiency computed");
        self.console.say(&efficiency.to_string())
    }

    fn perform_maintenance(&mut self) -> Result<(), InputError> {
        let Some(building) = self.select_building()? else {
            return Ok(());
        };
        let checklist = maintenance_checklist(&building);
        if checklist.is_generic() {
            debug!(category = %building.category, "no dedicated checklist, using generic");
        }
        self.console.blank()?;
        write!(self.console.writer(), "{}", checklist.report(&building.name))?;
        Ok(())
    }

    fn city_statistics(&mut self) -> Result<(), InputError> {
        let Some(stats) = self.city.statistics() else {
            self.console.blank()?;
            return self.console.say("No buildings to calculate statistics!");
        };

        if self.format == OutputFormat::Json {
            write_stats_json(&stats, self.console.writer())?;
            return Ok(());
        }

        self.console.blank()?;
        for line in stats_lines(&stats) {
            self.console.say(&line)?;
        }
        Ok(())
    }
}

fn stats_lines(stats: &CityStats) -> Vec<String> {
    vec![
        "====== CITY STATISTICS ======".to_string(),
        format!("Total Buildings: {}", stats.total_buildings),
        format!("Total Floors: {}", stats.total_floors),
        format!("Total Area: {:.2} sq meters", stats.total_area),
        format!("Operational Buildings: {}", stats.operational),
        format!("Under Maintenance: {}", stats.under_maintenance),
        format!("Average Building Area: {:.2} sq meters", stats.average_area),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Result<(), InputError>, City, String) {
        let mut out = Vec::new();
        let mut app = App::new(Cursor::new(script.as_bytes().to_vec()), &mut out);
        let result = app.run();
        let city = std::mem::take(&mut app.city);
        drop(app);
        (result, city, String::from_utf8(out).unwrap())
    }

    const ADD_OFFICE: &str = "1\nTower\nOffice\n4\n100\n20\ntrue\n";

    #[test]
    fn exit_stops_the_loop() {
        let (result, city, out) = run_script("6\n");
        assert!(result.is_ok());
        assert!(city.is_empty());
        assert!(out.contains("Thank you for using Smart City Management System!"));
        assert_eq!(out.matches("Enter your choice: ").count(), 1);
    }

    #[test]
    fn unknown_choice_redisplays_menu() {
        let (result, _, out) = run_script("9\n0\n6\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Invalid choice! Please try again.").count(), 2);
        assert_eq!(out.matches("Enter your choice: ").count(), 3);
    }

    #[test]
    fn full_city_rejects_without_prompting() {
        let script = format!("{}1\n6\n", ADD_OFFICE.repeat(10));
        let (result, city, out) = run_script(&script);
        assert!(result.is_ok());
        assert_eq!(city.len(), 10);
        assert!(out.contains("City is full!"));
        assert_eq!(out.matches("Enter building name: ").count(), 10);
    }

    #[test]
    fn empty_city_reports_for_every_query() {
        let (result, _, out) = run_script("2\n3\n4\n5\n6\n");
        assert!(result.is_ok());
        assert!(out.contains("No buildings in the city yet!"));
        assert_eq!(out.matches("No buildings available!").count(), 2);
        assert!(out.contains("No buildings to calculate statistics!"));
        assert!(!out.contains("Enter building number"));
    }

    #[test]
    fn out_of_range_selection_skips_computation() {
        let script = format!("{ADD_OFFICE}3\n0\n3\n2\n4\n2\n6\n");
        let (result, _, out) = run_script(&script);
        assert!(result.is_ok());
        assert_eq!(out.matches("Invalid building number!").count(), 3);
        assert!(!out.contains("Enter current occupancy"));
        assert!(!out.contains("Maintenance Check"));
    }

    #[test]
    fn efficiency_for_selected_building() {
        let script = format!("{ADD_OFFICE}3\n1\n5\n3\n1\n0\n3\n1\n21\n6\n");
        let (result, _, out) = run_script(&script);
        assert!(result.is_ok());
        assert!(out.contains("Enter building number (1-1): "));
        assert!(out.contains("Building Efficiency: 25.00%"));
        assert!(out.contains("Building is empty."));
        assert!(out.contains("WARNING: Building is overcrowded!"));
    }

    #[test]
    fn negative_occupancy_reports_percentage_and_continues() {
        let script = format!("{ADD_OFFICE}3\n1\n-5\n6\n");
        let (result, _, out) = run_script(&script);
        assert!(result.is_ok());
        assert!(out.contains("Building Efficiency: -25.00%"));
        assert_eq!(out.matches("Enter your choice: ").count(), 3);
        assert!(out.ends_with("Thank you for using Smart City Management System!\n"));
    }

    #[test]
    fn maintenance_uses_category_checklist() {
        let script = format!("{ADD_OFFICE}4\n1\n6\n");
        let (result, _, out) = run_script(&script);
        assert!(result.is_ok());
        assert!(out.contains("=== Maintenance Check for Tower ==="));
        assert!(out.contains("- Checking HVAC systems"));
        assert!(out.contains("Maintenance completed!"));
    }

    #[test]
    fn statistics_report_aggregates() {
        let script = "1\nA\nSchool\n2\n100\n50\ntrue\n\
                      1\nB\nPark\n3\n50\n20\nfalse\n\
                      5\n6\n";
        let (result, _, out) = run_script(script);
        assert!(result.is_ok());
        assert!(out.contains("Total Buildings: 2"));
        assert!(out.contains("Total Floors: 5"));
        assert!(out.contains("Total Area: 350.00 sq meters"));
        assert!(out.contains("Operational Buildings: 1"));
        assert!(out.contains("Under Maintenance: 1"));
        assert!(out.contains("Average Building Area: 175.00 sq meters"));
    }

    #[test]
    fn malformed_number_is_fatal() {
        let (result, city, out) = run_script("1\nTower\nOffice\nfour\n100\n20\ntrue\n6\n");
        assert!(matches!(result, Err(InputError::InvalidInteger { ref field, .. }) if field == "floors"));
        assert!(city.is_empty());
        assert!(!out.contains("Thank you"));
    }

    #[test]
    fn malformed_boolean_is_fatal() {
        let (result, city, _) = run_script("1\nTower\nOffice\n4\n100\n20\nyes\n6\n");
        assert!(matches!(result, Err(InputError::InvalidBoolean { .. })));
        assert!(city.is_empty());
    }

    #[test]
    fn non_numeric_menu_choice_is_fatal() {
        let (result, _, _) = run_script("exit\n");
        assert!(matches!(result, Err(InputError::InvalidInteger { .. })));
    }

    #[test]
    fn closed_input_is_fatal() {
        let (result, _, _) = run_script("2\n");
        assert!(matches!(result, Err(InputError::UnexpectedEof { .. })));
    }

    #[test]
    fn json_format_renders_listing_and_stats() {
        let mut out = Vec::new();
        let script = format!("{ADD_OFFICE}2\n5\n6\n");
        let mut app =
            App::new(Cursor::new(script.into_bytes()), &mut out).with_format(OutputFormat::Json);
        app.run().unwrap();
        drop(app);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\"name\": \"Tower\""));
        assert!(out.contains("\"total_area\": 400.0"));
        assert!(out.contains("\"status\": \"Operational\""));
        assert!(out.contains("\"total_floors\": 4"));
        assert!(!out.contains("====== CITY STATISTICS ======"));
    }

    #[test]
    fn stats_lines_layout() {
        let stats = CityStats {
            total_buildings: 1,
            total_floors: 3,
            total_area: 600.0,
            operational: 1,
            under_maintenance: 0,
            average_area: 600.0,
        };
        assert_eq!(stats_lines(&stats)[3], "Total Area: 600.00 sq meters");
    }
}
