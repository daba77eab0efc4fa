pub mod app;
pub mod console;
pub mod menu;

pub use app::{App, OutputFormat};
pub use console::Console;
pub use menu::MenuChoice;
