pub mod content;
pub mod site;
pub mod terminal;
pub mod tui;
