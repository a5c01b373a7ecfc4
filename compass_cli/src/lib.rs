// Career Compass terminal front end
// Screens, components, and the event loop for the interactive
// assessment; the binary entry points live in main.rs.

pub mod components;
pub mod keymap;
pub mod screens;
pub mod ui;
