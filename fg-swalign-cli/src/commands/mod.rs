pub mod align;
pub mod command;
