pub mod board;
pub mod settings;
pub mod stats;
pub mod tasks;
