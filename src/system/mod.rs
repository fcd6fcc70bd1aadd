//! Core system components shared by the tasks
pub mod event;
pub mod indicator;
pub mod resources;
pub mod state;
