pub mod config;
pub mod data_storage;
pub mod date;
pub mod messages;
pub mod state;
pub mod task;
pub mod validation;
pub mod view;
