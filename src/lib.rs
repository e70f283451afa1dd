pub mod config;
pub mod directory;
pub mod interactive;
pub mod output;
pub mod payment;
pub mod quiz;
pub mod store;
