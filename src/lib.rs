pub mod actions;
pub mod catalog;
pub mod config;
pub mod context;
pub mod menu;
pub mod notify;
pub mod observability;
