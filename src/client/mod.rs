pub mod config;
pub mod error;
pub mod form;
pub mod gui;
pub mod models;
pub mod services;
