pub mod calendar;
pub mod cli;
pub mod clients;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod service;
