// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;

pub mod cat;
pub mod csv;
pub mod store;
pub mod import;
pub mod view;
pub mod stats;

pub mod shelter;
pub mod scrape;

pub mod file;
pub mod progress;

pub mod cli;
pub mod gui;
