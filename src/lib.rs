// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod params;

pub mod data;
pub mod dedup;
pub mod derive;
pub mod file;
pub mod geometry;
pub mod order;
pub mod render;
pub mod runner;
pub mod scrape;
