// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod csv;

pub mod aliases;
pub mod tables;
pub mod scan;
pub mod store;
pub mod runner;
pub mod progress;
pub mod cli;

pub mod cache;
pub mod data;
pub mod geo;
pub mod gui;
