// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod params;

pub mod diff;
pub mod notify;
pub mod resolve;
pub mod runner;
pub mod scorecard;
pub mod store;
pub mod upcoming;
