// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod data;
pub mod rows;
pub mod runner;
pub mod source;
pub mod store;

pub use data::{Map, Rfc, Value};
pub use error::{Error, Result};
