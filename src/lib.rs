#![crate_type = "lib"]
#![crate_name = "relq"]

pub mod common;
pub mod fixture;
pub mod query;
pub mod scenarios;
pub mod types;
