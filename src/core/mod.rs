//! Constants and configuration shared by every part of the machine.

#![allow(unused_imports)]

pub mod config;
pub mod constants;

pub use config::*;
pub use constants::*;
