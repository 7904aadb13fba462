//! Deployment parameters for the Microsponsors contract, and scripts for inspecting them.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod registry;
pub mod types;
pub mod utils;
