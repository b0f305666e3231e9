//! Command implementations shared by the `roll` and `lookup5e` binaries.

pub mod commands;
pub mod logging;
