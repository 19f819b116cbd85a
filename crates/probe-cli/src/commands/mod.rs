//! Command implementations.

mod deps;
mod packages;
mod utils;

pub use deps::execute as deps_execute;
pub use packages::execute as packages_execute;
