//! Batch execution of LEfSe across sample groups.

mod group;
mod runner;

pub use group::Group;
pub use runner::run;
