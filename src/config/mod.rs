//! Configuration types, validation, and output layout.

mod paths;
mod types;
mod validate;

pub use paths::OutputLayout;
pub use types::{Config, ImageFormat, InputFormat, LefseOptions, PlotOptions};
pub use validate::{MappingHeader, validate};
