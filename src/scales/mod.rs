//! Scales module - the temperature scale catalog and conversion

pub mod convert;
pub mod loader;
pub mod parse;
pub mod scale;

pub use convert::*;
pub use loader::*;
pub use parse::ParseMode;
pub use scale::{Catalog, Scale};
