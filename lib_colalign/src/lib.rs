pub mod alignment;
pub mod alphabet;
pub mod error;
pub mod feature;
mod io;
pub mod sequence;
