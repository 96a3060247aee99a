// Fixed unit table (length, weight, temperature) and string lookup over it

pub mod catalog;
pub mod definition;
pub mod magnitude;

#[cfg(test)]
mod tests;

pub use catalog::*;
pub use definition::*;
pub use magnitude::*;
