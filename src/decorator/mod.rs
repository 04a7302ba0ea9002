pub mod facade;
pub mod listeners;
pub mod markup;
pub mod node;
pub mod options;
pub mod pattern;
pub mod runs;
pub mod tree;

pub use facade::*;
pub use listeners::*;
pub use markup::*;
pub use node::*;
pub use options::*;
pub use pattern::*;
pub use runs::*;
pub use tree::*;

#[cfg(test)]
mod tests;
