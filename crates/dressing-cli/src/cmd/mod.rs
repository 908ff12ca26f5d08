pub mod completions;
pub mod demo;
pub mod order;
