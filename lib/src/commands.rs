pub mod color;
pub mod commander;
pub mod help;
