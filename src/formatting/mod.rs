pub mod members;
pub mod theme;
pub mod utils;
