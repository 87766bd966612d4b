pub mod matrix;
pub mod search;
pub mod stats;
