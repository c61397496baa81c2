pub mod coordinate;
pub mod directions;
pub mod eta;
