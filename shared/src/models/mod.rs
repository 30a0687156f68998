pub mod grid;
pub mod poi;
pub mod point;
pub mod view;
