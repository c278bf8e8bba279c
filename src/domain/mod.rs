pub mod assistant;
pub mod knowledge;
pub mod models;
