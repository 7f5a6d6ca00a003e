pub mod calculation;
pub mod health;
