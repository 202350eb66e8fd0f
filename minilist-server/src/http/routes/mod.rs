pub mod health;
pub mod load;
pub mod save;
