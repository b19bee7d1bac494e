pub mod health;
pub mod stands;
