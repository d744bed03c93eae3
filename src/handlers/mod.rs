pub mod habits;
pub mod health;
pub mod logs;
pub mod notes;
