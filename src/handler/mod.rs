pub mod health;
pub mod servlet;
