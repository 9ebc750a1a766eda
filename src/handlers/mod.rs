// src/handlers/mod.rs

pub mod baike;
pub mod health;
