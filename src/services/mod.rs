// src/services/mod.rs

pub mod baike;
