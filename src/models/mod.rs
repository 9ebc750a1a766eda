// src/models/mod.rs

pub mod baike;
pub mod request;
