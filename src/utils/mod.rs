// src/utils/mod.rs

pub mod extract;
pub mod form;
pub mod jwt;
pub mod verify;
