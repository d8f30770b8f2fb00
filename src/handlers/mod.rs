// src/handlers/mod.rs

pub mod admin;
pub mod auth;
pub mod companies;
pub mod dashboard;
pub mod profile;
pub mod resume;
pub mod skills;
