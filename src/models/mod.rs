// src/models/mod.rs

pub mod activity;
pub mod attempt;
pub mod company;
pub mod goal;
pub mod profile;
pub mod resume;
pub mod skill;
pub mod test;
pub mod user;
