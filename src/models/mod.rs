// src/models/mod.rs
//! Data structures exchanged with the Badge Service.

pub mod assertion;
pub mod badge_class;
pub mod credential;
pub mod issuer;
pub mod one_or_many;
pub mod outcome;
