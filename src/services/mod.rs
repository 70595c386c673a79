// src/services/mod.rs
//! Badge Service operations and the normalizer they report through.

mod assertions;
mod auth;
pub mod badgr_client;
mod badge_classes;
mod issuers;
pub mod normalizer;
pub mod payloads;
mod routes;
