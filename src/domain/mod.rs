//! Domain layer for spaceman
//!
//! Plain data types shared by the configuration and display layers.

pub mod models;
