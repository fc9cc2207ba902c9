//! Storefront web frontend.
//!
//! Pages and components live in [`pages`] and [`components`]; the stateful
//! parts (phone login, payment callback, analytics cooldown) are plain
//! machines in [`flows`] and [`analytics`] so they run and test without a
//! browser.

#![allow(non_snake_case)]

pub mod analytics;
pub mod app;
pub mod components;
pub mod config;
pub mod flows;
pub mod machine;
pub mod pages;
pub mod platform;
pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
