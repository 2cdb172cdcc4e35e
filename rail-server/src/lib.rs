//! Rail routing server.
//!
//! Computes the shortest route between two stations of a rail network
//! loaded from static JSON files, records each computed trip under an
//! analytic code, and reports total distances per code.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod domain;
pub mod loader;
pub mod network;
pub mod planner;
pub mod web;
