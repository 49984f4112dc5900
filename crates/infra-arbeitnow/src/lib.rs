// Joblens Infrastructure - Arbeitnow Adapter
// Implements: JobSource over the public job-board HTTP API

pub mod client;
pub mod html;
pub mod models;

pub use client::{ArbeitnowClient, DEFAULT_API_URL};
