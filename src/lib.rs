//! FEC Web - campaign finance data browser
//!
//! Resolves which election cycle a candidate, committee or election page
//! shows, and turns legacy or ambiguous entry points into redirects to
//! canonical URLs.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
