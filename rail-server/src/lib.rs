//! Rail data server.
//!
//! Scrapes an undocumented railway-information site and republishes its
//! train lookups, station-pair searches, routes and live station boards as
//! a stable JSON API.

pub mod config;
pub mod domain;
pub mod parse;
pub mod service;
pub mod upstream;
pub mod web;
