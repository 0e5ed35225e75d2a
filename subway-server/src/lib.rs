//! Subway line catalog server.
//!
//! A web application that manages subway lines: the stations they connect
//! and the ordered sections that make up each route.

pub mod catalog;
pub mod domain;
pub mod stations;
pub mod web;
