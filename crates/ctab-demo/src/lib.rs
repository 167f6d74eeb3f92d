#![forbid(unsafe_code)]

//! Terminal college table: search, sort, and load-on-scroll.

pub mod app;
pub mod cli;
pub mod logging;
