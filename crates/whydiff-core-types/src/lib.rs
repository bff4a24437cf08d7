//! Core types shared across whydiff facilities
//!
//! This crate holds the vocabulary that both the logging facility and the
//! trace sinks agree on:
//!
//! - **Schema constants**: canonical field keys and event names

pub mod schema;
