//! Todo domain: the record model, the REST client, and request dispatch.

pub mod client;
pub mod commands;
pub mod error;
pub mod manager;
pub mod model;
