//! Application layer - use case services.
//!
//! This module contains the orchestration that ties domain logic and
//! adapters together. Services accept domain types, talk to the outside
//! world only through ports (traits), and return domain types.

mod resolver;

pub use resolver::PortResolver;
