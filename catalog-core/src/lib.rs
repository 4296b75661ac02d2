#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the product catalog.
///
/// These are plain data structures with the minimal amount of logic needed
/// to uphold their invariants (see [`models::ProductData::validate`]). They
/// know nothing about how they are stored or transported.
pub mod models;

/// Interface traits for the product catalog.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain and the external
/// adapters (a database, an HTTP API) without specifying implementation
/// details, so that storage backends can be swapped without touching the
/// request handling.
pub mod ports;
