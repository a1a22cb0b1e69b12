//! # Generic gRPC Transport
//!
//! This module contains the low-level building blocks for performing gRPC calls against
//! the Senzing services.
//!
//! Unlike generated `tonic` clients, which expose one struct per service, the client here
//! is shared by every subsystem wrapper and addresses methods by path, encoding the
//! `prost` messages from [`crate::generated`] on the fly.
pub mod client;
