//! Message bindings for the Senzing gRPC services.
//!
//! These files are produced by `cargo run --features gen-proto --bin generate-senzing-protos`
//! from the schemas in `proto/`. Do not edit them by hand.
#![allow(clippy::all)]

pub mod szconfig;
pub mod szconfigmanager;
pub mod szdiagnostic;
pub mod szengine;
pub mod szproduct;
