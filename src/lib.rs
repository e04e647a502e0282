//! Dialpad REST API as a flat set of callable operations.
//!
//! Every operation in [`registry`] maps to exactly one HTTP endpoint. A
//! [`DialpadClient`] validates the named arguments, drops unset ones, sends
//! one request and hands back the decoded reply or a [`DialpadError`].

pub mod client;
pub mod common;
pub mod config;
pub mod credentials;
pub mod error;
pub mod params;
pub mod registry;

pub use client::{DialpadClient, Reply};
pub use config::ClientConfig;
pub use credentials::{ApiKey, Credentials, NoCredentials};
pub use error::{DialpadError, Result};
pub use params::ParamBag;
pub use registry::{Operation, Verb};
