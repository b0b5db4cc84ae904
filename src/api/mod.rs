//! Signed access to the BOTR REST API
//!
//! [`Params`] holds the request parameters, [`auth`] signs them,
//! [`ClientGeneric`] sends them and [`Envelope`] unwraps the answer.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod params;

pub use auth::{SIGNATURE_PARAM, api_nonce, api_timestamp, signature};
pub use client::{AUTH_PARAMS, Client, ClientGeneric};
pub use envelope::Envelope;
pub use params::Params;
