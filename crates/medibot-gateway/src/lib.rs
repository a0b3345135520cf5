//! # Medibot Gateway
//!
//! Resilient client for Google's generative-language `generateContent`
//! endpoint. One logical query per call: the client fails fast on a
//! missing or placeholder credential, issues one request per attempt,
//! classifies transport outcomes, consults the backoff policy between
//! attempts, and settles into exactly one terminal outcome.
//!
//! # Example
//!
//! ```rust,no_run
//! use medibot_core::{Expectation, Query};
//! use medibot_gateway::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), medibot_core::Error> {
//!     let client = Client::builder().api_key("your-api-key").build()?;
//!
//!     let query = Query::builder()
//!         .prompt("What does a cardiologist treat?")
//!         .expects(Expectation::FreeText)
//!         .build()?;
//!
//!     let completion = client.generate(&query).await?;
//!     println!("{}", completion.text);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod wire;

pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
