//! # Medibot Core
//!
//! Core types for the medibot query gateway:
//! - Query and completion types exchanged with the gateway client
//! - Error taxonomy shared by the gateway, parser, and feature adapters
//! - Response parsing (JSON doctor arrays, markdown sections, free text)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod completion;
pub mod error;
pub mod parse;
pub mod query;

// Re-export commonly used types
pub use completion::{Completion, SourceLink};
pub use error::{Error, ErrorKind, FailureClass, GatewayResult};
pub use parse::{parse, section_body, split_sections, Doctor, ParsedPayload, Section};
pub use query::{Expectation, Query, QueryBuilder};
