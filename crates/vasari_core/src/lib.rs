//! Core data types for the Vasari MVP generator.
//!
//! This crate provides the foundation data types shared by the model
//! clients and the generation pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod request;
mod response;
mod role;

pub use message::{Message, MessageBuilder, MessageBuilderError};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError};
pub use response::{ContentBlock, ContentPart, StageResponse};
pub use role::Role;
