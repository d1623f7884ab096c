//! Cosmos SDK client - Protobuf codec and type registry.
//!
//! This crate maps typed messages to and from their canonical protobuf wire
//! form:
//! - `codec`: deterministic encode/decode plus a structural wire scanner
//! - `message`: the `TypedMessage` / `ProtoMessage` traits binding a Rust
//!   type to its type URL
//! - `registry`: the type URL to schema mapping used to pack and unpack `Any`
//! - generated-style message types under `google`, `cosmos` and `cosmwasm`

pub mod message;
pub mod codec;
pub mod registry;
pub mod google;
pub mod cosmos;
pub mod cosmwasm;

mod error;
pub use error::{DecodeError, ProtoError};
pub use google::protobuf::Any;
pub use message::{ProtoMessage, TypedMessage};
pub use registry::{DecodedMessage, MessageSchema, Registry, TypedSchema};
