//! Generative completion interface
//!
//! The analyst screens (play predictor, scouting reports, practice
//! planner, chat) talk to a generative text/JSON completion service.
//! The diagram core never calls it; this module only defines the seam
//! those screens program against: a prompt plus an optional flat output
//! schema in, text or schema-conforming JSON out, with failures
//! classified as rate-limited, invalid-argument, or unknown. Failed
//! calls are never retried automatically; the user re-triggers the
//! action.

pub mod error;
pub mod service;

pub use error::CompletionError;
pub use service::{
    CompletionRequest, CompletionResponse, CompletionService, FieldKind, ResponseSchema,
    SchemaField,
};
