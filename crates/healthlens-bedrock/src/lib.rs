//! healthlens-bedrock
//!
//! Symptom analysis through the Bedrock Converse API: the instruction
//! template, the model call, and cleaning/parsing of the model's JSON reply.

pub mod analysis;
pub mod client;
pub mod error;
pub mod prompt;
pub mod reply;
pub mod tokens;
