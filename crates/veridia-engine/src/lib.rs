//! veridia-engine
//!
//! The assessment wizard engine: step sequencing, validation gating,
//! in-flight slot coordination, and submission normalization. Pure state
//! transitions — the controller emits [`controller::Effect`] values
//! instead of performing IO, so every flow is deterministic and
//! replayable in tests.

pub mod collaborators;
pub mod controller;
pub mod error;
pub mod gate;
pub mod mapper;
pub mod pricing;
pub mod sequencer;
pub mod slots;
