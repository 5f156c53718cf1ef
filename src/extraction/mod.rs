//! Prescription text extraction pipeline.
//!
//! Turns one block of OCR output into structured medicine records plus the
//! prescribing doctor's line. Everything in here is pure and total over
//! string input: no I/O, no shared state, safe to call from any number of
//! request handlers at once.

pub mod classify;
pub mod doctor;
pub mod fields;
pub mod keywords;
pub mod orchestrator;
pub mod types;

pub use classify::*;
pub use doctor::*;
pub use fields::*;
pub use orchestrator::*;
pub use types::*;
