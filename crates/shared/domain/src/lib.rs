//! # Domain Models
//!
//! Pure types describing an NLP model design: the option vocabularies, the multi-select
//! sets, raw field values and the shape of a configurable field.
//! Keep it lean: no I/O and no validation logic, just data and simple helpers.

pub mod choices;
pub mod config;
pub mod constants;
pub mod field;
pub mod sets;
pub mod value;
