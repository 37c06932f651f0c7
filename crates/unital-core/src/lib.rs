//! # unital-core
//!
//! Unit-identity interning for the unital linear-algebra engine.
//!
//! This crate provides:
//! - `UnitId`: a 32-bit interned identity for a symbolic unit name
//! - A process-wide registry mapping names to ids and back
//! - O(1) unit equality via interning
//!
//! ## Design Principles
//!
//! - **Interned identities**: every distinct unit name is stored exactly
//!   once, so two occurrences of the same name compare equal by id
//! - **Lazy growth**: the registry grows on first use of a name and never
//!   shrinks for the lifetime of the process

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod intern;
pub mod unit;

pub use intern::UnitTable;
pub use unit::{unit, unit_name, UnitId};
