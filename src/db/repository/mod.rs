//! Repository layer — entity-scoped database operations.
//!
//! Free functions over a `Connection`, one module per entity. All public
//! functions are re-exported here.

mod appointment;
mod doctor;
mod patient;
mod report;
mod symptom;

pub use appointment::*;
pub use doctor::*;
pub use patient::*;
pub use report::*;
pub use symptom::*;
