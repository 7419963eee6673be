//! Domain layer - election calendar and page resolution.
//!
//! Pure logic with no I/O. The election calendar is built once at startup and
//! shared read-only.

pub mod election;
pub mod foundation;
