//! # Unit Components
//!
//! Organizes the unit tests by component: the branch prediction unit, the
//! configuration layer, and the trace replay driver.
