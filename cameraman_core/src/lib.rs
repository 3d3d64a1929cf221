//! Shared domain types for the cameraman plugin
//!
//! Everything in this crate is engine-agnostic logic: camera poses and the
//! travel stepper, per-player waypoint lists, the message catalog, and the
//! world registry. The `cameraman_server` crate wires these into a running
//! server.

#![warn(missing_docs)]

pub mod camera;
pub mod entities;
pub mod messages;
pub mod waypoints;
pub mod world;
