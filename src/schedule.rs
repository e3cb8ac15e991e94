//! Fleet assignment engine.
//!
//! A depth-first backtracking search over immutable [`state::ScheduleState`]s. Each step takes the
//! flights sharing the earliest pending departure, tries every aircraft already positioned to fly
//! them, and falls back to ferrying an idle aircraft to the origin when none is.

pub mod matcher;
pub mod planner;
pub mod reposition;
pub mod state;


pub use planner::{Planner, PlannerConfig, SearchStats};
