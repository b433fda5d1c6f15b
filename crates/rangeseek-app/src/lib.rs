//! Host harness for the range widget.
//!
//! Stands in for a UI host: establishes the widget size, feeds it a scripted
//! pointer session and collects every selection report.

mod replay;

pub use replay::{ReplayError, ReplayReport, ReplayScript, replay, replay_file};
