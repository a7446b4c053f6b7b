//! Worker tasks that back the runtime orchestration.
//!
//! The round worker is the single owner of round state; handles talk to it
//! over channels.

mod round;

pub use round::{Command, RoundTicket, RoundWorker};
