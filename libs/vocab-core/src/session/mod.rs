//! Practice session building and running.

pub mod builder;
pub mod runner;

pub use builder::{build_queue, select_cards, Scope, Selection};
pub use runner::{
    GradeOutcome, ReviewOutcome, Session, SessionHandle, SessionSnapshot, SessionStatus,
    SessionSummary,
};
