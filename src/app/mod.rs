//! Session flow and bookkeeping

pub mod session;
pub mod stats;

pub use session::Session;
pub use stats::SessionStats;
