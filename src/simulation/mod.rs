//! Headless shell around the board: ownership of the current generation,
//! pacing, view geometry and pattern analysis

pub mod analysis;
pub mod pacer;
pub mod session;
pub mod viewport;

pub use analysis::{Behavior, PatternAnalysis};
pub use pacer::GenerationPacer;
pub use session::{Command, Outcome, Session};
pub use viewport::Viewport;
