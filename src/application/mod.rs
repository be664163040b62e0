pub mod config;
pub mod ports;
pub mod sequencer;
pub mod use_cases;

pub use config::*;
pub use ports::*;
pub use sequencer::*;
pub use use_cases::*;
