//! Ports: interfaces the domain expects its environment to provide

pub mod clock;

pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
