// Domain models

mod counters;
mod speed;

pub use counters::{CounterSample, InterfaceCounters};
pub use speed::{DisplayState, SpeedResult};
