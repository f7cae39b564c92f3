// Library for tests to access modules

pub mod config;
pub mod counter_source;
pub mod error;
pub mod formatter;
pub mod models;
pub mod monitor;
pub mod publisher;
pub mod sampler;
pub mod selector;
