pub mod metrics;
pub mod sink;

pub use sink::{ObsEvent, ObsSink, record, with_sink};
