//! Application layer: runs the analysis and the algorithm demos, and
//! collects the results into a [`DemoReport`].

mod orchestrator;
mod report;

pub use orchestrator::App;
pub use report::{
    ColorStats, DemoReport, FibonacciReport, PersistenceOutcome, ProbabilityReport, SearchReport,
};
