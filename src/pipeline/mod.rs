//! Section generation pipeline.
//!
//! A run has two phases:
//! 1. **Planning** (`plan_request`): decide per section whether to skip it,
//!    leave it empty, use the user's override, or call the service.
//! 2. **Running** (`run_plan`): issue all service calls concurrently and merge
//!    the results into `SectionContents`.

mod plan;
mod runner;


pub use plan::{GenerationPlan, SectionPlan, plan_request};
pub use runner::{GenerationReport, Outcome, RunOptions, run_plan};
