//! Build plan types exchanged with the lifecycle
//!
//! [`BuildPlan`] is what detection declares. [`BuildpackPlan`] is what the
//! lifecycle hands to generation: the entries this extension was selected to
//! provide.

mod build_plan;
mod resolver;

pub use build_plan::{
    BuildPlan, BuildPlanAlternative, BuildPlanProvide, BuildPlanRequire, BuildpackPlan,
    BuildpackPlanEntry,
};
pub use resolver::PlanEntryResolver;

pub const PLAN_ENTRY_JDK: &str = "jdk";
pub const PLAN_ENTRY_JRE: &str = "jre";
