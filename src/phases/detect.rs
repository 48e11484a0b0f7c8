use crate::error::Result;
use crate::plan::{BuildPlan, PLAN_ENTRY_JDK, PLAN_ENTRY_JRE};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct DetectContext {
    pub working_dir: PathBuf,
    pub cnb_path: PathBuf,
    pub platform_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectResult {
    pub pass: bool,
    /// Acceptable plans in order of preference.
    pub plans: Vec<BuildPlan>,
}

impl DetectResult {
    pub fn pass(plans: Vec<BuildPlan>) -> Self {
        Self { pass: true, plans }
    }

    pub fn fail() -> Self {
        Self {
            pass: false,
            plans: Vec::new(),
        }
    }

    /// The single plan document the lifecycle expects: the first plan with
    /// the rest as `[[or]]` alternatives.
    pub fn build_plan(&self) -> BuildPlan {
        let mut plans = self.plans.iter().cloned();
        match plans.next() {
            Some(primary) => BuildPlan::with_alternatives(primary, plans.collect()),
            None => BuildPlan::default(),
        }
    }
}

/// Declares that this extension can provide a JDK, a JRE or both. It does not
/// look at the application; whether Java is needed is up to the buildpacks
/// that require these entries.
pub fn detect(context: &DetectContext) -> Result<DetectResult> {
    debug!(working_dir = %context.working_dir.display(), "detecting");

    Ok(DetectResult::pass(vec![
        BuildPlan::providing([PLAN_ENTRY_JDK, PLAN_ENTRY_JRE]),
        BuildPlan::providing([PLAN_ENTRY_JDK]),
        BuildPlan::providing([PLAN_ENTRY_JRE]),
    ]))
}
