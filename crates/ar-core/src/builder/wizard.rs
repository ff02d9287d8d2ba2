//! Report builder wizard steps

use serde::{Deserialize, Serialize};

/// The three wizard pages of the report builder.
///
/// Transitions are strictly single-step and only happen on explicit user
/// action; both ends clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WizardStep {
    /// Name, type and data source selection
    Info,
    /// Fields, filters and sorting
    Layout,
    /// Preview of the executed draft
    Preview,
}

impl WizardStep {
    /// 1-based step number shown in the UI
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Info => 1,
            WizardStep::Layout => 2,
            WizardStep::Preview => 3,
        }
    }

    pub fn next(self) -> Self {
        match self {
            WizardStep::Info => WizardStep::Layout,
            WizardStep::Layout => WizardStep::Preview,
            WizardStep::Preview => WizardStep::Preview,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            WizardStep::Info => WizardStep::Info,
            WizardStep::Layout => WizardStep::Info,
            WizardStep::Preview => WizardStep::Layout,
        }
    }
}
