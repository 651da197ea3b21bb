//! Component state for the dashboard.

use common::model::calculation::ResultRow;

use super::helpers::Severity;

/// Request lifecycle of the calculation workflow. Every terminal state is
/// re-enterable by a new submission; the form disables its submit control
/// while `Submitting`, the state machine itself does not queue or reject
/// re-entrant submissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcState {
    Idle,
    Submitting,
    Success,
    PartialSuccess,
    Empty,
    Failed,
}

/// Main state container for the dashboard page.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct Dashboard {
    /// Where the current (or last) submission sits in its lifecycle.
    pub calc_state: CalcState,

    /// Result rows of the last successful or partially successful run.
    /// Cleared on every new submission.
    pub results: Vec<ResultRow>,

    /// User-facing message for the warning/error/info banner, when any.
    pub message: Option<(Severity, String)>,

    /// True while the success export is being written (shows the overlay).
    pub downloading: bool,

    /// Whether the profile dropdown menu is open.
    pub menu_open: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            calc_state: CalcState::Idle,
            results: Vec::new(),
            message: None,
            downloading: false,
            menu_open: false,
        }
    }
}
