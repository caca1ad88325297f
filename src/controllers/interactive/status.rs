use crate::controllers::interactive::session::{Mode, SessionState};

const INTERACTIVE_INSTRUCTIONS: &str =
    "Scroll up/down to add/remove iterations, use arrows to move origin";
const STILL_INSTRUCTIONS: &str = "Click the button to switch back to interactive mode";

/// Text shown next to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusText {
    pub status: String,
    pub instructions: String,
    /// Label of the control that switches modes.
    pub switch_label: String,
}

#[must_use]
pub fn describe(session: &SessionState) -> StatusText {
    match session.mode() {
        Mode::Interactive => StatusText {
            status: format!(
                "Interactive: true, {} iterations",
                session.iteration_budget()
            ),
            instructions: INTERACTIVE_INSTRUCTIONS.to_owned(),
            switch_label: "Switch to hi-res render".to_owned(),
        },
        Mode::StillRender => StatusText {
            status: "Interactive: false".to_owned(),
            instructions: STILL_INSTRUCTIONS.to_owned(),
            switch_label: "Switch to interactive".to_owned(),
        },
    }
}
