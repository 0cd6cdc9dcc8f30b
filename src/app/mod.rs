mod hover;
mod phases;
mod root;
mod state;

pub(crate) use hover::HoverState;
pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, FailedState, LoadOutcome, LoadProgress, LoadingState, RunningState};

pub use root::App;
