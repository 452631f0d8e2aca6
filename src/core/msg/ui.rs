use crate::domain::ui::Pane;

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    FocusNext,
    Focus(Pane),
    ScrollReadmeUp,
    ScrollReadmeDown,
    ScrollReadmeTop,
    ScrollReadmeBottom,
}
