/// Messages specific to ExplorerState
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerMsg {
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,
    /// Open the row under the cursor
    Open,
    /// Move the cursor to a row and open it (mouse click)
    OpenAt(usize),
    /// Hide the code viewer
    Close,
    ScrollCodeUp,
    ScrollCodeDown,
}
