use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::{repo::readme, ui::Pane},
};

/// Focus and scroll state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Pane,
    pub readme_scroll: u16,
}

impl UiState {
    pub fn is_focused(&self, pane: Pane) -> bool {
        self.focus == pane
    }

    /// `code_visible` tells whether the code viewer can take focus.
    pub fn update(&mut self, msg: UiMsg, code_visible: bool) -> Vec<Cmd> {
        match msg {
            UiMsg::FocusNext => self.focus = self.focus.next(code_visible),
            UiMsg::Focus(Pane::Code) if !code_visible => return vec![],
            UiMsg::Focus(pane) => self.focus = pane,
            UiMsg::ScrollReadmeUp => self.readme_scroll = self.readme_scroll.saturating_sub(1),
            UiMsg::ScrollReadmeDown => {
                self.readme_scroll = (self.readme_scroll + 1).min(readme::max_scroll());
            }
            UiMsg::ScrollReadmeTop => self.readme_scroll = 0,
            UiMsg::ScrollReadmeBottom => self.readme_scroll = readme::max_scroll(),
        }
        vec![Cmd::RequestRender]
    }
}
