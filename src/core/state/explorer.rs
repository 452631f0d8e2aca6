use crate::{
    core::{cmd::Cmd, msg::explorer::ExplorerMsg},
    domain::repo::{self, FileEntry, FILES},
};

/// File table and code viewer state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerState {
    /// Row under the keyboard cursor
    pub cursor: usize,
    /// Name of the last opened entry
    pub selected_file: Option<&'static str>,
    pub show_code: bool,
    pub code_scroll: u16,
}

impl ExplorerState {
    pub fn cursor_entry(&self) -> &'static FileEntry {
        &FILES[self.cursor.min(FILES.len() - 1)]
    }

    pub fn is_selected(&self, entry: &FileEntry) -> bool {
        self.selected_file == Some(entry.name)
    }

    fn open(&mut self, index: usize) -> Vec<Cmd> {
        let Some(entry) = FILES.get(index) else {
            return vec![];
        };

        self.cursor = index;
        self.selected_file = Some(entry.name);
        let show_code = entry.has_code();
        if show_code && !self.show_code {
            self.code_scroll = 0;
        }
        self.show_code = show_code;
        vec![Cmd::RequestRender]
    }

    pub fn update(&mut self, msg: ExplorerMsg) -> Vec<Cmd> {
        let last = FILES.len() - 1;
        match msg {
            ExplorerMsg::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            ExplorerMsg::CursorDown => self.cursor = (self.cursor + 1).min(last),
            ExplorerMsg::CursorFirst => self.cursor = 0,
            ExplorerMsg::CursorLast => self.cursor = last,
            ExplorerMsg::Open => return self.open(self.cursor),
            ExplorerMsg::OpenAt(index) => return self.open(index),
            ExplorerMsg::Close => {
                if !self.show_code {
                    return vec![];
                }
                self.show_code = false;
            }
            ExplorerMsg::ScrollCodeUp => self.code_scroll = self.code_scroll.saturating_sub(1),
            ExplorerMsg::ScrollCodeDown => {
                self.code_scroll = (self.code_scroll + 1).min(repo::code_max_scroll());
            }
        }
        vec![Cmd::RequestRender]
    }
}
