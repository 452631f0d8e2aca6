//! Page geometry shared by rendering and mouse hit-testing

use ratatui::prelude::*;

use crate::domain::repo::FILES;

pub const HEADER_HEIGHT: u16 = 2;
pub const TITLE_HEIGHT: u16 = 5;
pub const FOOTER_HEIGHT: u16 = 1;

/// Borders, commit line and table header around the file rows
const FILES_CHROME: u16 = 4;

/// Areas of every page section for one terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub title: Rect,
    pub branch_bar: Rect,
    /// Bordered block with the commit line and file table
    pub files: Rect,
    pub commit: Rect,
    /// File table including its header row
    pub file_table: Rect,
    pub code: Option<Rect>,
    pub readme: Rect,
    pub footer: Rect,
}

impl PageLayout {
    pub fn new(area: Rect, show_code: bool) -> Self {
        let [header, title, main, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        let [explorer, readme] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(main);

        let files_height = FILES.len() as u16 + FILES_CHROME;
        let (branch_bar, files, code) = if show_code {
            let [branch_bar, files, code] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(files_height),
                Constraint::Min(0),
            ])
            .areas(explorer);
            (branch_bar, files, Some(code))
        } else {
            let [branch_bar, files] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(explorer);
            (branch_bar, files, None)
        };

        let inner = files.inner(Margin::new(1, 1));
        let [commit, file_table] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        Self {
            header,
            title,
            branch_bar,
            files,
            commit,
            file_table,
            code,
            readme,
            footer,
        }
    }

    /// Rows of the file table below its header.
    pub fn file_rows(&self) -> Rect {
        let mut rows = self.file_table;
        rows.y = rows.y.saturating_add(1);
        rows.height = rows.height.saturating_sub(1);
        rows
    }

    /// First visible file row when the cursor is on `cursor`.
    ///
    /// The cursor stays on the last visible row while it is below the fold.
    pub fn file_offset(&self, cursor: usize) -> usize {
        let visible = usize::from(self.file_rows().height).max(1);
        cursor.saturating_sub(visible - 1)
    }

    /// Index of the file row at `(column, row)`, if any.
    pub fn file_at(&self, column: u16, row: u16, cursor: usize) -> Option<usize> {
        let rows = self.file_rows();
        if !rows.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.file_offset(cursor) + usize::from(row - rows.y);
        (index < FILES.len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sections_stack_vertically() {
        let layout = PageLayout::new(Rect::new(0, 0, 120, 40), false);

        assert_eq!(layout.header, Rect::new(0, 0, 120, HEADER_HEIGHT));
        assert_eq!(layout.title.y, HEADER_HEIGHT);
        assert_eq!(layout.branch_bar.y, HEADER_HEIGHT + TITLE_HEIGHT);
        assert_eq!(layout.footer, Rect::new(0, 39, 120, 1));
        assert_eq!(layout.readme.x, layout.files.right());
        assert!(layout.code.is_none());
    }

    #[test]
    fn test_code_viewer_sits_below_files() {
        let layout = PageLayout::new(Rect::new(0, 0, 120, 60), true);
        let code = layout.code.unwrap();

        assert_eq!(layout.files.height, FILES.len() as u16 + FILES_CHROME);
        assert_eq!(code.y, layout.files.bottom());
        assert_eq!(layout.file_rows().height, FILES.len() as u16);
    }

    #[test]
    fn test_file_at_maps_rows_to_entries() {
        let layout = PageLayout::new(Rect::new(0, 0, 120, 60), false);
        let rows = layout.file_rows();

        assert_eq!(layout.file_at(rows.x + 2, rows.y, 0), Some(0));
        assert_eq!(layout.file_at(rows.x + 2, rows.y + 5, 0), Some(5));
        assert_eq!(layout.file_at(rows.x + 2, rows.y - 1, 0), None);
        assert_eq!(layout.file_at(layout.readme.x + 1, rows.y, 0), None);
        // rows past the last entry are empty
        assert_eq!(layout.file_at(rows.x, rows.y + FILES.len() as u16, 0), None);
    }

    #[test]
    fn test_file_offset_follows_cursor_on_short_terminals() {
        let layout = PageLayout::new(Rect::new(0, 0, 120, 20), false);
        let visible = usize::from(layout.file_rows().height);
        assert!(visible < FILES.len());

        assert_eq!(layout.file_offset(0), 0);
        assert_eq!(layout.file_offset(visible - 1), 0);
        assert_eq!(layout.file_offset(visible), 1);

        let rows = layout.file_rows();
        assert_eq!(layout.file_at(rows.x, rows.y, visible), Some(1));
    }
}
