use ratatui::layout::{Constraint, Layout, Rect};

/// Rows taken by the status header and by the key-hint footer.
const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 3;

/// Header, film body and footer, top to bottom.
///
/// The body absorbs whatever the two bars leave over.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_ROWS),
        Constraint::Min(0),
        Constraint::Length(FOOTER_ROWS),
    ])
    .areas(area);
    (header, body, footer)
}

/// Rows of film text visible for a screen of `area`.
pub fn body_rows(area: Rect) -> usize {
    usize::from(layout_regions(area).1.height)
}
