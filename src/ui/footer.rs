//! Key hints and the list position.

use crate::ui::app::App;
use crate::ui::film_list;
use crate::ui::films::ViewContent;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const FETCH_HINT: &str = "F/Enter: Fetch Movies";
const SCROLL_HINT: &str = "↑/↓ PgUp/PgDn: Scroll";
const QUIT_HINT: &str = "Q: Quit";

pub struct Footer<'a> {
    app: &'a App,
    /// Visible body rows, for the position readout.
    rows: usize,
}

impl<'a> Footer<'a> {
    pub fn new(app: &'a App, rows: usize) -> Self {
        Self { app, rows }
    }

    fn hints(&self) -> Line<'static> {
        let text = Style::default().fg(HEADER_TEXT);
        // Greyed out while the in-flight guard would drop the key.
        let fetch = if self.app.can_fetch() {
            text
        } else {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        };
        let separator = Style::default().fg(HEADER_SEPARATOR);

        Line::from(vec![
            Span::styled(" ", text),
            Span::styled(FETCH_HINT, fetch),
            Span::styled(" │ ", separator),
            Span::styled(SCROLL_HINT, text),
            Span::styled(" │ ", separator),
            Span::styled(QUIT_HINT, text),
        ])
    }

    fn position(&self) -> Option<String> {
        match self.app.films().content() {
            ViewContent::List(films) => {
                position_label(film_list::line_count(films), self.app.scroll(), self.rows)
            }
            _ => None,
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let position = self.position().map(|label| format!("{label} "));
        let position_width = position
            .as_deref()
            .map_or(0, |label| label.chars().count() as u16);
        let [hints_area, position_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(position_width)])
                .areas(inner);

        Paragraph::new(self.hints()).render(hints_area, buf);
        if let Some(position) = position {
            Paragraph::new(position)
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Right)
                .render(position_area, buf);
        }
    }
}

/// "lines 3-20 of 41" for a list of `total` rows scrolled to `scroll`.
fn position_label(total: usize, scroll: usize, rows: usize) -> Option<String> {
    if total == 0 || rows == 0 {
        return None;
    }
    let first = scroll.min(total - 1) + 1;
    let last = (scroll + rows).min(total);
    Some(format!("lines {first}-{last} of {total}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::films::DisplayFilm;
    use tokio::sync::mpsc;

    fn film(id: i64) -> DisplayFilm {
        DisplayFilm {
            id,
            title: format!("Film {id}"),
            opening_text: "one\r\ntwo".to_string(),
            release_date: "1977-05-25".to_string(),
        }
    }

    fn render(footer: Footer<'_>) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 3));
        footer.render(buf.area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn position_label_clamps_to_total() {
        assert_eq!(position_label(0, 0, 10), None);
        assert_eq!(position_label(9, 0, 0), None);
        assert_eq!(position_label(9, 0, 4).as_deref(), Some("lines 1-4 of 9"));
        assert_eq!(position_label(9, 6, 4).as_deref(), Some("lines 7-9 of 9"));
    }

    #[test]
    fn fetch_hint_greyed_while_guarded_fetch_runs() {
        let (tx, _rx) = mpsc::channel(1);
        let mut app = App::new().with_command_sender(tx).with_fetch_guard(true);
        // " F/Enter..." starts one cell in from the left border.
        let hint_cell: (u16, u16) = (2, 1);

        let idle = render(Footer::new(&app, 10));
        assert_eq!(idle[hint_cell].fg, HEADER_TEXT);

        app.request_fetch();
        let loading = render(Footer::new(&app, 10));
        assert_eq!(loading[hint_cell].symbol(), "F");
        assert_eq!(loading[hint_cell].fg, MUTED_TEXT);
    }

    #[test]
    fn unguarded_fetch_hint_stays_active_while_loading() {
        let (tx, _rx) = mpsc::channel(1);
        let mut app = App::new().with_command_sender(tx);
        app.request_fetch();

        let buf = render(Footer::new(&app, 10));
        assert_eq!(buf[(2u16, 1u16)].fg, HEADER_TEXT);
    }

    #[test]
    fn list_position_shown_only_for_loaded_list() {
        let mut app = App::new();
        assert!(!row(&render(Footer::new(&app, 4)), 1).contains("lines"));

        app.on_films_loaded(Ok(vec![film(1), film(2)]));
        let text = row(&render(Footer::new(&app, 4)), 1);
        assert!(text.contains("Fetch Movies"));
        assert!(text.contains("lines 1-4 of 9"));
    }
}
