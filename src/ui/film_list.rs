//! List renderer for fetched films.

use crate::films::DisplayFilm;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, TITLE_YELLOW};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// One block of rows per film: title, release date, opening text.
///
/// Only used for a non-empty list; the body shows a placeholder otherwise.
pub struct FilmList<'a> {
    films: &'a [DisplayFilm],
    scroll: usize,
}

impl<'a> FilmList<'a> {
    pub fn new(films: &'a [DisplayFilm]) -> Self {
        Self { films, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for FilmList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let offset = u16::try_from(self.scroll).unwrap_or(u16::MAX);
        Paragraph::new(film_lines(self.films))
            .scroll((offset, 0))
            .render(area, buf);
    }
}

pub fn film_lines(films: &[DisplayFilm]) -> Vec<Line<'static>> {
    let title_style = Style::default()
        .fg(TITLE_YELLOW)
        .add_modifier(Modifier::BOLD);
    let date_style = Style::default().fg(MUTED_TEXT);
    let text_style = Style::default().fg(HEADER_TEXT);

    let mut lines = Vec::new();
    for (idx, film) in films.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(format!(" Episode {}  ", film.id), date_style),
            Span::styled(film.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!(" Released {}", film.release_date),
            date_style,
        )));
        // Crawl text uses \r\n breaks and blank lines between paragraphs.
        for text in film.opening_text.lines() {
            lines.push(Line::from(Span::styled(format!("   {}", text), text_style)));
        }
    }
    lines
}

/// Total rows [`FilmList`] renders for `films`.
pub fn line_count(films: &[DisplayFilm]) -> usize {
    film_lines(films).len()
}
