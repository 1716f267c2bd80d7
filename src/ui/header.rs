use crate::ui::films::{FetchPhase, FilmsViewState};
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING, TITLE_YELLOW,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, films: &FilmsViewState, source: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, color) = status_label(films);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Movie Browser",
                Style::default()
                    .fg(TITLE_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("●", Style::default().fg(color)),
            Span::styled(" ", text_style),
            Span::styled(status, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(source.to_string(), Style::default().fg(MUTED_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_label(films: &FilmsViewState) -> (String, Color) {
    match films.phase() {
        FetchPhase::Idle => ("Idle".to_string(), MUTED_TEXT),
        FetchPhase::Loading => ("Loading".to_string(), STATUS_PENDING),
        FetchPhase::Loaded => (format!("{} films", films.movies.len()), STATUS_OK),
        FetchPhase::Failed => ("Error".to_string(), STATUS_ERROR),
    }
}
