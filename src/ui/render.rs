use crate::ui::app::App;
use crate::ui::film_list::FilmList;
use crate::ui::films::{ViewContent, EMPTY_PLACEHOLDER, LOADING_PLACEHOLDER};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, source: &str) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.films(), source), header);
    frame.render_widget(Clear, body);
    draw_body(frame, app, body);
    frame.render_widget(Footer::new(app, usize::from(body.height)), footer);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_style = Style::default().fg(HEADER_TEXT);
    match app.films().content() {
        ViewContent::List(films) => {
            frame.render_widget(FilmList::new(films).scroll(app.scroll()), inner);
        }
        ViewContent::Loading => {
            frame.render_widget(message(LOADING_PLACEHOLDER, text_style), inner);
        }
        ViewContent::Error(error) => {
            frame.render_widget(message(error, Style::default().fg(STATUS_ERROR)), inner);
        }
        ViewContent::Placeholder => {
            frame.render_widget(message(EMPTY_PLACEHOLDER, text_style), inner);
        }
    }
}

fn message(text: &str, style: Style) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}
