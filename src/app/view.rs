use super::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const SEPARATOR: &str = "  ";
const FIELD_SPACING: u16 = 1;
/// Share of the screen width taken by the field column
const COLUMN_PERCENT: u16 = 60;

const KEYBINDINGS: [(&str, &str); 5] = [
    ("Tab", "next"),
    ("^U", "clear"),
    ("^E", "icon"),
    ("^V", "paste"),
    ("Esc", "quit"),
];

/// Field column with a footer below it
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());
    let (Some(body), Some(footer)) = (chunks.first(), chunks.get(1)) else {
        return;
    };

    let column = Layout::horizontal([Constraint::Percentage(COLUMN_PERCENT)])
        .flex(Flex::Center)
        .split(*body);
    if let Some(column) = column.first() {
        render_fields(f, app, *column);
    }
    render_footer(f, app, *footer);
}

fn render_fields(f: &mut Frame, app: &App, area: Rect) {
    let mut constraints: Vec<Constraint> = app
        .fields
        .iter()
        .map(|field| Constraint::Length(field.preferred_rows()))
        .collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .spacing(FIELD_SPACING)
        .constraints(constraints)
        .split(area);

    for (field, row) in app.fields.iter().zip(rows.iter()) {
        f.render_widget(field, *row);
    }

    if let Some(field) = app.selected_field()
        && let Some(row) = rows.get(app.selected_index)
        && let Some(position) = field.cursor_position(*row)
    {
        f.set_cursor_position(position);
    }
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            " FIELDS ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for (key, desc) in KEYBINDINGS {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if let Some(message) = app.status_toast_message() {
        let toast = Paragraph::new(Line::from(vec![Span::styled(
            format!(" {} ", message),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Right);
        f.render_widget(toast, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatfield::FieldStyle;
    use crate::app::Navigable;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_screen_shows_every_field() {
        let app = App::new(&FieldStyle::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 50)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        for placeholder in ["Height", "Secure", "CornerRadius", "Font", "Required", "Has icon"] {
            assert!(content.contains(placeholder), "missing {placeholder}");
        }
        assert!(content.contains("FIELDS"));
    }

    #[test]
    fn test_cursor_placed_in_selected_field() {
        let mut app = App::new(&FieldStyle::default());
        app.select(1);
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        // column starts at 20; first field is 5 rows tall plus one row of spacing
        assert_eq!(
            terminal.get_cursor_position().unwrap(),
            ratatui::layout::Position::new(22, 8)
        );
    }

    #[test]
    fn test_toast_rendered_in_footer() {
        let mut app = App::new(&FieldStyle::default());
        app.show_status_toast("ACTION: Has icon");
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let footer_row: String = (0..buffer.area.width)
            .map(|x| buffer.cell((x, 48)).map_or(" ", |cell| cell.symbol()))
            .collect();
        assert!(footer_row.contains("ACTION: Has icon"));
    }
}
