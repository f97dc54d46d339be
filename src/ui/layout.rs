//! Layout components (header tabs, status bar)

use crate::app::App;
use crate::state::{AuthTab, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Split the screen into header and content, reserving the bottom line
/// for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the Login / Register tab strip
pub fn draw_tabs(frame: &mut Frame, area: Rect, active: AuthTab) {
    let titles: Vec<Line> = AuthTab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.label())))
        .collect();
    let selected = AuthTab::ALL
        .iter()
        .position(|tab| *tab == active)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Patient Portal "),
        )
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Plain header for views without tabs
pub fn draw_header(frame: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(Span::styled(
        format!(" {title}"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Patient Portal "),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Session indicator
    let session = match &app.state.session {
        Some(_) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        None => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
    };
    spans.push(session);

    spans.push(Span::styled(
        view_hints(app),
        Style::default().fg(Color::Black),
    ));

    if let Some(session) = &app.state.session {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            session.email.as_str(),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

/// Key hints for whatever currently has input
fn view_hints(app: &App) -> &'static str {
    if app.state.success.is_some() {
        return "Enter/Esc:continue";
    }
    if app.state.is_submitting() {
        return "Please wait...";
    }
    match (&app.state.current_view, app.state.active_tab) {
        (View::Dashboard, _) => "l:log out  q:quit  ^C:quit",
        (View::Auth, AuthTab::Login) => "Tab:next  Space:toggle  Enter:sign in  ^T:register  ^C:quit",
        (View::Auth, AuthTab::Register) => {
            "Tab:next  ←/→:choose  Enter:register  ^T:login  ^C:quit"
        }
    }
}
