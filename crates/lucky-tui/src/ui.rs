//! Frame rendering: die face art, avatar panel, message, roll log.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use lucky_core::{DieFace, Rgb};

use crate::app::TuiApp;

/// Pip art for each die face, top to bottom.
const DIE_ART: [[&str; 5]; 6] = [
    [
        "┌─────────┐",
        "│         │",
        "│    ●    │",
        "│         │",
        "└─────────┘",
    ],
    [
        "┌─────────┐",
        "│ ●       │",
        "│         │",
        "│       ● │",
        "└─────────┘",
    ],
    [
        "┌─────────┐",
        "│ ●       │",
        "│    ●    │",
        "│       ● │",
        "└─────────┘",
    ],
    [
        "┌─────────┐",
        "│ ●     ● │",
        "│         │",
        "│ ●     ● │",
        "└─────────┘",
    ],
    [
        "┌─────────┐",
        "│ ●     ● │",
        "│    ●    │",
        "│ ●     ● │",
        "└─────────┘",
    ],
    [
        "┌─────────┐",
        "│ ●     ● │",
        "│ ●     ● │",
        "│ ●     ● │",
        "└─────────┘",
    ],
];

/// The pip art rows for a face.
fn die_art(face: DieFace) -> &'static [&'static str; 5] {
    &DIE_ART[usize::from(face.value()) - 1]
}

/// Convert the avatar's color to a terminal color.
fn terminal_color(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(7), // Die face
            Constraint::Length(7), // Avatar + message
            Constraint::Min(0),    // Roll log
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Paragraph::new(" Lucky Six — roll a 6 to win ")
        .style(Style::default().fg(Color::Magenta).bold());
    frame.render_widget(title, chunks[0]);

    draw_die(frame, app, chunks[1]);
    draw_avatar_and_message(frame, app, chunks[2]);
    draw_roll_log(frame, app, chunks[3]);

    let status = Paragraph::new(format!(
        " [Enter/Space] {}   ?:help  q:quit",
        app.view.button_label
    ))
    .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[4]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

/// Draw the last rolled die face, or nothing before the first roll.
fn draw_die(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let Some(face) = app.view.die_face else {
        return;
    };

    let lines: Vec<Line<'static>> = die_art(face)
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Yellow).bold())))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Draw the avatar panel beside the speech-bubble message.
fn draw_avatar_and_message(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(area);

    let avatar = &app.view.avatar;
    let avatar_block = Block::default()
        .title(format!(" {} ", avatar.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(terminal_color(avatar.border_color)));
    let face = Paragraph::new(vec![
        Line::from(""),
        Line::from(" .-----. "),
        Line::from("( o   o )"),
        Line::from(" `-. .-' "),
        Line::from("   `-'   "),
    ])
    .alignment(Alignment::Center)
    .block(avatar_block);
    frame.render_widget(face, chunks[0]);

    let message_block = Block::default()
        .title(" Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let message = Paragraph::new(app.view.message.clone())
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(message_block);
    frame.render_widget(message, chunks[1]);
}

/// Draw the roll log for the current session.
fn draw_roll_log(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let block = Block::default()
        .title(" Rolls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 {
        return;
    }

    let mut lines = vec![Line::from(vec![
        Span::styled("Attempts left: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.view.attempts_left.to_string(),
            Style::default().fg(Color::Green).bold(),
        ),
    ])];

    // Most recent rolls, capped to the visible height
    let visible = usize::from(inner.height.saturating_sub(1));
    let records = app.session.log().records();
    let start = records.len().saturating_sub(visible);
    for record in &records[start..] {
        lines.push(Line::from(Span::styled(
            format!("  {record}"),
            Style::default().fg(Color::White),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Create a centered rectangle as a percentage of the given area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the help popup overlay.
fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 50, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Enter/Space  Start / roll / restart"),
        Line::from("  ?            Toggle this help"),
        Line::from("  q / Esc      Quit"),
        Line::from("  Ctrl+C       Quit"),
        Line::from(""),
        Line::from("You have 3 attempts to roll a 6."),
        Line::from("Rolling a 3 gives a free reroll."),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_art_pip_counts_match_faces() {
        for face in DieFace::all() {
            let pips: usize = die_art(*face)
                .iter()
                .map(|row| row.matches('●').count())
                .sum();
            assert_eq!(pips, usize::from(face.value()), "{face}");
        }
    }

    #[test]
    fn terminal_color_maps_channels() {
        let c = terminal_color(Rgb::new(0xff, 0xb3, 0xba));
        assert_eq!(c, Color::Rgb(0xff, 0xb3, 0xba));
    }
}
