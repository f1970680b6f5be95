//! Drawing the application state with ratatui.

use chrono::Local;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::state::{AppState, BoxScoreContent, BoxScorePanel};
use crate::commands::boxscore::format_box_score;
use crate::config::parse_color;
use crate::formatting::{align_right, fit_width};
use crate::layout_constants::{BADGE_WIDTH, CARD_CONTENT_WIDTH, SCORE_WIDTH};
use crate::view::{render_card, CardView, StatusClass, TeamBadge, TeamLine, NO_GAMES_MESSAGE};

const HEADER_HEIGHT: u16 = 2;
const STATUS_BAR_HEIGHT: u16 = 1;
const LOADING_SCORES_MESSAGE: &str = "Loading scores...";
const LOADING_BOX_SCORE_MESSAGE: &str = "Loading box score...";
const DIM: Style = Style::new().fg(Color::DarkGray);

pub fn draw(frame: &mut Frame, state: &AppState) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(header_lines(state)), header_area);
    draw_scores(frame, state, body_area);
    frame.render_widget(Paragraph::new(status_line(state)), status_area);

    if let Some(panel) = &state.box_score {
        draw_box_score(frame, state, panel);
    }
}

/// Date navigation on the first line, load status on the second
fn header_lines(state: &AppState) -> Vec<Line<'static>> {
    let unicode = state.config.display.use_unicode;
    let (prev, next) = if unicode { ("◀", "▶") } else { ("<", ">") };

    let mut date_line = vec![
        Span::raw(format!(" {} ", prev)),
        Span::styled(
            state.cursor.to_display_label(),
            Style::new().add_modifier(Modifier::BOLD),
        ),
    ];
    if state.can_go_forward() {
        date_line.push(Span::raw(format!(" {}", next)));
    } else {
        date_line.push(Span::styled(format!(" {} (max)", next), DIM));
    }

    let status = if state.data.loading {
        Span::styled(" Loading...", Style::new().fg(Color::Yellow))
    } else if let Some(updated) = state.data.last_updated {
        let time = updated.with_timezone(&Local).format(&state.config.time_format);
        Span::styled(format!(" Updated {}", time), DIM)
    } else {
        Span::raw("")
    };

    vec![Line::from(date_line), Line::from(status)]
}

fn status_line(state: &AppState) -> Line<'static> {
    let style = if state.status_is_error {
        Style::new().fg(Color::Red)
    } else {
        DIM
    };
    Line::from(Span::styled(format!(" {}", state.status_text()), style))
}

fn draw_scores(frame: &mut Frame, state: &AppState, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = &state.data.error {
        lines.push(Line::from(Span::styled(format!(" {}", error), Style::new().fg(Color::Red))));
        lines.push(Line::default());
    }

    if state.game_count() == 0 {
        let message = if state.data.loading { LOADING_SCORES_MESSAGE } else { NO_GAMES_MESSAGE };
        lines.push(Line::from(Span::styled(format!(" {}", message), DIM)));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let mut selected_end = None;
    let mut index = 0;
    for section in &state.data.sections {
        lines.push(Line::from(Span::styled(
            format!(" {}", section.league.title()),
            Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        for game in &section.games {
            let selected = state.selected == Some(index);
            let card = render_card(game, section.league, &Local);
            lines.extend(card_lines(&card, selected, state));
            if selected {
                selected_end = Some(lines.len());
            }
            index += 1;
        }
        lines.push(Line::default());
    }

    // Scroll so the selected card stays fully visible
    let scroll = selected_end
        .map(|end| end.saturating_sub(area.height as usize))
        .unwrap_or(0);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

fn card_lines(card: &CardView, selected: bool, state: &AppState) -> Vec<Line<'static>> {
    let chars = &state.config.display.box_chars;
    let marker = if selected { chars.selector.clone() } else { " ".to_string() };
    let marker_style = Style::new().fg(state.config.theme.selection_fg);

    let status_style = match card.status_class {
        StatusClass::Live => Style::new().fg(state.config.theme.live_fg).add_modifier(Modifier::BOLD),
        StatusClass::Final => Style::new().add_modifier(Modifier::BOLD),
        StatusClass::Scheduled => DIM,
    };
    let mut status = vec![
        Span::styled(marker, marker_style),
        Span::raw(" "),
    ];
    if card.status_class == StatusClass::Live {
        status.push(Span::styled(format!("{} ", chars.bullet), status_style));
    }
    status.push(Span::styled(card.status_text.clone(), status_style));
    if let Some(time) = &card.start_time {
        status.push(Span::raw(format!("  {}", time)));
    }

    let mut lines = vec![
        Line::from(status),
        team_line(&card.away, card.show_scores, selected, state),
        team_line(&card.home, card.show_scores, selected, state),
    ];
    if let Some(details) = &card.details {
        lines.push(Line::from(Span::styled(format!("   {}", details), DIM)));
    }
    lines
}

fn team_line(team: &TeamLine, show_scores: bool, selected: bool, state: &AppState) -> Line<'static> {
    let badge = match &team.badge {
        TeamBadge::Abbreviation { text, color } => Span::styled(
            fit_width(text, BADGE_WIDTH),
            Style::new()
                .fg(Color::White)
                .bg(parse_color(color).unwrap_or(Color::DarkGray))
                .add_modifier(Modifier::BOLD),
        ),
        TeamBadge::Logo { alt, .. } => Span::styled(
            fit_width(alt, BADGE_WIDTH),
            Style::new().add_modifier(Modifier::BOLD),
        ),
    };

    let mut name_style = Style::new();
    if selected {
        name_style = name_style.fg(state.config.theme.selection_fg);
    }
    if team.winner {
        name_style = name_style.add_modifier(Modifier::BOLD);
    }
    let name_width = CARD_CONTENT_WIDTH - BADGE_WIDTH - SCORE_WIDTH - 1;
    let score = if show_scores { team.score.to_string() } else { String::new() };

    Line::from(vec![
        Span::raw("   "),
        badge,
        Span::raw(" "),
        Span::styled(fit_width(&team.name, name_width), name_style),
        Span::styled(align_right(&score, SCORE_WIDTH), name_style),
    ])
}

/// Rectangle covering `percent` of `area` in both directions, centered
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y.min(100)) / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_box_score(frame: &mut Frame, state: &AppState, panel: &BoxScorePanel) {
    let area = centered_rect(90, 90, frame.area());
    let lines: Vec<Line> = match &panel.content {
        BoxScoreContent::Loading => vec![Line::from(Span::styled(LOADING_BOX_SCORE_MESSAGE, DIM))],
        BoxScoreContent::Failed(message) => {
            vec![Line::from(Span::styled(message.clone(), Style::new().fg(Color::Red)))]
        }
        BoxScoreContent::Loaded(view) => format_box_score(view, &state.config.display)
            .lines()
            .skip_while(|line| line.is_empty())
            .map(|line| Line::from(line.to_string()))
            .collect(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} Box Score ", panel.league.title()))
        .title_bottom(if panel.game_url().is_some() {
            " o open game page | ESC close "
        } else {
            " ESC close "
        });
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
