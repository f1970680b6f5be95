use std::fmt;

use anyhow::Result;
use chrono::{Local, TimeZone};
use unicode_width::UnicodeWidthStr;

use crate::aggregator::{load_all, DailyScores};
use crate::commands::parse_date;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::ScoresProvider;
use crate::formatting::{align_right, fit_width, format_header};
use crate::layout_constants::{BADGE_WIDTH, CARD_CONTENT_WIDTH, HEADER_SEPARATOR_WIDTH, SCORE_WIDTH};
use crate::league::League;
use crate::view::{
    render_card, CardView, StatusClass, TeamBadge, TeamLine, NO_GAMES_MESSAGE, SCORES_FAILED_MESSAGE,
};

fn border_line(left: &str, right: &str, display: &DisplayConfig) -> String {
    format!(
        "{}{}{}\n",
        left,
        display.box_chars.horizontal.repeat(CARD_CONTENT_WIDTH + 2),
        right
    )
}

fn content_line(text: &str, display: &DisplayConfig) -> String {
    let v = &display.box_chars.vertical;
    format!("{} {} {}\n", v, fit_width(text, CARD_CONTENT_WIDTH), v)
}

fn status_line(card: &CardView, display: &DisplayConfig) -> String {
    let status = match card.status_class {
        StatusClass::Live => format!("{} {}", display.box_chars.bullet, card.status_text),
        StatusClass::Scheduled | StatusClass::Final => card.status_text.clone(),
    };
    match &card.start_time {
        Some(time) => {
            let left = CARD_CONTENT_WIDTH.saturating_sub(time.width() + 1);
            format!("{} {}", fit_width(&status, left), time)
        }
        None => status,
    }
}

fn team_row(team: &TeamLine, show_scores: bool, display: &DisplayConfig) -> String {
    let marker = if team.winner { display.box_chars.selector.as_str() } else { " " };
    let badge = match &team.badge {
        TeamBadge::Abbreviation { text, .. } => text.as_str(),
        TeamBadge::Logo { alt, .. } => alt.as_str(),
    };
    let score = if show_scores { team.score.to_string() } else { String::new() };
    let name_width = CARD_CONTENT_WIDTH - 1 - BADGE_WIDTH - SCORE_WIDTH;
    format!(
        "{}{}{}{}",
        marker,
        fit_width(badge, BADGE_WIDTH),
        fit_width(&team.name, name_width),
        align_right(&score, SCORE_WIDTH)
    )
}

/// Render one game card as a bordered text box
pub fn format_card(card: &CardView, display: &DisplayConfig) -> String {
    let chars = &display.box_chars;
    let mut output = border_line(&chars.top_left, &chars.top_right, display);
    output.push_str(&content_line(&status_line(card, display), display));
    output.push_str(&content_line(&team_row(&card.away, card.show_scores, display), display));
    output.push_str(&content_line(&team_row(&card.home, card.show_scores, display), display));
    if let Some(details) = &card.details {
        output.push_str(&content_line(details, display));
    }
    output.push_str(&border_line(&chars.bottom_left, &chars.bottom_right, display));
    output
}

/// Render every league section of a day, or the empty state
pub fn format_scores<Tz>(scores: &DailyScores, label: &str, display: &DisplayConfig, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut output = String::new();
    let separator = display.box_chars.double_horizontal.repeat(HEADER_SEPARATOR_WIDTH);
    output.push_str(&format!("\n{}\nSCORES - {}\n{}\n", separator, label, separator));

    if scores.all_failed() {
        output.push_str(&format!("\n{}\n", SCORES_FAILED_MESSAGE));
    }
    if scores.has_no_games() {
        output.push_str(&format!("\n{}\n", NO_GAMES_MESSAGE));
        return output;
    }

    for section in scores.sections() {
        output.push_str(&format!("\n{}", format_header(section.league.title(), false, display)));
        for game in &section.games {
            output.push_str(&format_card(&render_card(game, section.league, tz), display));
        }
    }
    output
}

pub async fn run(
    client: &dyn ScoresProvider,
    date: Option<String>,
    leagues: &[League],
    config: &Config,
) -> Result<()> {
    let cursor = parse_date(date)?;
    let scores = load_all(client, leagues, cursor.date()).await;

    print!(
        "{}",
        format_scores(&scores, &cursor.to_display_label(), &config.display, &Local)
    );
    for league in scores.failed_leagues() {
        eprintln!("warning: {} scores unavailable", league.title());
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::LeagueResult;
    use crate::espn::ScoreboardResponse;
    use crate::fixtures;
    use crate::formatting::BoxChars;
    use crate::model::Scoreboard;
    use chrono::{NaiveDate, Utc};

    fn ascii() -> DisplayConfig {
        DisplayConfig { use_unicode: false, box_chars: BoxChars::ascii() }
    }

    fn nba_scores() -> DailyScores {
        let response: ScoreboardResponse =
            serde_json::from_str(fixtures::NBA_SCOREBOARD_JSON).unwrap();
        DailyScores {
            date: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
            results: vec![
                (League::Nba, LeagueResult::Loaded(Scoreboard::from_response(League::Nba, response))),
                (League::Nfl, LeagueResult::Failed { reason: "timeout".to_string() }),
            ],
        }
    }

    #[test]
    fn test_live_card_output() {
        let scores = nba_scores();
        let game = &scores.sections()[0].games[0];
        let output = format_card(&render_card(game, League::Nba, &Utc), &ascii());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "+----------------------------------------------+");
        assert_eq!(lines[1], "| * Q2 - 5:23                                  |");
        assert_eq!(lines[2], "|  LAL Lakers                               50 |");
        assert_eq!(lines[3], "|  BOS Celtics                              54 |");
        assert_eq!(lines[4], "| TD Garden • ESPN, NBCS-BOS                   |");
        assert_eq!(lines[5], "+----------------------------------------------+");
    }

    #[test]
    fn test_scheduled_card_hides_scores_and_shows_time() {
        let scores = nba_scores();
        let game = &scores.sections()[0].games[1];
        let output = format_card(&render_card(game, League::Nba, &Utc), &ascii());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "| 11/20 - 8:00 PM EST                  1:00 AM |");
        assert_eq!(lines[2], "|  GSW Warriors                                |");
    }

    #[test]
    fn test_final_card_marks_winner() {
        let scores = nba_scores();
        let game = &scores.sections()[0].games[2];
        let output = format_card(&render_card(game, League::Nba, &Utc), &ascii());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "| Final/OT                                     |");
        assert_eq!(lines[2], "|  NYK Knicks                              112 |");
        assert_eq!(lines[3], "| >MIA Heat                                118 |");
    }

    #[test]
    fn test_scores_output_lists_sections() {
        let output = format_scores(&nba_scores(), "Wed, Nov 20, 2024", &ascii(), &Utc);
        assert!(output.contains("SCORES - Wed, Nov 20, 2024"));
        assert!(output.contains("NBA\n---\n"));
        assert!(!output.contains("NFL"));
        assert!(!output.contains(NO_GAMES_MESSAGE));
    }

    #[test]
    fn test_empty_day() {
        let scores = DailyScores {
            date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            results: vec![(League::Nba, LeagueResult::Loaded(Scoreboard { league: League::Nba, events: vec![] }))],
        };
        let output = format_scores(&scores, "Thu, Jul 4, 2024", &ascii(), &Utc);
        assert!(output.contains(NO_GAMES_MESSAGE));
        assert!(!output.contains(SCORES_FAILED_MESSAGE));
    }

    #[test]
    fn test_all_failed_day() {
        let scores = DailyScores {
            date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            results: vec![(League::Nba, LeagueResult::Failed { reason: "dns".to_string() })],
        };
        let output = format_scores(&scores, "Thu, Jul 4, 2024", &ascii(), &Utc);
        assert!(output.contains(SCORES_FAILED_MESSAGE));
        assert!(output.contains(NO_GAMES_MESSAGE));
    }
}
