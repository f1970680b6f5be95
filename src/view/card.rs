use std::fmt;

use chrono::TimeZone;

use crate::league::League;
use crate::model::{GameEvent, GameState, Participant};
use crate::team_colors::team_color;

/// Format of the local start time on scheduled cards, e.g. `7:05 PM`
pub const START_TIME_FORMAT: &str = "%-I:%M %p";

const FINAL_TEXT: &str = "FINAL";
const LIVE_TEXT: &str = "LIVE";
/// Upstream placeholders that carry no more information than the state itself
const GENERIC_FINAL_DETAIL: &str = "Final";
const GENERIC_LIVE_DETAIL: &str = "In Progress";
const DETAIL_SEPARATOR: &str = " • ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Scheduled,
    Live,
    Final,
}

/// How a team is identified on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamBadge {
    Logo { url: String, alt: String },
    /// Colored badge; `color` is hex without '#'
    Abbreviation { text: String, color: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLine {
    pub name: String,
    pub score: u32,
    pub winner: bool,
    pub badge: TeamBadge,
}

/// Everything needed to draw one game card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub event_id: String,
    pub league: League,
    pub status_class: StatusClass,
    pub status_text: String,
    /// Local start time, only for scheduled games
    pub start_time: Option<String>,
    pub show_scores: bool,
    pub away: TeamLine,
    pub home: TeamLine,
    /// Venue and broadcast networks
    pub details: Option<String>,
}

/// Build the card for one game
///
/// The time zone is a parameter so the result depends only on the inputs.
pub fn render_card<Tz>(event: &GameEvent, league: League, tz: &Tz) -> CardView
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let state = &event.status.state;
    let status_class = match state {
        GameState::InProgress => StatusClass::Live,
        GameState::Final => StatusClass::Final,
        GameState::Scheduled | GameState::Other(_) => StatusClass::Scheduled,
    };

    let start_time = match state {
        GameState::Scheduled => event
            .start
            .map(|start| start.with_timezone(tz).format(START_TIME_FORMAT).to_string()),
        _ => None,
    };

    CardView {
        event_id: event.id.clone(),
        league,
        status_class,
        status_text: status_text(event, league),
        start_time,
        show_scores: *state != GameState::Scheduled,
        away: team_line(&event.away),
        home: team_line(&event.home),
        details: game_details(event),
    }
}

/// Human readable status for the card badge
pub fn status_text(event: &GameEvent, league: League) -> String {
    let status = &event.status;
    match status.state {
        GameState::Final => status
            .detail
            .as_deref()
            .filter(|detail| *detail != GENERIC_FINAL_DETAIL)
            .unwrap_or(FINAL_TEXT)
            .to_string(),
        GameState::InProgress => {
            if let Some(detail) = status.detail.as_deref().filter(|d| *d != GENERIC_LIVE_DETAIL) {
                return detail.to_string();
            }
            match (status.period, status.clock.as_deref()) {
                (0, _) => LIVE_TEXT.to_string(),
                (period, Some(clock)) => {
                    format!("{} - {}", league.period_short_label(period), clock)
                }
                (period, None) => league.period_short_label(period),
            }
        }
        GameState::Scheduled | GameState::Other(_) => status
            .short_detail
            .clone()
            .or_else(|| status.detail.clone())
            .unwrap_or_default(),
    }
}

fn team_line(participant: &Participant) -> TeamLine {
    TeamLine {
        name: participant.team.name().to_string(),
        score: participant.score,
        winner: participant.winner,
        badge: team_badge(participant),
    }
}

fn team_badge(participant: &Participant) -> TeamBadge {
    let team = &participant.team;
    if let Some(logo) = &team.logo {
        return TeamBadge::Logo {
            url: logo.clone(),
            alt: team.abbreviation.clone().unwrap_or_default(),
        };
    }

    let text = team
        .abbreviation
        .clone()
        .or_else(|| team.short_name.as_ref().map(|name| name.chars().take(2).collect()))
        .unwrap_or_else(|| "TM".to_string());
    TeamBadge::Abbreviation {
        text,
        color: team_color(team.color.as_deref(), team.abbreviation.as_deref()),
    }
}

fn game_details(event: &GameEvent) -> Option<String> {
    let broadcast = event.broadcasts.join(", ");
    let parts: Vec<&str> = event
        .venue
        .as_deref()
        .into_iter()
        .chain(Some(broadcast.as_str()))
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(DETAIL_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{at, game};
    use crate::team_colors::DEFAULT_TEAM_COLOR;
    use chrono::{FixedOffset, Utc};

    fn live(period: u32, clock: Option<&str>, detail: Option<&str>) -> GameEvent {
        let mut event = game("1", GameState::InProgress, Some(at(1, 0)));
        event.status.period = period;
        event.status.clock = clock.map(str::to_string);
        event.status.detail = detail.map(str::to_string);
        event
    }

    #[test]
    fn test_final_prefers_specific_detail() {
        let mut event = game("1", GameState::Final, Some(at(0, 0)));
        event.status.detail = Some("Final/OT".to_string());
        let card = render_card(&event, League::Nhl, &Utc);
        assert_eq!(card.status_text, "Final/OT");
        assert_eq!(card.status_class, StatusClass::Final);
        assert!(card.show_scores);
    }

    #[test]
    fn test_final_generic_detail_renders_final() {
        let mut event = game("1", GameState::Final, Some(at(0, 0)));
        event.status.detail = Some("Final".to_string());
        assert_eq!(render_card(&event, League::Nba, &Utc).status_text, "FINAL");
        event.status.detail = None;
        assert_eq!(render_card(&event, League::Nba, &Utc).status_text, "FINAL");
    }

    #[test]
    fn test_live_basketball_synthesized_from_period_and_clock() {
        let card = render_card(&live(2, Some("5:23"), None), League::Nba, &Utc);
        assert_eq!(card.status_text, "Q2 - 5:23");
        assert_eq!(card.status_class, StatusClass::Live);

        let card = render_card(&live(2, Some("5:23"), Some("In Progress")), League::Nba, &Utc);
        assert_eq!(card.status_text, "Q2 - 5:23");
    }

    #[test]
    fn test_live_prefers_upstream_detail() {
        let card = render_card(&live(2, Some("5:23"), Some("End of 2nd Quarter")), League::Nba, &Utc);
        assert_eq!(card.status_text, "End of 2nd Quarter");
    }

    #[test]
    fn test_live_league_specific_labels() {
        assert_eq!(status_text(&live(3, Some("12:01"), None), League::Nhl), "P3 - 12:01");
        assert_eq!(status_text(&live(1, Some("34'"), None), League::Soccer), "1H - 34'");
        assert_eq!(status_text(&live(2, Some("80'"), None), League::Soccer), "2H - 80'");
        assert_eq!(status_text(&live(7, None, None), League::Mlb), "T7");
    }

    #[test]
    fn test_live_without_period_is_generic() {
        assert_eq!(status_text(&live(0, Some("5:23"), None), League::Nba), "LIVE");
        assert_eq!(status_text(&live(0, None, None), League::Nfl), "LIVE");
    }

    #[test]
    fn test_scheduled_shows_short_detail_and_local_time() {
        let mut event = game("1", GameState::Scheduled, Some(at(0, 30)));
        event.status.short_detail = Some("11/20 - 7:30 PM EST".to_string());
        event.home.score = 3;

        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let card = render_card(&event, League::Nba, &eastern);
        assert_eq!(card.status_text, "11/20 - 7:30 PM EST");
        assert_eq!(card.start_time.as_deref(), Some("7:30 PM"));
        assert_eq!(card.status_class, StatusClass::Scheduled);
        assert!(!card.show_scores);
    }

    #[test]
    fn test_start_time_only_for_scheduled() {
        let card = render_card(&live(1, Some("10:00"), None), League::Nba, &Utc);
        assert_eq!(card.start_time, None);
    }

    #[test]
    fn test_unknown_state_renders_as_scheduled_with_scores() {
        let mut event = game("1", GameState::Other("postponed".to_string()), Some(at(1, 0)));
        event.status.short_detail = Some("Postponed".to_string());
        let card = render_card(&event, League::Mlb, &Utc);
        assert_eq!(card.status_class, StatusClass::Scheduled);
        assert_eq!(card.status_text, "Postponed");
        assert!(card.show_scores);
    }

    #[test]
    fn test_badge_prefers_logo() {
        let mut event = game("1", GameState::Final, None);
        event.home.team.logo = Some("https://example.com/bos.png".to_string());
        let card = render_card(&event, League::Nba, &Utc);
        assert_eq!(
            card.home.badge,
            TeamBadge::Logo { url: "https://example.com/bos.png".to_string(), alt: "HOM".to_string() }
        );
    }

    #[test]
    fn test_badge_color_fallbacks() {
        let mut event = game("1", GameState::Final, None);
        event.home.team.abbreviation = Some("LAL".to_string());
        event.away.team.color = Some("abcdef".to_string());
        let card = render_card(&event, League::Nba, &Utc);
        assert_eq!(
            card.home.badge,
            TeamBadge::Abbreviation { text: "LAL".to_string(), color: "552583".to_string() }
        );
        assert_eq!(
            card.away.badge,
            TeamBadge::Abbreviation { text: "AWY".to_string(), color: "abcdef".to_string() }
        );
    }

    #[test]
    fn test_badge_text_without_abbreviation() {
        let mut event = game("1", GameState::Final, None);
        event.home.team.abbreviation = None;
        event.home.team.short_name = Some("Rockets".to_string());
        event.away.team.abbreviation = None;
        event.away.team.short_name = None;
        let card = render_card(&event, League::Nba, &Utc);
        assert_eq!(
            card.home.badge,
            TeamBadge::Abbreviation { text: "Ro".to_string(), color: DEFAULT_TEAM_COLOR.to_string() }
        );
        assert_eq!(
            card.away.badge,
            TeamBadge::Abbreviation { text: "TM".to_string(), color: DEFAULT_TEAM_COLOR.to_string() }
        );
    }

    #[test]
    fn test_details_line() {
        let mut event = game("1", GameState::Scheduled, None);
        assert_eq!(render_card(&event, League::Nfl, &Utc).details, None);

        event.venue = Some("Lambeau Field".to_string());
        assert_eq!(render_card(&event, League::Nfl, &Utc).details.as_deref(), Some("Lambeau Field"));

        event.broadcasts = vec!["FOX".to_string(), "NFL+".to_string()];
        assert_eq!(
            render_card(&event, League::Nfl, &Utc).details.as_deref(),
            Some("Lambeau Field • FOX, NFL+")
        );

        event.venue = None;
        assert_eq!(render_card(&event, League::Nfl, &Utc).details.as_deref(), Some("FOX, NFL+"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let event = live(4, Some("0:42"), None);
        assert_eq!(
            render_card(&event, League::Nfl, &Utc),
            render_card(&event, League::Nfl, &Utc)
        );
    }
}
