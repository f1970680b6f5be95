use crate::config::{Config, DisplayConfig};
use crate::data_provider::ScoresProvider;
use crate::formatting::{align_right, fit_width, format_header};
use crate::layout_constants::{
    BOXSCORE_LABEL_WIDTH, BOXSCORE_VALUE_WIDTH, PLAYER_NAME_WIDTH, PLAYER_STAT_WIDTH,
};
use crate::league::League;
use crate::view::{render_box_score, BoxScoreSummary, BoxScoreView, PlayerTable, StatRow, BOX_SCORE_FAILED_MESSAGE};
use anyhow::{Context, Result};

fn format_stat_row(label: &str, away: &str, home: &str) -> String {
    format!(
        "{}{}{}\n",
        fit_width(label, BOXSCORE_LABEL_WIDTH),
        align_right(away, BOXSCORE_VALUE_WIDTH),
        align_right(home, BOXSCORE_VALUE_WIDTH)
    )
}

/// Format the team comparison table
fn format_team_stats(output: &mut String, summary: &BoxScoreSummary, display: &DisplayConfig) {
    output.push_str(&format!("\n{}", format_header("Team Stats", false, display)));
    output.push_str(&format_stat_row(
        "",
        &summary.away.abbreviation,
        &summary.home.abbreviation,
    ));
    for StatRow { label, away, home } in &summary.team_stats {
        output.push_str(&format_stat_row(label, away, home));
    }
}

fn format_player_row(output: &mut String, name: &str, values: &[String]) {
    output.push_str(&fit_width(name, PLAYER_NAME_WIDTH));
    for value in values {
        output.push_str(&align_right(value, PLAYER_STAT_WIDTH));
    }
    output.push('\n');
}

/// Format one team's player table
fn format_player_table(output: &mut String, table: &PlayerTable, display: &DisplayConfig) {
    output.push_str(&format!("\n{}", format_header(table.title(), false, display)));
    match table {
        PlayerTable::Empty { message, .. } => {
            output.push_str(&format!("{}\n", message));
        }
        PlayerTable::Stats { columns, rows, .. } => {
            format_player_row(output, "Player", columns);
            for row in rows {
                format_player_row(output, &row.name, &row.values);
            }
        }
    }
}

pub fn format_box_score(view: &BoxScoreView, display: &DisplayConfig) -> String {
    let summary = match view {
        BoxScoreView::NotAvailable { message } => return format!("\n{}\n", message),
        BoxScoreView::Loaded(summary) => summary,
    };

    let mut output = String::new();
    output.push_str(&format!("\n{}", format_header(&summary.title, true, display)));
    for team in [&summary.away, &summary.home] {
        output.push_str(&format!(
            "{}{}\n",
            fit_width(&team.abbreviation, BOXSCORE_LABEL_WIDTH),
            align_right(&team.score, BOXSCORE_VALUE_WIDTH)
        ));
    }

    if !summary.team_stats.is_empty() {
        format_team_stats(&mut output, summary, display);
    }
    for table in &summary.player_tables {
        format_player_table(&mut output, table, display);
    }

    output
}

pub async fn run(
    client: &dyn ScoresProvider,
    league: League,
    event_id: &str,
    config: &Config,
) -> Result<()> {
    let detail = client
        .box_score(league, event_id)
        .await
        .context(BOX_SCORE_FAILED_MESSAGE)?;
    let view = render_box_score(&detail, league, event_id, &config.web_base_url);
    print!("{}", format_box_score(&view, &config.display));
    if let BoxScoreView::Loaded(summary) = &view {
        println!("\n{}", summary.game_url);
    }

    Ok(())
}
