//! Table, CSV and JSON output for the report commands.
//!
//! Every renderer writes to a caller-supplied `io::Write`; the command
//! handlers pass a locked stdout.

use std::io::Write;

use serde::Serialize;

use crate::{
    cli::types::{position_abbrev, OutputFormat},
    draft::{DraftPick, Player, RedraftComparison, RedraftResult, TeamStanding, DEFAULT_SUMMARY_LIMIT},
    Result,
};


/// "Round 1", "Rounds 1-3", or "All Rounds" when no limit applies.
pub fn round_label(rounds: Option<u16>) -> String {
    match rounds {
        Some(1) => "Round 1".to_string(),
        Some(n) => format!("Rounds 1-{n}"),
        None => "All Rounds".to_string(),
    }
}

/// First `width` characters of `s`.
fn clip(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

fn points(value: f64) -> String {
    format!("{value:.1}")
}

pub fn write_standings<W: Write>(
    out: &mut W,
    standings: &[TeamStanding],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, standings),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.write_record(["Rank", "Team", "Owner", "Record"])?;
            for team in standings {
                wtr.write_record([
                    team.standing.to_string(),
                    team.team_name.clone(),
                    team.owner.clone(),
                    team.record(),
                ])?;
            }
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            writeln!(out, "\nFantasy Hockey League Standings")?;
            writeln!(out, "{}", "=".repeat(70))?;
            writeln!(out, "{:<6}{:<30}{:<22}{:<12}", "Rank", "Team", "Owner", "Record")?;
            writeln!(out, "{}", "-".repeat(70))?;
            for team in standings {
                writeln!(
                    out,
                    "{:<6}{:<30}{:<22}{:<12}",
                    team.standing,
                    clip(&team.team_name, 29),
                    clip(&team.owner, 21),
                    team.record()
                )?;
            }
            writeln!(out)?;
            Ok(())
        }
    }
}

pub fn write_draft<W: Write>(
    out: &mut W,
    picks: &[DraftPick],
    rounds: Option<u16>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, picks),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            wtr.write_record(["Pick", "Round", "Player", "Pos", "Pts", "Team"])?;
            for pick in picks {
                wtr.write_record([
                    pick.overall_pick().to_string(),
                    pick.round_num.to_string(),
                    pick.player.player_name.clone(),
                    position_abbrev(&pick.player.position),
                    points(pick.player.total_points),
                    pick.team_name.clone(),
                ])?;
            }
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Table => {
            if picks.is_empty() {
                writeln!(out, "\nNo draft data available.")?;
                return Ok(());
            }
            writeln!(out, "\nDraft Order ({})", round_label(rounds))?;
            writeln!(out, "{}", "=".repeat(85))?;
            writeln!(out, "{:<6}{:<28}{:<5}{:<10}{:<35}", "Pick", "Player", "Pos", "Points", "Team")?;
            writeln!(out, "{}", "-".repeat(85))?;
            for pick in picks {
                writeln!(
                    out,
                    "{:<6}{:<28}{:<5}{:<10.1}{:<35}",
                    pick.overall_pick(),
                    clip(&pick.player.player_name, 27),
                    position_abbrev(&pick.player.position),
                    pick.player.total_points,
                    clip(&pick.team_name, 34)
                )?;
            }
            writeln!(out)?;
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct RedraftReport<'a> {
    rounds: String,
    #[serde(flatten)]
    result: &'a RedraftResult,
    steals: Vec<&'a RedraftComparison>,
    busts: Vec<&'a RedraftComparison>,
}

pub fn write_redraft<W: Write>(
    out: &mut W,
    result: &RedraftResult,
    rounds: u16,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &RedraftReport {
                rounds: round_label(Some(rounds)),
                result,
                steals: result.biggest_steals(DEFAULT_SUMMARY_LIMIT),
                busts: result.biggest_busts(DEFAULT_SUMMARY_LIMIT),
            },
        ),
        OutputFormat::Csv => write_redraft_csv(out, result),
        OutputFormat::Table => write_redraft_table(out, result, rounds),
    }
}

fn ideal_columns(ideal: Option<&Player>) -> (String, String, String) {
    match ideal {
        Some(p) => (
            p.player_name.clone(),
            position_abbrev(&p.position),
            points(p.total_points),
        ),
        None => ("-".to_string(), "?".to_string(), "-".to_string()),
    }
}

fn write_redraft_csv<W: Write>(out: &mut W, result: &RedraftResult) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record([
        "Pick",
        "Actual Player",
        "Pos",
        "Pts",
        "Team",
        "Redraft Player",
        "Pos",
        "Pts",
        "Diff",
    ])?;

    for (slot, actual) in result.comparisons.iter().enumerate() {
        let (ideal_name, ideal_pos, ideal_pts) = ideal_columns(result.ideal_at(slot));
        wtr.write_record([
            (slot + 1).to_string(),
            actual.player.player_name.clone(),
            position_abbrev(&actual.player.position),
            points(actual.player.total_points),
            actual.team_name.clone(),
            ideal_name,
            ideal_pos,
            ideal_pts,
            format!("{:+}", actual.pick_difference()),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_redraft_table<W: Write>(out: &mut W, result: &RedraftResult, rounds: u16) -> Result<()> {
    let rule = "=".repeat(80);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "REDRAFT ANALYSIS - {}", round_label(Some(rounds)))?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Algorithm: {}", result.strategy_name)?;
    writeln!(out, "Description: {}", result.strategy_description)?;
    writeln!(out, "{rule}\n")?;

    if result.comparisons.is_empty() {
        writeln!(out, "No draft data available.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<5}{:<21}{:<4}{:<7}{:<22}{:<21}{:<4}{:<7}",
        "Pick", "Actual Pick", "Pos", "Pts", "Team", "Redraft Pick", "Pos", "Pts"
    )?;
    writeln!(out, "{}", "-".repeat(91))?;

    for (slot, actual) in result.comparisons.iter().enumerate() {
        let (ideal_name, ideal_pos, ideal_pts) = ideal_columns(result.ideal_at(slot));
        writeln!(
            out,
            "{:<5}{:<21}{:<4}{:<7.1}{:<22}{:<21}{:<4}{:<7}",
            slot + 1,
            clip(&actual.player.player_name, 20),
            position_abbrev(&actual.player.position),
            actual.player.total_points,
            clip(&actual.team_name, 21),
            clip(&ideal_name, 20),
            ideal_pos,
            ideal_pts
        )?;
    }
    writeln!(out)?;

    writeln!(out, "BIGGEST STEALS (outperformed draft position):")?;
    write_summary(out, &result.biggest_steals(DEFAULT_SUMMARY_LIMIT))?;
    writeln!(out, "\nBIGGEST BUSTS (underperformed draft position):")?;
    write_summary(out, &result.biggest_busts(DEFAULT_SUMMARY_LIMIT))?;
    writeln!(out)?;
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, comparisons: &[&RedraftComparison]) -> Result<()> {
    if comparisons.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for c in comparisons {
        writeln!(
            out,
            "  {} ({}): picked {}, should have been {} ({:+})",
            c.player.player_name,
            c.team_name,
            c.actual_pick,
            c.redraft_pick,
            c.pick_difference()
        )?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
