use serde::Serialize;

use super::init_store;
use crate::config::Config;
use crate::stats::{CellSummary, MatchupMatrix, split_composition_key};
use crate::store::Store;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CellOutput<'a> {
    my_team: Vec<&'a str>,
    enemy_team: Vec<&'a str>,
    wins: u32,
    total: u32,
    win_rate: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsOutput<'a> {
    total_matchups: u32,
    total_wins: u32,
    overall_win_rate: f64,
    cells: Vec<CellOutput<'a>>,
}

fn archetype_label(key: &str) -> String {
    split_composition_key(key).collect::<Vec<_>>().join(" + ")
}

fn cell_label(cell: CellSummary) -> String {
    match cell.win_rate() {
        Some(rate) => format!("{}/{} ({rate:.1}%)", cell.wins, cell.total),
        None => "-".to_string(),
    }
}

pub fn run_stats(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = init_store(config)?;
    let matchups = store.list_matchups()?;
    let matrix = MatchupMatrix::from_matchups(&matchups);

    if json {
        let output = StatsOutput {
            total_matchups: matrix.total_matchups(),
            total_wins: matrix.total_wins(),
            overall_win_rate: matrix.overall_win_rate(),
            cells: matrix
                .cells()
                .map(|(my, enemy, cell)| CellOutput {
                    my_team: split_composition_key(my).collect(),
                    enemy_team: split_composition_key(enemy).collect(),
                    wins: cell.wins,
                    total: cell.total,
                    win_rate: cell.win_rate(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if matrix.is_empty() {
        println!("No matches logged yet.");
        return Ok(());
    }

    print_matrix(&matrix);

    println!();
    println!("Total matches: {}", matrix.total_matchups());
    println!("Overall win rate: {:.1}%", matrix.overall_win_rate());
    println!();

    Ok(())
}

fn print_matrix(matrix: &MatchupMatrix) {
    let enemies: Vec<&str> = matrix.enemy_archetypes().collect();
    let rows: Vec<(String, Vec<String>)> = matrix
        .my_archetypes()
        .map(|my| {
            let cells = enemies
                .iter()
                .map(|enemy| cell_label(matrix.cell(my, enemy)))
                .collect();
            (archetype_label(my), cells)
        })
        .collect();
    let headers: Vec<String> = enemies.iter().map(|e| archetype_label(e)).collect();

    let label_width = rows
        .iter()
        .map(|(label, _)| label.len())
        .chain(std::iter::once("My team \\ Enemy".len()))
        .max()
        .unwrap_or_default();
    let column_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|(_, cells)| cells[i].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    println!();
    print!("{:<label_width$}", "My team \\ Enemy");
    for (header, width) in headers.iter().zip(&column_widths) {
        print!("  {header:<width$}");
    }
    println!();

    for (label, cells) in &rows {
        print!("{label:<label_width$}");
        for (cell, width) in cells.iter().zip(&column_widths) {
            print!("  {cell:<width$}");
        }
        println!();
    }
}
