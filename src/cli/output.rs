//! Console formatting for CLI commands

use std::fmt::Write as _;

use crate::{
    minimax::SearchReport,
    tictactoe::{Board, GameOutcome, LineAnalyzer, Player, Utility},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:12} {}", format!("{}:", key), value);
}

/// Board drawn with row and column indices, ready for `row col` input
pub fn format_board(board: &Board) -> String {
    let mut out = String::from("    0 1 2\n");
    for (i, row) in board.cells().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
        let _ = writeln!(out, "  {i} {}", cells.join(" "));
    }
    out
}

/// One-line description of a finished game
pub fn describe_outcome(board: &Board, outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Draw => "Draw".to_string(),
        GameOutcome::Win(player) => match LineAnalyzer::completed_line(board, player) {
            Some(line) => format!(
                "{player} wins on {}",
                line.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            None => format!("{player} wins"),
        },
    }
}

/// Human-readable reading of a minimax value
pub fn describe_value(value: Utility, to_move: Player) -> &'static str {
    match (value, to_move) {
        (0, _) => "draw with best play",
        (1, Player::X) | (-1, Player::O) => "forced win",
        _ => "forced loss",
    }
}

/// Print the candidates a search evaluated and the one it picked
pub fn print_report(report: &SearchReport) {
    print_kv("To move", &report.player.to_string());
    print_kv(
        "Best move",
        &format!(
            "{} ({})",
            report.action,
            describe_value(report.value, report.player)
        ),
    );
    print_kv("Policy", report.policy.as_str());
    print_kv("Nodes", &report.nodes.to_string());
    println!("  Candidates:");
    for (action, value) in &report.candidates {
        println!("    {action} -> {value:+}");
    }
}
