use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fishwar::{Position, RuleConfig};

/// Replay a Fish War game from move notation and print the board after each move.
#[derive(Parser)]
#[command(name = "fishwar-batch", about = "Replay a Fish War game move by move")]
struct Cli {
    /// Moves in notation, e.g. い↑B3B2 ま↓B1B2
    moves: Vec<String>,

    /// Path to a TOML rule configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this position in setup notation instead of the initial layout
    #[arg(long)]
    setup: Option<String>,

    /// Print only the final board
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let rules = match &cli.config {
        Some(path) => RuleConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RuleConfig::default(),
    };

    let mut pos = match &cli.setup {
        Some(setup) => Position::from_setup_with_rules(setup, rules)
            .with_context(|| format!("parsing setup {setup:?}"))?,
        None => Position::with_rules(rules),
    };
    debug!(rules = ?pos.rules(), moves = cli.moves.len(), "starting replay");

    if !cli.quiet {
        writeln!(out, "=== 初期盤面 ===")?;
        writeln!(out, "{pos}")?;
    }

    for (i, notation) in cli.moves.iter().enumerate() {
        let outcome = pos
            .play(notation)
            .with_context(|| format!("move #{} ({notation}) failed", i + 1))?;

        if !cli.quiet {
            writeln!(out, "=== {}手目: {notation} ===", i + 1)?;
            writeln!(out, "{pos}")?;
        }

        if let Some(result) = outcome.result {
            if cli.quiet {
                writeln!(out, "{pos}")?;
            }
            match result.winner() {
                Some(winner) => writeln!(
                    out,
                    "{}の勝ち ({})",
                    winner.to_japanese(),
                    result.reason_japanese()
                )?,
                None => writeln!(out, "引き分け ({})", result.reason_japanese())?,
            }

            if i + 1 < cli.moves.len() {
                bail!(
                    "game finished at move #{} but {} more move(s) were given",
                    i + 1,
                    cli.moves.len() - i - 1
                );
            }
            return Ok(());
        }
    }

    if cli.quiet {
        writeln!(out, "{pos}")?;
    }
    writeln!(out, "対局継続中")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(args: &[&str]) -> (Result<()>, String) {
        let cli = Cli::parse_from(std::iter::once("fishwar-batch").chain(args.iter().copied()));
        let mut out = Vec::new();
        let res = run(&cli, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_every_board() {
        let (res, out) = run_with(&["か↑C4C3", "か↓A1A2"]);
        assert!(res.is_ok());
        assert!(out.starts_with("=== 初期盤面 ===\n"));
        assert!(out.contains("=== 1手目: か↑C4C3 ==="));
        assert!(out.contains("=== 2手目: か↓A1A2 ==="));
        assert_eq!(3, out.matches("手ゴマ置き場").count());
        assert!(out.ends_with("対局継続中\n"));
    }

    #[test]
    fn quiet_prints_only_final_board() {
        let (res, out) = run_with(&["--quiet", "か↑C4C3"]);
        assert!(res.is_ok());

        let mut pos = Position::new();
        pos.play("か↑C4C3").unwrap();
        assert_eq!(format!("{pos}\n対局継続中\n"), out);
        assert!(!out.contains("初期盤面"));
    }

    #[test]
    fn quiet_game_end_prints_result() {
        let (res, out) = run_with(&[
            "--quiet",
            "--setup",
            "1m1/1K1/3/1M1 f - 3",
            "か↑B2B1",
        ]);
        assert!(res.is_ok());
        assert_eq!(1, out.matches("手ゴマ置き場").count());
        assert!(out.ends_with("先手の勝ち (まぐろを捕獲しました)\n"));
    }

    #[test]
    fn moves_after_game_end_fail() {
        let (res, _) = run_with(&[
            "--setup",
            "1m1/1K1/3/1M1 f - 3",
            "か↑B2B1",
            "ま↓A2A1",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn illegal_move_fails() {
        let (res, out) = run_with(&["い↑B3A2"]);
        let err = res.unwrap_err();
        assert!(format!("{err:#}").contains("illegal destination for this piece"));
        assert!(out.starts_with("=== 初期盤面 ==="));
    }

    #[test]
    fn bad_setup_fails() {
        let (res, out) = run_with(&["--setup", "kmt/1i1/1I1/TMK f M 1"]);
        assert!(res.is_err());
        assert!(out.is_empty());
    }
}
