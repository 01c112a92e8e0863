//! `bp rules` — list every pair's winning dependency rule, strongest first.

use crate::load::load_or_report;
use crate::output::{CliError, OutputMode, pretty_section, render_error, render_mode};
use bestparents_search::{Rule, ranked_rules};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// CSV file; the first row names the attributes.
    pub csv: PathBuf,

    /// Show at most this many rules.
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RulesOutput {
    pub dataset: String,
    /// Rules before `--limit` was applied.
    pub total: usize,
    pub pairs_skipped: usize,
    pub rules: Vec<Rule>,
}

/// Execute `bp rules`.
///
/// # Errors
///
/// Returns an error if the CSV cannot be loaded, scoring fails, or output
/// rendering fails.
pub fn run_rules(args: &RulesArgs, output: OutputMode) -> anyhow::Result<()> {
    let data = load_or_report(&args.csv, output)?;
    let report = match ranked_rules(&data) {
        Ok(report) => report,
        Err(e) => {
            render_error(output, &CliError::from(&e))?;
            return Err(e.into());
        }
    };

    let total = report.rules.len();
    let mut rules = report.rules;
    if let Some(limit) = args.limit {
        rules.truncate(limit);
    }

    let out = RulesOutput {
        dataset: args.csv.display().to_string(),
        total,
        pairs_skipped: report.pairs_skipped,
        rules,
    };
    render_mode(output, &out, render_rules_text, render_rules_human)
}

fn render_rules_human(out: &RulesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(
        w,
        &format!("Rules for {} ({} of {})", out.dataset, out.rules.len(), out.total),
    )?;
    for (i, rule) in out.rules.iter().enumerate() {
        writeln!(w, "{:>3}. {:<40} {:.4}", i + 1, rule.to_string(), rule.entropy)?;
    }
    if out.pairs_skipped > 0 {
        writeln!(w, "({} pair(s) with a constant attribute skipped)", out.pairs_skipped)?;
    }
    Ok(())
}

fn render_rules_text(out: &RulesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for rule in &out.rules {
        writeln!(w, "{}\t{:.6}", rule, rule.entropy)?;
    }
    Ok(())
}
