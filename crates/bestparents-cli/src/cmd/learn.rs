//! `bp learn` — run a structure search over a CSV dataset.

use crate::load::load_or_report;
use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render_error, render_mode};
use bestparents_core::config::resolve_config;
use bestparents_core::{BayesNet, Dataset, SearchConfig, StrategyKind};
use bestparents_search::{SearchReport, StructureSearch};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug)]
pub struct LearnArgs {
    /// CSV file; the first row names the attributes.
    pub csv: PathBuf,

    /// Edge selection strategy (full-list, best-parents-and-children, wave,
    /// children-only, parents-only).
    #[arg(short, long)]
    pub strategy: Option<StrategyKind>,

    /// Maximum parents per attribute.
    #[arg(long, value_name = "N")]
    pub max_parents: Option<usize>,

    /// Maximum children per attribute.
    #[arg(long, value_name = "N")]
    pub max_children: Option<usize>,

    /// Wave root attribute index (default: the last column).
    #[arg(long, value_name = "N")]
    pub root: Option<usize>,

    /// Config file to use instead of bestparents.toml / the user config.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl LearnArgs {
    /// Apply flag overrides on top of the file config.
    fn apply(&self, mut config: SearchConfig) -> SearchConfig {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(n) = self.max_parents {
            config.max_parents = n;
        }
        if let Some(n) = self.max_children {
            config.max_children = n;
        }
        if self.root.is_some() {
            config.root = self.root;
        }
        config
    }
}

/// One attribute and the parents the search gave it.
#[derive(Debug, Serialize)]
pub struct ParentSet {
    pub attribute: String,
    pub parents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LearnOutput {
    pub dataset: String,
    pub attributes: usize,
    pub instances: usize,
    #[serde(flatten)]
    pub report: SearchReport,
    pub parent_sets: Vec<ParentSet>,
}

/// Execute `bp learn`.
///
/// # Errors
///
/// Returns an error if the config or CSV cannot be loaded, the search fails,
/// or output rendering fails.
pub fn run_learn(args: &LearnArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let file_config = resolve_config(project_root, args.config.as_deref())?;
    let config = args.apply(file_config.search);
    debug!(?config, "effective search config");

    let data = load_or_report(&args.csv, output)?;
    let names: Vec<String> = (0..data.num_attributes())
        .map(|a| data.attribute_name(a))
        .collect();
    let mut net = BayesNet::new(names.iter().cloned());

    let report = match StructureSearch::new(config).search(&data, &mut net) {
        Ok(report) => report,
        Err(e) => {
            render_error(output, &CliError::from(&e))?;
            return Err(e.into());
        }
    };

    let parent_sets = names
        .iter()
        .enumerate()
        .map(|(child, name)| ParentSet {
            attribute: name.clone(),
            parents: net
                .parents(child)
                .into_iter()
                .filter_map(|p| net.name(p).map(str::to_string))
                .collect(),
        })
        .collect();

    let out = LearnOutput {
        dataset: args.csv.display().to_string(),
        attributes: data.num_attributes(),
        instances: data.num_instances(),
        report,
        parent_sets,
    };

    render_mode(
        output,
        &out,
        |o, w| render_learn_text(o, &names, w),
        |o, w| render_learn_human(o, &names, w),
    )
}

fn render_learn_human(out: &LearnOutput, names: &[String], w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Structure of {}", out.dataset))?;
    pretty_kv(w, "strategy", out.report.strategy.as_str())?;
    pretty_kv(
        w,
        "limits",
        format!(
            "{} parent(s), {} child(ren)",
            out.report.max_parents, out.report.max_children
        ),
    )?;
    pretty_kv(
        w,
        "data",
        format!("{} attributes, {} instances", out.attributes, out.instances),
    )?;
    pretty_kv(w, "candidates", out.report.candidates.to_string())?;
    if !out.report.degenerate_attributes.is_empty() {
        let skipped: Vec<&str> = out
            .report
            .degenerate_attributes
            .iter()
            .map(|&a| names[a].as_str())
            .collect();
        pretty_kv(w, "constant", skipped.join(", "))?;
    }
    pretty_kv(w, "fingerprint", &out.report.fingerprint)?;

    writeln!(w)?;
    pretty_section(w, &format!("Edges ({})", out.report.edges.len()))?;
    for (i, edge) in out.report.edges.iter().enumerate() {
        writeln!(
            w,
            "{:>3}. {} -> {}  (H = {:.4})",
            i + 1,
            names[edge.parent],
            names[edge.child],
            edge.entropy
        )?;
    }

    writeln!(w)?;
    pretty_section(w, "Parent sets")?;
    for set in &out.parent_sets {
        let parents = if set.parents.is_empty() {
            "-".to_string()
        } else {
            set.parents.join(", ")
        };
        writeln!(w, "{:<16} {parents}", set.attribute)?;
    }
    Ok(())
}

fn render_learn_text(out: &LearnOutput, names: &[String], w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "parent\tchild\tentropy")?;
    for edge in &out.report.edges {
        writeln!(
            w,
            "{}\t{}\t{:.6}",
            names[edge.parent], names[edge.child], edge.entropy
        )?;
    }
    writeln!(w, "# {} {}", out.report.strategy, out.report.fingerprint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> LearnArgs {
        LearnArgs {
            csv: PathBuf::from("data.csv"),
            strategy: None,
            max_parents: None,
            max_children: None,
            root: None,
            config: None,
        }
    }

    #[test]
    fn flags_override_file_values() {
        let file = SearchConfig::new(StrategyKind::FullList, 3, 3).with_root(2);
        let mut a = args();
        a.max_children = Some(1);
        a.strategy = Some(StrategyKind::Wave);
        let merged = a.apply(file);
        assert_eq!(merged.strategy, StrategyKind::Wave);
        assert_eq!(merged.max_parents, 3);
        assert_eq!(merged.max_children, 1);
        assert_eq!(merged.root, Some(2));
    }

    #[test]
    fn no_flags_keep_the_file_config() {
        let file = SearchConfig::new(StrategyKind::ChildrenOnly, 2, 4);
        assert_eq!(args().apply(file.clone()), file);
    }
}
