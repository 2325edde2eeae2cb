//! Terminal output and prompts.

use console::Term;
use dialoguer::Confirm;
use folio::{features::FeatureSchema, graph::DegreeRanking};

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for section headers
pub static WORKING_PREFIX: &str = "» ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Prefix for an item in a list
pub static ITEM_PREFIX: &str = "├─";
/// Prefix for the last item in a list
pub static LAST_ITEM_PREFIX: &str = "└─";
/// Separates an edge's source from its target
pub static ARROW: &str = "→";

/// Something the CLI wants to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A full analysis report
  Report(&'a Report),
  /// A configuration
  Config(&'a Config),
  /// Raw text printed as is (e.g. JSON)
  Raw(&'a str),
  /// A completed action
  Success(&'a str),
  /// Neutral information
  Info(&'a str),
}

/// How commands talk to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Shows `content`.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

impl UserInteraction for Cli {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{} {}", style(PROMPT_PREFIX).yellow(), message))
        .default(false)
        .interact()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    let term = Term::stdout();
    match content {
      ResponseContent::Report(report) => render_report(&term, report),
      ResponseContent::Config(config) => render_config(&term, config),
      ResponseContent::Raw(text) => Ok(term.write_line(text)?),
      ResponseContent::Success(message) =>
        Ok(term.write_line(&format!("{} {}", style(SUCCESS_PREFIX).green(), message))?),
      ResponseContent::Info(message) =>
        Ok(term.write_line(&format!("{} {}", style(INFO_PREFIX).cyan(), message))?),
    }
  }
}

/// Writes a section header.
fn section(term: &Term, title: &str) -> Result<()> {
  term.write_line("")?;
  term.write_line(&format!("{} {}", style(WORKING_PREFIX).cyan(), style(title).bold()))?;
  Ok(())
}

/// Writes rows as a tree, or a placeholder when there are none.
fn rows(term: &Term, rows: &[String]) -> Result<()> {
  if rows.is_empty() {
    term.write_line(&format!("{} {}", LAST_ITEM_PREFIX, style("(none)").dim()))?;
  }
  for (i, row) in rows.iter().enumerate() {
    let prefix = if i + 1 == rows.len() { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
    term.write_line(&format!("{prefix} {row}"))?;
  }
  Ok(())
}

/// Renders one degree ranking.
fn degree_rows(rankings: &[DegreeRanking]) -> Vec<String> {
  rankings.iter().map(|r| format!("{} {}", style(r.degree).yellow(), r.author)).collect()
}

/// Renders the columns of the feature table.
fn schema_rows(schema: &FeatureSchema) -> Vec<String> {
  schema.columns.iter().map(|c| format!("{}: {}", c.name, style(&c.data_type).dim())).collect()
}

/// Prints every section of a report.
fn render_report(term: &Term, report: &Report) -> Result<()> {
  section(term, "Corpus")?;
  rows(term, &[
    format!("Pattern: {}", report.config.corpus),
    format!("Lines: {}", report.line_count),
    format!("Books: {}", report.document_count),
  ])?;

  section(term, "Metadata sample")?;
  let sample: Vec<String> = report
    .metadata_sample
    .iter()
    .map(|r| {
      let year = r.year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string());
      format!(
        "{} | {} | {} | {}",
        style(&r.document_id).dim(),
        if r.author.is_empty() { "-" } else { r.author.as_str() },
        year,
        if r.language.is_empty() { "-" } else { r.language.as_str() }
      )
    })
    .collect();
  rows(term, &sample)?;

  section(term, &format!("Top {} languages", report.config.top_n))?;
  let languages: Vec<String> = report
    .top_languages
    .iter()
    .map(|l| format!("{} {}", style(l.count).yellow(), l.language))
    .collect();
  rows(term, &languages)?;

  section(term, "Average text length (rough check)")?;
  rows(term, &[format!("avg_title_length: {:.4}", report.text_presence)])?;

  section(term, "TF-IDF schema")?;
  rows(term, &schema_rows(&report.feature_schema))?;
  rows(term, &[format!(
    "{} rows x {} features",
    report.feature_schema.num_rows, report.feature_schema.num_features
  )])?;

  section(term, &format!("Influence edges (window {} years)", report.config.window))?;
  rows(term, &[format!("Total edges: {}", report.edge_count)])?;
  let edges: Vec<String> = report
    .edge_sample
    .iter()
    .map(|e| format!("{} ({}) {} {} ({})", e.author1, e.year1, ARROW, e.author2, e.year2))
    .collect();
  rows(term, &edges)?;

  section(term, &format!("Top {} by in-degree", report.config.top_n))?;
  rows(term, &degree_rows(&report.top_in_degree))?;

  section(term, &format!("Top {} by out-degree", report.config.top_n))?;
  rows(term, &degree_rows(&report.top_out_degree))?;

  term.write_line("")?;
  term.write_line(&format!("{} Done.", style(SUCCESS_PREFIX).green()))?;
  Ok(())
}

/// Prints the effective configuration.
fn render_config(term: &Term, config: &Config) -> Result<()> {
  section(term, "Configuration")?;
  rows(term, &[
    format!("corpus: {}", config.corpus),
    format!("window: {}", config.window),
    format!("num_features: {}", config.num_features),
    format!("sample_size: {}", config.sample_size),
    format!("top_n: {}", config.top_n),
    format!("dedup: {}", config.dedup),
  ])
}
