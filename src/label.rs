use regex::Regex;
use std::collections::BTreeSet;
use std::io::Write;
use std::sync::OnceLock;
use structopt::StructOpt;
use thiserror::Error;

/// Minimum number of `-` separated tokens a base name needs to be parsed.
pub const MIN_LABEL_TOKENS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("no year fragment in {token:?} of {path:?} (expected `<data>.<year>`)")]
    MissingYear { path: String, token: String },
}

/// Returns the text after the last `/`; empty for a trailing slash.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Derives the display label of an external data file.
///
/// Names of the form `a-b-c-<author>-<data>.<year>` become
/// `"<author>-<data> (<year>) w1"` when `path` is in `weighted`, and
/// `... w0` otherwise. Names with fewer than five `-` separated tokens are
/// returned unchanged.
pub fn extract_label(path: &str, weighted: &BTreeSet<String>) -> Result<String, LabelError> {
    let base = base_name(path);
    let tokens = base.split('-').collect::<Vec<_>>();
    if tokens.len() < MIN_LABEL_TOKENS {
        return Ok(base.to_string());
    }

    let author = tokens[3];
    let mut fragments = tokens[4].split('.');
    let data = fragments.next().unwrap_or_default();
    let year = fragments.next().ok_or_else(|| LabelError::MissingYear {
        path: path.to_owned(),
        token: tokens[4].to_owned(),
    })?;
    let weight = if weighted.contains(path) { "w1" } else { "w0" };

    Ok(format!("{}-{} ({}) {}", author, data, year, weight))
}

/// Returns the four digit year at the very end of `filename` (after a `.`).
pub fn extract_year(filename: &str) -> Option<u32> {
    static YEAR: OnceLock<Regex> = OnceLock::new();
    let re = YEAR.get_or_init(|| Regex::new(r"\.([0-9]{4})$").expect("unreachable"));
    re.captures(filename)?.get(1)?.as_str().parse().ok()
}

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct LabelsOpt {
    /// File labelled as weighted; repeat the flag for several files.
    #[structopt(long, number_of_values = 1)]
    pub weighted: Vec<String>,

    pub paths: Vec<String>,
}

impl LabelsOpt {
    /// Writes `<path>\t<label>\t<year>` for each path; `-` marks a missing year.
    pub fn print(&self, mut w: impl Write) -> anyhow::Result<()> {
        let weighted = self.weighted.iter().cloned().collect::<BTreeSet<_>>();
        for path in &self.paths {
            let label = extract_label(path, &weighted).unwrap_or_else(|e| format!("error: {}", e));
            let year = extract_year(path).map_or_else(|| "-".to_owned(), |y| y.to_string());
            writeln!(w, "{}\t{}\t{}", path, label, year)?;
        }
        Ok(())
    }
}
