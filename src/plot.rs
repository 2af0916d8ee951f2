use crate::plot::gnuplot::{run_gnuplot, RenderOutcome};
use crate::plot::script::{compose_script, LabelFallback, PlotSpec};
use crate::style::PlotStyle;
use anyhow::bail;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::{info, warn};

pub mod gnuplot;
pub mod script;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct PlotOpt {
    /// Image file written by gnuplot.
    #[structopt(long)]
    pub output: String,

    /// Where the generated gnuplot script is written.
    #[structopt(long)]
    pub script: PathBuf,

    /// Computed data file (columns: energy, cross section); repeat for several.
    #[structopt(long, number_of_values = 1)]
    pub computed: Vec<String>,

    /// External data file (columns: energy, _, cross section, error); repeat for several.
    #[structopt(long, number_of_values = 1)]
    pub external: Vec<String>,

    /// External data file labelled as weighted; repeat for several.
    #[structopt(long, number_of_values = 1)]
    pub weighted: Vec<String>,

    /// JSON file overriding the default plot style.
    #[structopt(long)]
    pub style: Option<PathBuf>,

    /// Uses the file name as label when it cannot be parsed, instead of failing.
    #[structopt(long)]
    pub lenient_labels: bool,

    /// Renderer program, called with the script path as its only argument.
    #[structopt(long, default_value = "gnuplot")]
    pub gnuplot: String,
}

impl PlotOpt {
    pub fn plot(&self) -> anyhow::Result<()> {
        let style = match &self.style {
            Some(path) => PlotStyle::from_path(path)?,
            None => PlotStyle::default(),
        };
        let spec = self.spec();
        let fallback = if self.lenient_labels {
            LabelFallback::BaseName
        } else {
            LabelFallback::Abort
        };

        let script = compose_script(&spec, &style, fallback)?;
        let outcome = run_gnuplot(&script, &self.script, &self.gnuplot)?;
        outcome.report();

        if let RenderOutcome::Failure { exit_code, .. } = outcome {
            match exit_code {
                Some(code) => bail!("{} failed with exit code {}", self.gnuplot, code),
                None => bail!("{} was terminated by a signal", self.gnuplot),
            }
        }
        info!("Generated: {:?}", self.output);
        Ok(())
    }

    fn spec(&self) -> PlotSpec {
        for path in &self.weighted {
            if !self.external.contains(path) {
                warn!("weighted file {:?} is not among the external files", path);
            }
        }
        PlotSpec {
            computed: self.computed.clone(),
            external: self.external.clone(),
            weighted: self.weighted.iter().cloned().collect(),
            output: self.output.clone(),
        }
    }
}
