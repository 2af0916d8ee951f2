use crate::color;
use crate::label::{self, LabelError};
use crate::style::PlotStyle;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Series and output of one cross section plot.
#[derive(Debug, Clone, Default)]
pub struct PlotSpec {
    /// Computed data files, plotted as lines from columns 1:2.
    pub computed: Vec<String>,

    /// All external data files, plotted with error bars from columns 1:3:4.
    pub external: Vec<String>,

    /// External files labelled `w1`; the remaining ones are `w0`.
    pub weighted: BTreeSet<String>,

    /// Image written by the renderer.
    pub output: String,
}

/// What to do when an external file name cannot be turned into a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFallback {
    Abort,
    BaseName,
}

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("nothing to plot: no computed or external data files given")]
    NoSeries,

    #[error("point type of series {index} overflows (offset {offset})")]
    PointTypeOverflow { index: usize, offset: usize },

    #[error(transparent)]
    Label(#[from] LabelError),
}

/// A complete gnuplot script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script(String);

impl Script {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Script {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// gnuplot single-quoted string literal.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

pub fn compose_script(
    spec: &PlotSpec,
    style: &PlotStyle,
    fallback: LabelFallback,
) -> Result<Script, ComposeError> {
    if spec.computed.is_empty() && spec.external.is_empty() {
        return Err(ComposeError::NoSeries);
    }

    let mut lines = vec![
        format!("set terminal {}", style.terminal),
        format!("set output {}", quote(&spec.output)),
        format!("set title {}", quote(&style.title)),
        format!("set xlabel {}", quote(&style.xlabel)),
        format!("set ylabel {}", quote(&style.ylabel)),
    ];
    if style.grid {
        lines.push("set grid".to_owned());
    }
    lines.push(format!("set xrange [{}:{}]", style.xmin, style.xmax));

    let mut directives = Vec::with_capacity(spec.computed.len() + spec.external.len());
    for (i, path) in spec.computed.iter().enumerate() {
        let title = format!("Input {}", i + 1);
        debug!(%path, %title, "computed series");
        directives.push(format!(
            "{} using 1:2 title {} with lines",
            quote(path),
            quote(&title)
        ));
    }

    let total = spec.external.len();
    for (j, path) in spec.external.iter().enumerate() {
        let title = match label::extract_label(path, &spec.weighted) {
            Ok(title) => title,
            Err(e) if fallback == LabelFallback::BaseName => {
                warn!("{}; using the file name as label", e);
                label::base_name(path).to_owned()
            }
            Err(e) => return Err(e.into()),
        };
        let point_type = j
            .checked_add(style.point_type_offset)
            .ok_or(ComposeError::PointTypeOverflow {
                index: j,
                offset: style.point_type_offset,
            })?;
        let color = color::ramp(j, total, style.saturation, style.lightness);
        debug!(%path, %title, point_type, %color, "external series");
        directives.push(format!(
            "{} using 1:3:4 with errorbars title {} pt {} lc rgb {}",
            quote(path),
            quote(&title),
            point_type,
            quote(&color.to_string())
        ));
    }

    lines.push(format!("plot {}", directives.iter().join(", ")));

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(Script(text))
}
