use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
enum Opt {
    /// Generates a cross section plot script and renders it with gnuplot.
    Plot(xsplot::plot::PlotOpt),

    /// Prints the label and year derived from each file name.
    Labels(xsplot::label::LabelsOpt),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xsplot=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::from_args();
    match opt {
        Opt::Plot(opt) => opt.plot(),
        Opt::Labels(opt) => opt.print(std::io::stdout().lock()),
    }
}
