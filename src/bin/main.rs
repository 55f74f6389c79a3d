use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use ipn_plot::{Matplotlib, MetricKind, ReportConfig, ReportOutcome};

// folder with the benchmark logs
const DATA_DIR: &str = "data";

// folder where all plots will be stored
const PLOT_DIR: &str = "plots";

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    ipn_plot::init_tracing_subscriber();

    let report = ipn_plot::Report::new(ReportConfig::new(DATA_DIR, PLOT_DIR));
    let mut renderer = Matplotlib::new(report.config().format())
        .wrap_err("start matplotlib")?;

    let mut failed = 0;
    for kind in MetricKind::all() {
        println!(">>>>>>>> {} <<<<<<<<", kind.token().to_uppercase());
        let outcome = report.run(kind, &mut renderer);
        summary(&outcome);
        failed += outcome.failed.len();
    }

    if failed > 0 {
        eyre::bail!("{} figure(s) could not be written", failed);
    }
    Ok(())
}

fn summary(outcome: &ReportOutcome) {
    for path in &outcome.written {
        println!("written {}", path.display());
    }
    for (key, e) in &outcome.skipped {
        println!("skipped {}: {}", key, e);
    }
    for (mode, e) in &outcome.failed {
        println!("failed {}: {}", mode, e);
    }
}
