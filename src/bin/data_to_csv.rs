use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use ipn_plot::{CsvDump, ReportConfig};

// folder with the benchmark logs
const DATA_DIR: &str = "data";

// folder where the panel data will be stored
const OUTPUT_DIR: &str = "plots";

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    ipn_plot::init_tracing_subscriber();

    std::fs::create_dir_all(OUTPUT_DIR).wrap_err("create output directory")?;
    let report = ipn_plot::Report::new(ReportConfig::new(DATA_DIR, OUTPUT_DIR));
    let outcome = report.run_all(&mut CsvDump);
    for path in &outcome.written {
        println!("written {}", path.display());
    }
    for (key, e) in &outcome.skipped {
        println!("skipped {}: {}", key, e);
    }

    if let Some((mode, e)) = outcome.failed.into_iter().next() {
        return Err(e).wrap_err_with(|| format!("dump {} panels", mode));
    }
    Ok(())
}
