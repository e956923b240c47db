use std::io;

use clap::Parser;
use isochem::{Adduct, ChemicalModification, Compound, DEFAULT_PEAK_COUNT, Massive, Result};
use itertools::Itertools;
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, IntoDiagnostic};
use rustyline::DefaultEditor;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Calculates the masses and isotopic envelopes of molecules, and of the ions they form
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The number of isotopic peaks to report
    #[arg(short, long, default_value_t = DEFAULT_PEAK_COUNT)]
    peaks: usize,
    /// Molecules to evaluate, each a formula followed by any modifications, like "C6H12O6 +H -H2O". Starts an
    /// interactive prompt when none are given
    inputs: Vec<String>,
}

fn main() -> miette::Result<()> {
    configure_log();
    let Args { peaks, inputs } = Args::parse();
    debug!(peaks, inputs = inputs.len(), "starting molmass");

    if !inputs.is_empty() {
        for input in &inputs {
            report(input, peaks);
        }
        return Ok(());
    }

    let mut rl = DefaultEditor::new().into_diagnostic()?;
    while let Ok(line) = rl.readline("Molecule: ") {
        if line.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(&line).into_diagnostic()?;
        report(&line, peaks);
    }

    Ok(())
}

fn configure_log() {
    tracing_subscriber::registry()
        .with(
            fmt::layer().compact().with_writer(io::stderr).with_filter(
                EnvFilter::builder()
                    .with_default_directive(tracing::Level::WARN.into())
                    .from_env_lossy(),
            ),
        )
        .init();
}

fn report(input: &str, peaks: usize) {
    match molecule_info(input, peaks) {
        Ok(info) => println!("{info}"),
        Err(diagnostic) => render_error(&diagnostic),
    }
}

// NOTE: Lines look like `<formula> [<modification>...]`, and the formula doubles as the compound name
fn molecule_info(line: &str, peaks: usize) -> Result<String> {
    let mut terms = line.split_whitespace();
    let formula = terms.next().unwrap_or_default();
    let compound = Compound::new(formula, formula)?;
    let modifications: Vec<_> = terms.map(str::parse::<ChemicalModification>).try_collect()?;

    let adduct = Adduct::new(&compound, modifications)?;
    let envelope = adduct.formula().envelope(peaks)?;

    Ok(format!(
        "Ion Type: {}\nFormula: {}\nMonoisotopic Mass: {:.6}\nAverage Mass: {:.4}\nIsotopic Envelope: {envelope}\n",
        adduct.ion_type_string(),
        adduct.formula().counts(),
        adduct.monoisotopic_mass(),
        adduct.average_mass(),
    ))
}

fn render_error(diagnostic: &dyn Diagnostic) {
    let mut buf = String::new();
    match GraphicalReportHandler::new_themed(GraphicalTheme::unicode()).render_report(&mut buf, diagnostic) {
        Ok(()) => println!("{buf}"),
        Err(_) => println!("Error: {diagnostic}"),
    }
}
