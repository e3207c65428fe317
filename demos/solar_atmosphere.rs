// Builds the grey solar atmosphere, applies one radiative-equilibrium
// correction and prints the structure table.
//
//   cargo run --example solar_atmosphere [preset.json] [--json]
//
// RUST_LOG=debug shows the per-component boundary values.

use grey_atmosphere::{AtmosphereConfig, AtmosphereModel, ModelReport};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let preset = args.iter().find(|a| !a.starts_with("--"));

    match run(preset.map(String::as_str), as_json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(preset: Option<&str>, as_json: bool) -> grey_atmosphere::Result<()> {
    let config = match preset {
        Some(path) => AtmosphereConfig::load(path)?,
        None => AtmosphereConfig::default(),
    };

    let model = AtmosphereModel::build(&config)?;
    let step = model.correct()?;
    let report = ModelReport::from_model(&model).with_correction(&step.correction)?;

    if as_json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("Grey LTE atmosphere");
    println!("===================");
    report.print_table();

    let top = step.correction.delta_t[0] / model.temperature.value(0);
    println!();
    println!(
        "One correction step: surface dT/T {:+.4}, max |dT| {:.1} K",
        top,
        step.correction.max_abs_delta()
    );
    Ok(())
}
