//! Scenario test runner binary

use clap::{Arg, Command};
use pce_scenario_test::runner::ScenarioRunner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = Command::new("scenario-test")
        .about("Run end-to-end path computation scenarios")
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Print the report as JSON instead of the summary")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the JSON report to a file"),
        )
        .get_matches();

    let suite = ScenarioRunner::new().run_all();

    if matches.get_flag("json") {
        println!("{}", suite.generate_report());
    } else {
        suite.print_summary();
    }

    if let Some(output_path) = matches.get_one::<String>("output") {
        std::fs::write(output_path, suite.generate_report())?;
        println!("Report written to: {}", output_path);
    }

    if suite.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
