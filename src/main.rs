use clap::Parser;
use roster::utils::{logger, validation::Validate};
use roster::{CliConfig, EmployeeManager, RosterConfig, RosterLoader};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RosterSummary {
    roster: String,
    positions: usize,
    employees: usize,
    total_salary: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting roster CLI");
    tracing::info!("📁 Loading roster from: {}", args.roster_file);

    let config = match RosterConfig::from_file(&args.roster_file) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load roster file '{}': {}", args.roster_file, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Roster validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ Roster file loaded and validated");

    let summary_meta = (config.roster.name.clone(), config.positions.len());
    let manager = match RosterLoader::new(config).load() {
        Ok(manager) => manager,
        Err(e) => {
            tracing::error!("❌ Registration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let summary = RosterSummary {
        roster: summary_meta.0,
        positions: summary_meta.1,
        employees: manager.employees().len(),
        total_salary: manager.total_salary(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    display_summary(&manager, &summary);

    Ok(())
}

fn display_summary(manager: &EmployeeManager, summary: &RosterSummary) {
    println!("📋 Roster: {}", summary.roster);
    println!();
    for employee in manager.employees() {
        println!(
            "  {:<6} {:<24} {:<24} {:>12.2}",
            employee.id, employee.name, employee.position.name, employee.salary
        );
    }
    println!();
    println!(
        "✅ {} employees across {} positions",
        summary.employees, summary.positions
    );
    println!("💰 Total salary: {:.2}", summary.total_salary);
}
