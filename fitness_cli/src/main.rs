use clap::Parser;
use fitness_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Fitness training statistics calculator", long_about = None)]
struct Cli {
    /// JSON file with workout packages to process instead of the built-in demo
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    fitness_core::logging::init();

    let cli = Cli::parse();

    let packages = match cli.input {
        Some(path) => load_packages(&path)?,
        None => demo_packages(),
    };

    tracing::info!("Processing {} workout packages", packages.len());

    // Packages are processed sequentially, in input order
    for package in &packages {
        let training = read_package(&package.workout_type, &package.data)?;
        println!("{}", training.summary());
    }

    Ok(())
}
