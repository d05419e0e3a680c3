use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "roster")]
#[command(about = "Employee roster registry with salary band enforcement")]
pub struct CliConfig {
    /// Path to the TOML roster definition
    #[arg(short, long, default_value = "roster.toml")]
    pub roster_file: String,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
