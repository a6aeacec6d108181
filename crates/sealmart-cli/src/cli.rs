use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sealmart",
    about = "Sealmart — sealed-code extension marketplace client",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full submit → review → enumerate lifecycle in memory
    Demo(DemoArgs),
    /// Seal source text the way a submission would
    Seal(SealArgs),
    /// Recover source text from a sealed blob
    Unseal(UnsealArgs),
    /// Check a submission draft without submitting it
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct DemoArgs {
    /// Simulated analysis time per review, in milliseconds
    #[arg(long, default_value = "400")]
    pub review_ms: u64,
    /// Identity used to sign the demo submissions
    #[arg(long, default_value = "0xA11CE")]
    pub identity: String,
}

#[derive(Args)]
pub struct SealArgs {
    /// Source text to seal
    pub source: String,
}

#[derive(Args)]
pub struct UnsealArgs {
    /// Sealed blob to recover
    pub sealed: String,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub source: String,
}
