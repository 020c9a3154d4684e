use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dm-cli")]
#[command(about = "Play and check tabular dialogue scripts")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// Chat with a script on stdin/stdout.
    Play(PlayArgs),
    /// Compile a script and report warnings.
    Check(CheckArgs),
    /// Feed a fixed list of inputs and print every response.
    Say(SayArgs),
}

#[derive(Debug, Args)]
pub(crate) struct PlayArgs {
    #[arg(long = "script")]
    pub(crate) script: String,
    #[arg(long = "config")]
    pub(crate) config: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    #[arg(long = "script")]
    pub(crate) script: String,
}

#[derive(Debug, Args)]
pub(crate) struct SayArgs {
    #[arg(long = "script")]
    pub(crate) script: String,
    #[arg(long = "config")]
    pub(crate) config: Option<String>,
    #[arg(long = "input", required = true)]
    pub(crate) inputs: Vec<String>,
}
