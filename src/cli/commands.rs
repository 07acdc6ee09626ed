use clap::Parser;

#[derive(Parser)]
#[command(name = "twodo", about = concat!("[>] twodo v", env!("CARGO_PKG_VERSION"), " - two lists, one board"), version)]
pub struct Cli {
    /// Intent script to run; reads stdin when omitted
    pub script: Option<String>,

    /// Output board state as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress per-intent confirmation lines
    #[arg(short, long)]
    pub quiet: bool,
}
