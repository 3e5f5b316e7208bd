use crate::subtitle::SubtitleFormat;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod fetch;
pub mod normalize;

pub use check::handle_check_command;
pub use fetch::handle_fetch_command;
pub use normalize::handle_normalize_command;

#[derive(Parser, Debug)]
#[command(name = "captext")]
#[command(about = "Plain-text transcripts from video subtitles", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP service (default)
    Serve(ServeCliArgs),
    /// Fetch a transcript once and print it
    Fetch(FetchCliArgs),
    /// Normalize a local subtitle file (or stdin) to plain text
    Normalize(NormalizeCliArgs),
    /// Check that yt-dlp is available and show the fetch settings
    Check,
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug, Default)]
pub struct ServeCliArgs {
    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(ClapArgs, Debug)]
pub struct FetchCliArgs {
    /// Video URL
    pub url: String,
    /// Write the transcript to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct NormalizeCliArgs {
    /// Subtitle file; reads stdin when omitted
    pub file: Option<PathBuf>,
    /// Subtitle format (srt or vtt); guessed from the file extension by default
    #[arg(short, long)]
    pub format: Option<SubtitleFormat>,
    /// Print cue and character counts to stderr
    #[arg(long)]
    pub stats: bool,
}
