use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rapport")]
#[command(about = "Compose a task report and export it as HTML", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to the report state file (or set RAPPORT_FILE env var)
    #[arg(long, short, value_name = "FILE", env = "RAPPORT_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Path to the configuration file (or set RAPPORT_CONFIG env var)
    #[arg(long, value_name = "PATH", env = "RAPPORT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the whole report state
    Show,
    /// Update the report title, date or author
    Meta(MetaArgs),
    /// Task operations
    Task(TaskCommand),
    /// Render the report as HTML or plain text
    Render(RenderArgs),
    /// Copy the rendered report to the clipboard
    Copy,
    /// Drop all tasks and start a report for today
    Reset,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct MetaArgs {
    #[arg(long)]
    pub title: Option<String>,
    /// ISO date (yyyy-mm-dd); re-derives the title unless --title is given
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
}

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Append a task
    Add {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List tasks in report order
    List,
    /// Get a single task
    Get {
        /// 1-based position as shown in the report
        #[arg(long)]
        position: usize,
    },
    /// Update a task
    Update(TaskUpdateArgs),
    /// Remove a task; following tasks move up
    Remove {
        /// 1-based position as shown in the report
        #[arg(long)]
        position: usize,
    },
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    /// 1-based position as shown in the report
    #[arg(long)]
    pub position: usize,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct RenderArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,
    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
}

impl From<OutputFormat> for rapport_domain::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => Self::Html,
            OutputFormat::Text => Self::Text,
        }
    }
}
