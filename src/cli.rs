use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bulktodo")]
#[command(about = "A terminal todo list that starts out seeded with placeholder tasks", long_about = None)]
pub struct Cli {
    /// Number of placeholder tasks to start with (overrides config)
    #[arg(short = 'n', long, global = true)]
    pub seed_count: Option<usize>,

    /// Color theme: default, dark or light (overrides config)
    #[arg(short, long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the seeded list and exit
    Show {
        /// Print items as JSON
        #[arg(long)]
        json: bool,

        /// Print at most this many items
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
