use clap::{Parser, Subcommand};

/// `cvchat` - ask a portfolio's CV assistant from the terminal.
#[derive(Parser, Debug)]
#[command(name = "cvchat")]
#[command(version)]
#[command(about = "Rate-limited chat with a portfolio's CV assistant.", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides config and CVCHAT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive conversation (default)
    Chat,

    /// Ask a single question and exit
    Ask {
        /// The question
        message: String,
    },

    /// Show the question quota and cooldown
    Status,

    /// Start a new session and forget the conversation
    Reset,

    /// Print the stored conversation
    History {
        /// Delete the stored conversation instead
        #[arg(long)]
        clear: bool,
    },

    /// Print links to the CV
    Cv {
        /// Link to a single page image
        #[arg(short, long)]
        page: Option<u32>,
    },
}

impl Cli {
    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Chat)
    }
}
