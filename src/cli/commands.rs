use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jeevansathi", version, about = "JeevanSathi Health Assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the config file path globally
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve,

    /// Enter interactive chat REPL mode
    Chat {
        /// Language code to start in (en, hi, mr, bn, te)
        #[arg(short, long, default_value = "en")]
        language: String,
    },

    /// Print the vaccination schedule, highlighting doses due for a birth date
    Schedule {
        /// Language code for the schedule text
        #[arg(short, long, default_value = "en")]
        language: String,

        /// Child's birth date (YYYY-MM-DD)
        #[arg(short, long)]
        birth_date: Option<String>,
    },

    /// Translate a line of text into a target language's script
    Translate {
        /// Language code to translate into
        #[arg(short, long)]
        language: String,

        /// The text to translate
        text: String,
    },
}
