// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze a password and print the full report
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Generate a random password
    Generate {
        /// Password length (8-128)
        #[arg(long, short, default_value_t = 16)]
        length: usize,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out special characters
        #[arg(long)]
        no_special: bool,
    },

    /// Print stronger variants of a password
    Improve {
        /// Password to improve
        #[arg(required = true)]
        password: String,
    },
}
