//! CLI command definitions
//!
//! Defines the clap commands for the greeter CLI.

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the greeting and factorial demo (default)
    Run,

    /// Print the greeting for a name
    #[command(alias = "g")]
    Greet {
        /// Name to greet, used verbatim
        #[arg(allow_hyphen_values = true)]
        name: String,
    },

    /// Print the factorial of a number
    #[command(alias = "fact")]
    Factorial {
        /// Non-negative integer, at most 34
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
}
