mod cmd;
mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dialpad", version, about = "Dialpad API tools from the command line", long_about = None, disable_help_subcommand = true)]
struct Cli {
    /// Log every request to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save, inspect or remove your Dialpad API key
    Auth {
        /// Remove the stored API key
        #[arg(long)]
        unset: bool,
    },
    /// Show or change stored client settings
    Config(cmd::config::ConfigCmd),
    /// List available operations
    Tools {
        /// Only operations with this tag (e.g. users, offices, subscriptions)
        #[arg(long)]
        tag: Option<String>,
        /// Only operations flagged as important
        #[arg(long)]
        important: bool,
        /// Print tool definitions with input schemas as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the parameters of one operation
    Describe {
        /// Operation name, e.g. users_list
        operation: String,
    },
    /// Invoke one operation and print the reply
    Call {
        /// Operation name, e.g. offices_list
        operation: String,
        /// Parameter as name=value; repeatable
        #[arg(short = 'a', long = "arg", value_name = "NAME=VALUE")]
        args: Vec<String>,
        /// Parameters as a JSON object; merged before --arg values
        #[arg(long, value_name = "JSON")]
        args_json: Option<String>,
        /// API origin override (default https://dialpad.com)
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_logging(cli.debug);
    match cli.command {
        Commands::Auth { unset } => cmd::auth::handle_auth(unset),
        Commands::Config(c) => cmd::config::handle_config(c),
        Commands::Tools { tag, important, json } => cmd::tools::handle_tools(tag, important, json),
        Commands::Describe { operation } => cmd::tools::handle_describe(&operation),
        Commands::Call { operation, args, args_json, base_url } => cmd::call::handle_call(operation, args, args_json, base_url),
    }
}
