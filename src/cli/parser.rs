use clap::{Parser, Subcommand};

/// Command-line interface definition for wtimeline
#[derive(Parser)]
#[command(
    name = "wtimeline",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build a same-day wedding photo/video shooting schedule and export it as text",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Disable ANSI colours in tables and messages
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an editing session (commands are read from stdin or a script)
    Session {
        #[arg(
            long,
            value_name = "FILE",
            help = "Read session commands from FILE instead of stdin"
        )]
        script: Option<String>,
    },

    /// List the predefined event blocks
    Blocks {
        #[arg(
            long,
            short,
            help = "Only show one category (e.g. ceremony, reception, \"group photos\")"
        )]
        category: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the configuration in use")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long, requires = "init", help = "Overwrite an existing file (with --init)")]
        force: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },
}
