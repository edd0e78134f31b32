use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopcart", bin_name = "shopcart", version)]
#[command(about = "Storefront shopping cart in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding cart data (defaults to $SHOPCART_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add one unit of each product to the cart
    #[command(alias = "inc")]
    Add {
        /// Product ids (e.g. 1 7 7)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Take one unit of each product out of the cart
    #[command(alias = "sub")]
    Dec {
        /// Product ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Remove products from the cart entirely
    #[command(alias = "rm")]
    Remove {
        /// Product ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show the cart controls of product cards
    Card {
        /// Product ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show the cart panel
    #[command(alias = "ls")]
    List,

    /// Show the navigation bar with the cart badge
    Badge,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., storage-key)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive session: one command per line on stdin
    Shell,
}

/// A single line typed into `shopcart shell`.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
#[command(about = "Commands: add, dec, rm, card, list, open, close, badge, quit")]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Add one unit of each product
    #[command(alias = "inc")]
    Add {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Take one unit of each product out
    #[command(alias = "sub")]
    Dec {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Remove products entirely
    #[command(alias = "remove")]
    Rm {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show product card controls
    Card {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show the cart panel once
    #[command(alias = "ls")]
    List,

    /// Open the cart panel (redrawn after every change)
    Open,

    /// Close the cart panel
    Close,

    /// Show the navigation bar
    Badge,

    /// End the session
    #[command(aliases = ["exit", "q"])]
    Quit,
}
