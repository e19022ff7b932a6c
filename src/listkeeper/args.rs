use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "listkeeper")]
#[command(about = "Keep notes and to-dos from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (prints the data directory in use)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account
    Signup {
        #[arg(long)]
        firstname: String,

        #[arg(long)]
        lastname: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Repeat the password (defaults to --password)
        #[arg(long)]
        confirm_password: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Accept the terms of service
        #[arg(long)]
        agree_to_terms: bool,
    },

    /// Log in
    Login { username: String, password: String },

    /// Log out
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Create a new note
    #[command(alias = "n")]
    Add {
        title: String,

        content: String,

        /// Due date: YYYY-MM-DD or "YYYY-MM-DD HH:MM" (local time)
        #[arg(long)]
        due: String,

        /// Palette color, by name (green/red/yellow/blue/purple) or hex
        #[arg(long)]
        color: Option<String>,

        /// Create the note already completed
        #[arg(long)]
        completed: bool,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Search term (matches title and content)
        #[arg(short, long)]
        search: Option<String>,

        /// Show upcoming notes
        #[arg(long)]
        upcoming: bool,

        /// Show past-due notes
        #[arg(long)]
        past_due: bool,

        /// Show completed notes
        #[arg(long)]
        completed: bool,

        /// Show everything
        #[arg(long)]
        all: bool,
    },

    /// View one or more notes in full
    #[command(alias = "v")]
    View {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Edit a note's fields
    #[command(alias = "e")]
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Due date: YYYY-MM-DD or "YYYY-MM-DD HH:MM" (local time)
        #[arg(long)]
        due: Option<String>,

        /// Palette color, by name or hex
        #[arg(long)]
        color: Option<String>,
    },

    /// Toggle notes between completed and open
    #[command(alias = "d")]
    Done {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (default-color, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Fill an empty store with sample notes
    Seed,
}
