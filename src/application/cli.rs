use crate::application::{Config, JournalApp, TextRenderer};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dayjournal")]
#[command(about = "A one-entry-per-day journal")]
#[command(version)]
pub struct Cli {
    /// Journal directory (defaults to $DAYJOURNAL_DIR or the local data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip write hooks such as the write log
    #[arg(long, global = true)]
    pub no_hooks: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's status (default)
    Status,
    /// Write today's entry (opens $EDITOR unless --message is given)
    Write {
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Change today's entry (opens $EDITOR unless --message is given)
    Edit {
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Show the entry for a date (YYYY-MM-DD)
    Show { date: String },
    /// List past entries, newest first
    History {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Save, show or clear the draft
    Draft {
        text: Option<String>,

        #[arg(long, conflicts_with = "text")]
        clear: bool,
    },
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        init_logging(cli.verbose);

        let mut config = Config::from_env();
        if let Some(dir) = cli.dir {
            config = Config::with_journal_dir(dir, config.editor);
        }
        log::debug!("Using journal directory {}", config.journal_dir.display());

        let mut app = if cli.no_hooks {
            JournalApp::without_plugins(config)?
        } else {
            JournalApp::with_default_plugins(config)?
        };
        let renderer = TextRenderer::new();
        let today = app.journal.today();

        match cli.command.unwrap_or(Commands::Status) {
            Commands::Status => {
                print!("{}", renderer.render_day(&app.status()?, today));
            }
            Commands::Write { message } => {
                let entry = app.write_today(message)?;
                println!("Entry saved for {}", entry.date);
            }
            Commands::Edit { message } => {
                let entry = app.edit_today(message)?;
                println!("Entry updated for {}", entry.date);
            }
            Commands::Show { date } => {
                let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
                print!("{}", renderer.render_day(&app.show(date)?, today));
            }
            Commands::History { limit } => {
                print!("{}", renderer.render_history(&app.history(limit)?));
            }
            Commands::Draft { text, clear } => {
                if clear {
                    app.clear_draft()?;
                    println!("Draft cleared");
                } else if let Some(text) = text {
                    app.save_draft(&text)?;
                    println!("Draft saved");
                } else {
                    match app.load_draft()? {
                        Some(draft) => println!("{}", draft),
                        None => println!("No draft"),
                    }
                }
            }
        }

        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
