use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use iqnav_util::{NavConfig, default_log_path};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Adaptive navigation for the IQ test and survey terminal app.
#[derive(Parser, Debug)]
#[command(name = "iqnav", version, about)]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
struct Overrides {
    /// Cells reserved for the "More" trigger
    #[arg(long)]
    reserved_width: Option<u16>,

    /// Cells between inline entries
    #[arg(long)]
    spacing: Option<u16>,

    /// Disable width observation and render every entry inline
    #[arg(long)]
    no_observe: bool,

    /// Quiz time limit in minutes
    #[arg(long)]
    quiz_minutes: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print how many entries fit inline for the given widths
    Pack {
        /// Width of the navigation container
        #[arg(long)]
        container: u32,

        /// Width reserved for the overflow trigger
        #[arg(long, default_value_t = 0)]
        reserved: u32,

        /// Gap between consecutive inline entries
        #[arg(long, default_value_t = 0)]
        spacing: u32,

        /// Comma separated entry widths; 0 marks an unmeasured entry
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        widths: Vec<u32>,
    },
}

impl Overrides {
    fn apply(self, config: &mut NavConfig) {
        if let Some(reserved_width) = self.reserved_width {
            config.reserved_width = reserved_width;
        }
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }
        if self.no_observe {
            config.observe_layout = false;
        }
        if let Some(quiz_minutes) = self.quiz_minutes {
            config.quiz_minutes = quiz_minutes;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        config,
        overrides,
        command,
    } = Cli::parse();
    init_tracing();

    match command {
        Some(Command::Pack {
            container,
            reserved,
            spacing,
            widths,
        }) => {
            print_pack(container, reserved, spacing, &widths);
            Ok(())
        }
        None => {
            let mut nav_config = NavConfig::load(config.as_deref()).context("failed to load config")?;
            overrides.apply(&mut nav_config);
            info!(?nav_config, "Starting TUI");
            iqnav_tui::run(nav_config).await
        }
    }
}

fn print_pack(container: u32, reserved: u32, spacing: u32, widths: &[u32]) {
    let visible = iqnav_tui::visible_count(widths, container, reserved, spacing);
    let overflow = widths.len() - visible;
    println!("visible: {visible}");
    println!("overflow: {overflow}");
    if visible > 0 {
        println!("inline: {:?}", &widths[..visible]);
    }
    if overflow > 0 {
        println!("menu: {:?}", &widths[visible..]);
    }
}

/// Logs go to a file because the TUI owns the terminal.
///
/// When the file cannot be opened, one line goes to stderr before the TUI
/// starts and the session runs without logs.
fn init_tracing() {
    let path = default_log_path();
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("iqnav: logging disabled, cannot open {}: {error}", path.display());
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .try_init();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
