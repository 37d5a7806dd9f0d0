use chatter::config::Config;
use chatter::logging::setup_logging;
use chatter::{process_user_states, write_chatter, Chatter, FeedOptions, LogLevel, Theme};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chatter", version, about = "Turns chat user-state payloads into chatter snapshots")]
struct Cli {
    /// Newline-delimited user-state JSON. Reads stdin when omitted.
    input: Option<PathBuf>,

    #[arg(long, default_value = Config::CONFIG_PATH)]
    config: PathBuf,

    /// Theme file, overriding the one named in the config.
    #[arg(long)]
    theme: Option<PathBuf>,

    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Give chatters without a color a random palette color.
    #[arg(long)]
    random_colors: bool,

    /// Print placeholder chatters for these usernames instead of reading a feed.
    #[arg(long = "potential", value_name = "USERNAME")]
    potential: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    setup_logging(cli.log_level.unwrap_or(config.log_level))?;

    let theme = match &cli.theme {
        Some(path) => Theme::load(path)?,
        None => config.theme()?,
    };
    let options = FeedOptions {
        random_colors: cli.random_colors,
    };
    let stdout = io::stdout().lock();

    if !cli.potential.is_empty() {
        let mut stdout = stdout;
        for username in &cli.potential {
            let mut chatter = Chatter::potential(username, &theme);
            if options.random_colors {
                chatter.generate_random_color(theme.palette());
            }
            write_chatter(&mut stdout, &chatter)?;
        }
        return Ok(());
    }

    let written = match &cli.input {
        Some(path) => {
            info!("Reading user states from {:?}", path);
            process_user_states(BufReader::new(File::open(path)?), stdout, &theme, options)?
        }
        None => process_user_states(io::stdin().lock(), stdout, &theme, options)?,
    };
    info!("Processed {} chatters", written);

    Ok(())
}
