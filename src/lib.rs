pub mod chatter;
pub mod config;
pub mod errors;
pub mod logging;
pub mod moderation;
pub mod theme;
pub mod twitch;

pub use chatter::{Chatter, SerializedChatter};
pub use errors::ChatterError;
pub use logging::LogLevel;
pub use theme::{Palette, Theme};
pub use twitch::{ChatterRole, RawUserState};

use log::{debug, warn};
use std::io::{BufRead, Write};

/// Feed options for [`process_user_states`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedOptions {
    /// Give chatters without a protocol color a random palette color.
    pub random_colors: bool,
}

/// Reads newline-delimited user-state JSON and writes one serialized
/// chatter per line. Lines that fail to parse are logged and skipped.
/// Returns the number of chatters written.
pub fn process_user_states<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    theme: &Theme,
    options: FeedOptions,
) -> Result<usize, ChatterError> {
    let mut written = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let user_state = match RawUserState::from_json(&line) {
            Ok(user_state) => user_state,
            Err(e) => {
                warn!("Skipping malformed user state on line {}: {}", index + 1, e);
                continue;
            }
        };

        let mut chatter = Chatter::new(user_state, theme);
        if options.random_colors && chatter.color().is_none() {
            chatter.generate_random_color(theme.palette());
        }

        write_chatter(&mut writer, &chatter)?;
        written += 1;
    }

    debug!("Wrote {} chatters", written);
    Ok(written)
}

pub fn write_chatter<W: Write>(mut writer: W, chatter: &Chatter) -> Result<(), ChatterError> {
    serde_json::to_writer(&mut writer, &chatter.serialize())?;
    writeln!(writer)?;
    Ok(())
}
