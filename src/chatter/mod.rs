use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::theme::{Palette, Theme};
use crate::twitch::{ChatterRole, RawUserState};

/// User id the feed reports for messages sent by the local user.
pub const SELF_USER_ID: &str = "self";

pub const BROADCASTER_BADGE: &str = "broadcaster";

/// A chat participant derived from a single user-state payload.
///
/// Everything except the color and the ignored flag is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chatter {
    id: String,
    user_name: String,
    display_name: String,
    color: Option<String>,
    is_mod: bool,
    is_broadcaster: bool,
    is_self: bool,
    show_user_name: bool,
    ignored: bool,
}

/// Snapshot handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedChatter {
    pub color: Option<String>,
    pub display_name: String,
    pub id: String,
    pub ignored: bool,
    pub is_broadcaster: bool,
    pub is_mod: bool,
    pub is_self: bool,
    pub show_user_name: bool,
    pub user_name: String,
}

impl Chatter {
    pub fn new(user_state: RawUserState, theme: &Theme) -> Self {
        let is_broadcaster = user_state.has_badge(BROADCASTER_BADGE);
        let user_name = user_state.username.to_lowercase();
        let show_user_name = user_state.display_name.to_lowercase() != user_name;
        let color = theme.sanitize_color(user_state.color.as_deref());

        trace!(
            "Chatter {} ({}) color {:?} -> {:?}",
            user_name,
            user_state.user_id,
            user_state.color,
            color
        );

        Chatter {
            is_self: user_state.user_id == SELF_USER_ID,
            id: user_state.user_id,
            user_name,
            display_name: user_state.display_name,
            color,
            is_mod: user_state.is_mod || is_broadcaster,
            is_broadcaster,
            show_user_name,
            ignored: false,
        }
    }

    /// Placeholder for a user known only by name, e.g. an ignore-list entry
    /// or a mention target. Never deduplicated: each call gets a new id.
    pub fn potential(username: &str, theme: &Theme) -> Self {
        let chatter = Self::new(RawUserState::potential(username), theme);
        debug!("Created potential chatter {} ({})", chatter.user_name, chatter.id);
        chatter
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn is_mod(&self) -> bool {
        self.is_mod
    }

    pub fn is_broadcaster(&self) -> bool {
        self.is_broadcaster
    }

    pub fn is_self(&self) -> bool {
        self.is_self
    }

    pub fn show_user_name(&self) -> bool {
        self.show_user_name
    }

    pub fn ignored(&self) -> bool {
        self.ignored
    }

    pub fn set_ignored(&mut self, ignored: bool) {
        self.ignored = ignored;
    }

    pub fn role(&self) -> ChatterRole {
        ChatterRole::of(self)
    }

    /// Replaces the color with a random palette color. An empty palette
    /// clears it.
    pub fn generate_random_color(&mut self, palette: &Palette) -> Option<String> {
        self.generate_random_color_with(&mut rand::thread_rng(), palette)
    }

    pub fn generate_random_color_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        palette: &Palette,
    ) -> Option<String> {
        self.color = palette.choose(rng).map(str::to_string);
        debug!("Assigned random color {:?} to {}", self.color, self.user_name);
        self.color.clone()
    }

    pub fn serialize(&self) -> SerializedChatter {
        SerializedChatter {
            color: self.color.clone(),
            display_name: self.display_name.clone(),
            id: self.id.clone(),
            ignored: self.ignored,
            is_broadcaster: self.is_broadcaster,
            is_mod: self.is_mod,
            is_self: self.is_self,
            show_user_name: self.show_user_name,
            user_name: self.user_name.clone(),
        }
    }
}

impl From<&Chatter> for SerializedChatter {
    fn from(chatter: &Chatter) -> Self {
        chatter.serialize()
    }
}
