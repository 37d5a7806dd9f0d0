use crate::errors::ChatterError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use twitch_irc::message::PrivmsgMessage;
use uuid::Uuid;

/// Per-message user state as delivered by the chat feed.
///
/// Only the fields a chatter is derived from are kept; everything else the
/// feed sends (`badges-raw`, `emotes`, `tmi-sent-ts`, ...) is dropped while
/// deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUserState {
    #[serde(rename = "display-name")]
    pub display_name: String,
    pub username: String,
    #[serde(rename = "user-id")]
    pub user_id: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub color: Option<String>,
    #[serde(default, rename = "mod")]
    pub is_mod: bool,
    #[serde(default)]
    pub badges: Option<HashMap<String, String>>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let color = Option::<String>::deserialize(deserializer)?;
    Ok(color.filter(|c| !c.is_empty()))
}

impl RawUserState {
    pub fn from_json(json: &str) -> Result<Self, ChatterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// State for a user known only by name. Gets a fresh identifier on
    /// every call.
    pub fn potential(username: &str) -> Self {
        RawUserState {
            display_name: username.to_string(),
            username: username.to_lowercase(),
            user_id: Uuid::new_v4().to_string(),
            color: None,
            is_mod: false,
            badges: None,
        }
    }

    pub fn has_badge(&self, name: &str) -> bool {
        self.badges
            .as_ref()
            .is_some_and(|badges| badges.contains_key(name))
    }
}

impl From<&PrivmsgMessage> for RawUserState {
    fn from(msg: &PrivmsgMessage) -> Self {
        let badges: HashMap<String, String> = msg
            .badges
            .iter()
            .map(|badge| (badge.name.clone(), badge.version.clone()))
            .collect();

        RawUserState {
            display_name: msg.sender.name.clone(),
            username: msg.sender.login.clone(),
            user_id: msg.sender.id.clone(),
            color: msg
                .name_color
                .as_ref()
                .map(|c| format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)),
            is_mod: badges.contains_key("moderator"),
            badges: if badges.is_empty() { None } else { Some(badges) },
        }
    }
}
