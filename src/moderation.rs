use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ChatterError;

/// A slow mode delay the moderation menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SlowModeDuration(u32);

impl SlowModeDuration {
    pub const ALL: [SlowModeDuration; 7] = [
        SlowModeDuration(3),
        SlowModeDuration(5),
        SlowModeDuration(10),
        SlowModeDuration(20),
        SlowModeDuration(30),
        SlowModeDuration(60),
        SlowModeDuration(120),
    ];

    pub fn seconds(self) -> u32 {
        self.0
    }

    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 second".to_string()
        } else {
            format!("{} seconds", self.0)
        }
    }
}

impl TryFrom<u32> for SlowModeDuration {
    type Error = ChatterError;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|duration| duration.0 == seconds)
            .ok_or(ChatterError::UnsupportedSlowModeDuration(seconds))
    }
}

impl From<SlowModeDuration> for u32 {
    fn from(duration: SlowModeDuration) -> Self {
        duration.0
    }
}

impl fmt::Display for SlowModeDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Chat modes of the current room, as last reported by the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomState {
    #[serde(default)]
    pub r9k: bool,
    #[serde(default)]
    pub slow_duration: Option<u32>,
    #[serde(default)]
    pub followers_only: bool,
    #[serde(default)]
    pub subs_only: bool,
    #[serde(default)]
    pub emote_only: bool,
}

impl RoomState {
    pub fn is_slow(&self) -> bool {
        self.slow_duration.is_some_and(|seconds| seconds > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    ToggleR9k,
    ToggleSlowMode(Option<SlowModeDuration>),
    ToggleFollowersOnly,
    ToggleSubsOnly,
    ToggleEmoteOnly,
    ClearChat,
    OpenModView,
}

/// Callbacks a presentation layer wires to the moderation menu.
pub trait ModerationActions {
    fn toggle_r9k(&mut self);
    fn toggle_slow_mode(&mut self, duration: Option<SlowModeDuration>);
    fn toggle_followers_only(&mut self);
    fn toggle_subs_only(&mut self);
    fn toggle_emote_only(&mut self);
    fn clear_chat(&mut self);
    fn open_mod_view(&mut self);
}

impl ModerationAction {
    pub fn dispatch<A: ModerationActions + ?Sized>(self, actions: &mut A) {
        match self {
            ModerationAction::ToggleR9k => actions.toggle_r9k(),
            ModerationAction::ToggleSlowMode(duration) => actions.toggle_slow_mode(duration),
            ModerationAction::ToggleFollowersOnly => actions.toggle_followers_only(),
            ModerationAction::ToggleSubsOnly => actions.toggle_subs_only(),
            ModerationAction::ToggleEmoteOnly => actions.toggle_emote_only(),
            ModerationAction::ClearChat => actions.clear_chat(),
            ModerationAction::OpenModView => actions.open_mod_view(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Divider {
        title: &'static str,
    },
    Item {
        label: String,
        checked: bool,
        action: ModerationAction,
        children: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    fn item(label: &str, checked: bool, action: ModerationAction) -> Self {
        MenuEntry::Item {
            label: label.to_string(),
            checked,
            action,
            children: Vec::new(),
        }
    }
}

/// Entries of the moderation menu, or `None` when the menu is hidden
/// (room state unknown, or the local user is not a moderator).
pub fn moderation_menu(room_state: Option<&RoomState>, is_mod: bool) -> Option<Vec<MenuEntry>> {
    let room_state = room_state.filter(|_| is_mod)?;

    let slow_mode_entries = std::iter::once(MenuEntry::Divider { title: "Slow mode" })
        .chain(SlowModeDuration::ALL.into_iter().map(|duration| MenuEntry::Item {
            label: duration.label(),
            checked: room_state.slow_duration == Some(duration.seconds()),
            action: ModerationAction::ToggleSlowMode(Some(duration)),
            children: Vec::new(),
        }))
        .collect();

    Some(vec![
        MenuEntry::Divider { title: "Mode" },
        MenuEntry::item("Unique chat", room_state.r9k, ModerationAction::ToggleR9k),
        MenuEntry::Item {
            label: "Slow mode".to_string(),
            checked: room_state.is_slow(),
            action: ModerationAction::ToggleSlowMode(None),
            children: slow_mode_entries,
        },
        MenuEntry::item(
            "Follower-only",
            room_state.followers_only,
            ModerationAction::ToggleFollowersOnly,
        ),
        MenuEntry::item(
            "Subscribers-only",
            room_state.subs_only,
            ModerationAction::ToggleSubsOnly,
        ),
        MenuEntry::item("Emote-only", room_state.emote_only, ModerationAction::ToggleEmoteOnly),
        MenuEntry::Divider { title: "Moderation" },
        MenuEntry::item("Clear chat", false, ModerationAction::ClearChat),
        MenuEntry::item("Open Mod View", false, ModerationAction::OpenModView),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl ModerationActions for Recorder {
        fn toggle_r9k(&mut self) {
            self.0.push("r9k".into());
        }
        fn toggle_slow_mode(&mut self, duration: Option<SlowModeDuration>) {
            self.0.push(format!("slow {:?}", duration.map(SlowModeDuration::seconds)));
        }
        fn toggle_followers_only(&mut self) {
            self.0.push("followers".into());
        }
        fn toggle_subs_only(&mut self) {
            self.0.push("subs".into());
        }
        fn toggle_emote_only(&mut self) {
            self.0.push("emotes".into());
        }
        fn clear_chat(&mut self) {
            self.0.push("clear".into());
        }
        fn open_mod_view(&mut self) {
            self.0.push("mod view".into());
        }
    }

    fn labels(entries: &[MenuEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| match entry {
                MenuEntry::Divider { title } => format!("-- {title}"),
                MenuEntry::Item { label, checked, .. } => {
                    format!("{}{label}", if *checked { "[x] " } else { "" })
                }
            })
            .collect()
    }

    #[test]
    fn only_listed_durations_are_accepted() {
        assert_eq!(SlowModeDuration::try_from(30).unwrap().seconds(), 30);
        assert!(matches!(
            SlowModeDuration::try_from(4),
            Err(ChatterError::UnsupportedSlowModeDuration(4))
        ));
        assert_eq!(SlowModeDuration::ALL[0].label(), "3 seconds");
        assert_eq!(SlowModeDuration::ALL[6].to_string(), "120 seconds");
    }

    #[test]
    fn durations_deserialize_from_seconds() {
        let duration: SlowModeDuration = serde_json::from_str("60").unwrap();
        assert_eq!(u32::from(duration), 60);
        assert!(serde_json::from_str::<SlowModeDuration>("61").is_err());
    }

    #[test]
    fn menu_hidden_without_room_state_or_mod() {
        let room_state = RoomState::default();
        assert_eq!(moderation_menu(None, true), None);
        assert_eq!(moderation_menu(Some(&room_state), false), None);
        assert!(moderation_menu(Some(&room_state), true).is_some());
    }

    #[test]
    fn menu_reflects_room_state() {
        let room_state = RoomState {
            r9k: true,
            slow_duration: Some(10),
            emote_only: true,
            ..RoomState::default()
        };
        let menu = moderation_menu(Some(&room_state), true).unwrap();

        assert_eq!(
            labels(&menu),
            [
                "-- Mode",
                "[x] Unique chat",
                "[x] Slow mode",
                "Follower-only",
                "Subscribers-only",
                "[x] Emote-only",
                "-- Moderation",
                "Clear chat",
                "Open Mod View",
            ]
        );

        let MenuEntry::Item { children, .. } = &menu[2] else {
            panic!("slow mode entry should be an item");
        };
        assert_eq!(
            labels(children),
            [
                "-- Slow mode",
                "3 seconds",
                "5 seconds",
                "[x] 10 seconds",
                "20 seconds",
                "30 seconds",
                "60 seconds",
                "120 seconds",
            ]
        );
    }

    #[test]
    fn menu_actions_reach_callbacks() {
        let menu = moderation_menu(Some(&RoomState::default()), true).unwrap();
        let mut recorder = Recorder::default();

        for entry in &menu {
            if let MenuEntry::Item { action, children, .. } = entry {
                action.dispatch(&mut recorder);
                for child in children {
                    if let MenuEntry::Item { action, .. } = child {
                        action.dispatch(&mut recorder);
                    }
                }
            }
        }

        assert_eq!(recorder.0[0], "r9k");
        assert_eq!(recorder.0[1], "slow None");
        assert_eq!(recorder.0[2], "slow Some(3)");
        assert_eq!(recorder.0[8], "slow Some(120)");
        assert_eq!(&recorder.0[9..], ["followers", "subs", "emotes", "clear", "mod view"]);
    }
}
