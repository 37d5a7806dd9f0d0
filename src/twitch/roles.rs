use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::chatter::Chatter;
use crate::errors::ChatterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatterRole {
    Viewer,
    Moderator,
    Broadcaster,
}

impl Default for ChatterRole {
    fn default() -> Self {
        ChatterRole::Viewer
    }
}

impl ChatterRole {
    pub fn of(chatter: &Chatter) -> Self {
        if chatter.is_broadcaster() {
            ChatterRole::Broadcaster
        } else if chatter.is_mod() {
            ChatterRole::Moderator
        } else {
            ChatterRole::Viewer
        }
    }

    fn rank(self) -> u8 {
        match self {
            ChatterRole::Viewer => 0,
            ChatterRole::Moderator => 1,
            ChatterRole::Broadcaster => 2,
        }
    }
}

impl PartialOrd for ChatterRole {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChatterRole {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for ChatterRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChatterRole::Viewer => write!(f, "Viewer"),
            ChatterRole::Moderator => write!(f, "Moderator"),
            ChatterRole::Broadcaster => write!(f, "Broadcaster"),
        }
    }
}

impl FromStr for ChatterRole {
    type Err = ChatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "broadcaster" => Ok(ChatterRole::Broadcaster),
            "moderator" | "mod" => Ok(ChatterRole::Moderator),
            "viewer" => Ok(ChatterRole::Viewer),
            _ => Err(ChatterError::UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::twitch::RawUserState;
    use std::collections::HashMap;

    fn chatter(is_mod: bool, broadcaster: bool) -> Chatter {
        let badges = broadcaster.then(|| HashMap::from([("broadcaster".to_string(), "1".to_string())]));
        let state = RawUserState {
            display_name: "Bob".to_string(),
            username: "bob".to_string(),
            user_id: "1".to_string(),
            color: None,
            is_mod,
            badges,
        };
        Chatter::new(state, &Theme::default())
    }

    #[test]
    fn roles_are_ordered_by_privilege() {
        assert!(ChatterRole::Broadcaster > ChatterRole::Moderator);
        assert!(ChatterRole::Moderator > ChatterRole::Viewer);
        assert_eq!(ChatterRole::default(), ChatterRole::Viewer);
    }

    #[test]
    fn role_follows_chatter_flags() {
        assert_eq!(ChatterRole::of(&chatter(false, false)), ChatterRole::Viewer);
        assert_eq!(ChatterRole::of(&chatter(true, false)), ChatterRole::Moderator);
        assert_eq!(ChatterRole::of(&chatter(false, true)), ChatterRole::Broadcaster);
    }

    #[test]
    fn parses_and_displays() {
        assert_eq!("MOD".parse::<ChatterRole>().unwrap(), ChatterRole::Moderator);
        assert_eq!("Broadcaster".parse::<ChatterRole>().unwrap().to_string(), "Broadcaster");
        assert!(matches!("vip".parse::<ChatterRole>(), Err(ChatterError::UnknownRole(_))));
    }
}
