use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name colors Twitch hands out to users who never picked one, paired with
/// the theme colors that replace them.
pub const LEGACY_DEFAULT_COLORS: [(&str, &str); 15] = [
    ("#FF0000", "#FF7373"),
    ("#0000FF", "#669EFF"),
    ("#008000", "#3DCC91"),
    ("#B22222", "#F55656"),
    ("#FF7F50", "#FFB366"),
    ("#9ACD32", "#B6D94C"),
    ("#FF4500", "#F29D49"),
    ("#2E8B57", "#43BF4D"),
    ("#DAA520", "#FFC940"),
    ("#D2691E", "#D99E0B"),
    ("#5F9EA0", "#2EE6D6"),
    ("#1E90FF", "#48AFF0"),
    ("#FF69B4", "#FF66A1"),
    ("#8A2BE2", "#AD99FF"),
    ("#00FF7F", "#15B371"),
];

pub const CHATTER_COLORS: [&str; 12] = [
    "#FF7373", "#F29D49", "#FFC940", "#D1F26D", "#3DCC91", "#2EE6D6", "#48AFF0", "#669EFF",
    "#AD99FF", "#C274C2", "#FF66A1", "#C99765",
];

pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Replacement table for protocol default colors. Keys are matched
/// ignoring ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct DefaultColorMap {
    colors: HashMap<String, String>,
}

impl DefaultColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, default_color: &str, replacement: &str) {
        self.colors
            .insert(default_color.to_ascii_uppercase(), replacement.to_string());
    }

    pub fn replacement(&self, color: &str) -> Option<&str> {
        self.colors
            .get(&color.to_ascii_uppercase())
            .map(String::as_str)
    }

    pub fn is_default(&self, color: &str) -> bool {
        self.colors.contains_key(&color.to_ascii_uppercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn builtin() -> Self {
        let mut map = Self::new();
        for (default_color, replacement) in LEGACY_DEFAULT_COLORS {
            map.insert(default_color, replacement);
        }
        map
    }
}

impl From<HashMap<String, String>> for DefaultColorMap {
    fn from(colors: HashMap<String, String>) -> Self {
        let mut map = Self::new();
        for (default_color, replacement) in &colors {
            map.insert(default_color, replacement);
        }
        map
    }
}

/// Ordered set of colors handed out to chatters without one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new(colors: Vec<String>) -> Self {
        Palette(colors)
    }

    pub fn builtin() -> Self {
        Palette(CHATTER_COLORS.iter().map(|c| c.to_string()).collect())
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, color: &str) -> bool {
        self.0.iter().any(|c| c == color)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.0.choose(rng).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn lookups_ignore_case() {
        let map = DefaultColorMap::builtin();
        assert_eq!(map.replacement("#ff0000"), Some("#FF7373"));
        assert_eq!(map.replacement("#FF0000"), Some("#FF7373"));
        assert!(map.is_default("#1e90ff"));
        assert_eq!(map.replacement("#123456"), None);
    }

    #[test]
    fn builtin_tables_are_well_formed() {
        assert_eq!(DefaultColorMap::builtin().len(), LEGACY_DEFAULT_COLORS.len());
        for (default_color, replacement) in LEGACY_DEFAULT_COLORS {
            assert!(is_hex_color(default_color), "{default_color}");
            assert!(is_hex_color(replacement), "{replacement}");
        }
        assert!(Palette::builtin().colors().iter().all(|c| is_hex_color(c)));
    }

    #[test]
    fn hex_color_shape() {
        assert!(is_hex_color("#a1B2c3"));
        assert!(!is_hex_color("a1B2c3"));
        assert!(!is_hex_color("#a1B2c"));
        assert!(!is_hex_color("#GGGGGG"));
        assert!(!is_hex_color("#ÿÿÿ"));
    }

    #[test]
    fn choose_stays_inside_palette() {
        let palette = Palette::builtin();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let color = palette.choose(&mut rng).unwrap();
            assert!(palette.contains(color));
        }
        assert_eq!(Palette::default().choose(&mut rng), None);
    }
}
