//! Color tags and their on-screen indicator colors

use std::collections::HashMap;

use csscolorparser::Color;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The fixed palette a task can be tagged with.
///
/// Persisted data may contain anything (older versions of the storage format did not constrain
/// this field), so unknown values deserialize to [`TaskColor::Neutral`] instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskColor {
    Blue,
    Purple,
    Pink,
    Green,
    Yellow,
    /// Fallback for unset or unrecognized color tags
    #[serde(other)]
    Neutral,
}

impl Default for TaskColor {
    fn default() -> Self {
        TaskColor::Neutral
    }
}

/// The indicator color of every tag. Tags not in this table fall back to a neutral gray.
static INDICATORS: Lazy<HashMap<TaskColor, Color>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (tag, hex) in &[
        (TaskColor::Blue,   "#3b82f6"),
        (TaskColor::Purple, "#8b5cf6"),
        (TaskColor::Pink,   "#ec4899"),
        (TaskColor::Green,  "#10b981"),
        (TaskColor::Yellow, "#f59e0b"),
    ] {
        map.insert(*tag, csscolorparser::parse(hex).unwrap(/* this cannot fail, these are valid hex strings */));
    }
    map
});

static NEUTRAL: Lazy<Color> = Lazy::new(||
    csscolorparser::parse("#9ca3af").unwrap(/* this cannot fail, this is a valid hex string */)
);

impl TaskColor {
    /// The color a calendar indicator dot (or a task-list accent) for this tag should have
    pub fn indicator(&self) -> Color {
        INDICATORS.get(self).unwrap_or(&NEUTRAL).clone()
    }

    /// Same as [`TaskColor::indicator`], as a `#rrggbb` string
    pub fn indicator_hex(&self) -> String {
        self.indicator().to_hex_string()
    }
}
