use serde::Serialize;

/// Grouping of event blocks, used for colouring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Details,
    BridePreDress,
    BrideDressOn,
    Bride,
    Narration,
    Groom,
    Ceremony,
    GroupPhotos,
    BrideAndGroom,
    Reception,
    Evening,
    Other,
}

/// Label prefixes in matching order: the more specific "Bride ..." forms
/// must be tested before "Bride:".
const PREFIXES: &[(&str, Category)] = &[
    ("bride (pre-dress)", Category::BridePreDress),
    ("bride (dress on)", Category::BrideDressOn),
    ("bride & groom:", Category::BrideAndGroom),
    ("bride:", Category::Bride),
    ("groom:", Category::Groom),
    ("ceremony:", Category::Ceremony),
    ("reception:", Category::Reception),
    ("group photos:", Category::GroupPhotos),
    ("details:", Category::Details),
    ("evening:", Category::Evening),
    ("narration:", Category::Narration),
];

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Details => "Details",
            Category::BridePreDress => "Bride (Pre-Dress)",
            Category::BrideDressOn => "Bride (Dress On)",
            Category::Bride => "Bride",
            Category::Narration => "Narration",
            Category::Groom => "Groom",
            Category::Ceremony => "Ceremony",
            Category::GroupPhotos => "Group Photos",
            Category::BrideAndGroom => "Bride & Groom",
            Category::Reception => "Reception",
            Category::Evening => "Evening",
            Category::Other => "Other",
        }
    }

    /// Background colour of the palette card, as `#rrggbb`.
    pub fn hex(&self) -> &'static str {
        match self {
            Category::BridePreDress => "#ffe4e1",
            Category::BrideDressOn => "#ffccd5",
            Category::BrideAndGroom => "#f5e1ff",
            Category::Bride => "#fcd5ce",
            Category::Groom => "#d0f4de",
            Category::Ceremony => "#f0efeb",
            Category::Reception => "#e0f7fa",
            Category::GroupPhotos => "#fde2e4",
            Category::Details => "#fff1e6",
            Category::Evening => "#ff8100",
            Category::Narration | Category::Other => "#ffffff",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.hex().trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(255);
        (channel(0), channel(2), channel(4))
    }

    /// Classify a free-text event label by its prefix (case-insensitive).
    ///
    /// Catalog blocks carry their category explicitly; this is only for
    /// labels typed by hand into a row.
    pub fn from_label(label: &str) -> Self {
        let lower = label.trim_start().to_lowercase();
        PREFIXES
            .iter()
            .find(|(prefix, _)| lower.starts_with(prefix))
            .map(|(_, c)| *c)
            .unwrap_or(Category::Other)
    }

    /// Lookup by user-facing name (`ceremony`, `group-photos`, `Bride & Groom`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        ALL.iter().copied().find(|c| normalize(c.name()) == wanted)
    }
}

pub const ALL: [Category; 12] = [
    Category::Details,
    Category::BridePreDress,
    Category::BrideDressOn,
    Category::Bride,
    Category::Narration,
    Category::Groom,
    Category::Ceremony,
    Category::GroupPhotos,
    Category::BrideAndGroom,
    Category::Reception,
    Category::Evening,
    Category::Other,
];

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '&')
        .collect::<String>()
        .to_lowercase()
}
