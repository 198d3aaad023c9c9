//! Closed note-category taxonomy.
//!
//! Note editing and report composition share this single table: the tag
//! strings stored on note rows, the human-readable section labels, and the
//! per-category takeaway sentence used when a report is synthesized. Tags
//! that do not parse (legacy rows, external imports) are handled by callers
//! through the [`std::str::FromStr`] miss, never by panicking.

use serde::{Deserialize, Serialize};

/// Category tag for a visit note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteCategory {
    /// Degree programs, faculty, class sizes.
    Academics,
    /// Campus grounds and day-to-day atmosphere.
    Campus,
    /// Libraries, labs, athletic and dining facilities.
    Facilities,
    /// Surrounding town, transit, safety.
    Location,
    /// Dorms and residential options.
    Housing,
    /// Tuition, scholarships, aid packages.
    Financial,
    /// Clubs, events, student community.
    Social,
    /// Anything that fits nowhere else.
    #[default]
    General,
}

/// All categories in canonical display order.
pub const ALL_CATEGORIES: [NoteCategory; 8] = [
    NoteCategory::Academics,
    NoteCategory::Campus,
    NoteCategory::Facilities,
    NoteCategory::Location,
    NoteCategory::Housing,
    NoteCategory::Financial,
    NoteCategory::Social,
    NoteCategory::General,
];

impl NoteCategory {
    /// Stored tag string for this category.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Academics => "academics",
            Self::Campus => "campus",
            Self::Facilities => "facilities",
            Self::Location => "location",
            Self::Housing => "housing",
            Self::Financial => "financial",
            Self::Social => "social",
            Self::General => "general",
        }
    }

    /// Human-readable section label for report headings and note editors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Academics => "Academics",
            Self::Campus => "Campus Life",
            Self::Facilities => "Facilities",
            Self::Location => "Location & Area",
            Self::Housing => "Housing",
            Self::Financial => "Financial Aid",
            Self::Social => "Social Scene",
            Self::General => "General Notes",
        }
    }

    /// Fixed takeaway sentence emitted in a report's Key Takeaways section.
    pub fn takeaway(&self) -> &'static str {
        match self {
            Self::Academics => "Academic programs and teaching quality were a focus of this visit",
            Self::Campus => "Campus atmosphere left a distinct impression worth revisiting",
            Self::Facilities => "Facilities were evaluated first-hand during the tour",
            Self::Location => "The surrounding area factored into the overall impression",
            Self::Housing => "Housing options were reviewed on site",
            Self::Financial => "Cost and financial aid considerations were recorded",
            Self::Social => "Student life and social fit were observed directly",
            Self::General => "General observations captured the overall feel of the visit",
        }
    }
}

impl std::fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for NoteCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "academics" => Ok(Self::Academics),
            "campus" => Ok(Self::Campus),
            "facilities" => Ok(Self::Facilities),
            "location" => Ok(Self::Location),
            "housing" => Ok(Self::Housing),
            "financial" => Ok(Self::Financial),
            "social" => Ok(Self::Social),
            "general" => Ok(Self::General),
            _ => Err(format!("Invalid note category: {}", s)),
        }
    }
}
