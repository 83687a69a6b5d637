//! Static choice catalogs and the fixed learning roadmap.
//!
//! Pure data defined at startup. Ids are unique within each catalog; labels
//! are what the buttons show.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::util::icons::Icon;

/// A selectable labeled option with an associated glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// One course card on the roadmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourseCard {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub difficulty: &'static str,
}

/// One achievement badge under the roadmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub icon: Icon,
    pub label: &'static str,
}

/// Which selection a catalog feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Catalog {
    UserTypes,
    Degrees,
    Fields,
}

impl Catalog {
    #[must_use]
    pub fn items(self) -> &'static [ChoiceItem] {
        match self {
            Self::UserTypes => &USER_TYPES,
            Self::Degrees => &DEGREES,
            Self::Fields => &FIELDS,
        }
    }

    /// Look up an item by id.
    #[must_use]
    pub fn find(self, id: &str) -> Option<&'static ChoiceItem> {
        self.items().iter().find(|item| item.id == id)
    }

    /// Prompt shown above the grid.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::UserTypes => "Who are you?",
            Self::Degrees => "What's your background?",
            Self::Fields => "Pick your field",
        }
    }
}

pub const USER_TYPES: [ChoiceItem; 4] = [
    ChoiceItem { id: "student", label: "Student", icon: Icon::GraduationCap },
    ChoiceItem { id: "professional", label: "Professional", icon: Icon::Briefcase },
    ChoiceItem { id: "career-changer", label: "Career Changer", icon: Icon::ArrowRight },
    ChoiceItem { id: "hobbyist", label: "Hobbyist", icon: Icon::Star },
];

pub const DEGREES: [ChoiceItem; 4] = [
    ChoiceItem { id: "bachelors", label: "Bachelor's Degree", icon: Icon::Book },
    ChoiceItem { id: "masters", label: "Master's Degree", icon: Icon::Trophy },
    ChoiceItem { id: "bootcamp", label: "Bootcamp", icon: Icon::Star },
    ChoiceItem { id: "self-taught", label: "Self-Taught", icon: Icon::Book },
];

pub const FIELDS: [ChoiceItem; 4] = [
    ChoiceItem { id: "software", label: "Software Development", icon: Icon::Gamepad },
    ChoiceItem { id: "data", label: "Data Science", icon: Icon::Target },
    ChoiceItem { id: "cyber", label: "Cybersecurity", icon: Icon::Sword },
    ChoiceItem { id: "business", label: "Business Analytics", icon: Icon::Users },
];

pub const ROADMAP: [CourseCard; 3] = [
    CourseCard {
        title: "Foundations",
        description: "Master the core concepts and fundamentals",
        duration: "8 weeks",
        difficulty: "Beginner",
    },
    CourseCard {
        title: "Advanced Techniques",
        description: "Deep dive into advanced topics and methodologies",
        duration: "12 weeks",
        difficulty: "Intermediate",
    },
    CourseCard {
        title: "Expert Level",
        description: "Become an expert with real-world projects",
        duration: "16 weeks",
        difficulty: "Advanced",
    },
];

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement { icon: Icon::Trophy, label: "Complete Foundations" },
    Achievement { icon: Icon::Star, label: "Master Advanced Topics" },
    Achievement { icon: Icon::Book, label: "Build Portfolio" },
];
