//! Fixed language categories shown on the landing page.

use serde::Serialize;

/// One browsable language category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageCategory {
    pub id: u8,
    pub language: &'static str,
    pub title: &'static str,
    pub teachers: &'static str,
    pub icon: &'static str,
}

/// Every category, in display order.
pub const LANGUAGE_CATEGORIES: [LanguageCategory; 9] = [
    LanguageCategory {
        id: 1,
        language: "english",
        title: "English tutors",
        teachers: "20,583 teachers",
        icon: "📘",
    },
    LanguageCategory {
        id: 2,
        language: "spanish",
        title: "Spanish tutors",
        teachers: "8,538 teachers",
        icon: "📗",
    },
    LanguageCategory {
        id: 3,
        language: "french",
        title: "French tutors",
        teachers: "6,282 teachers",
        icon: "📙",
    },
    LanguageCategory {
        id: 4,
        language: "german",
        title: "German tutors",
        teachers: "5,112 teachers",
        icon: "📕",
    },
    LanguageCategory {
        id: 5,
        language: "italian",
        title: "Italian tutors",
        teachers: "3,478 teachers",
        icon: "📒",
    },
    LanguageCategory {
        id: 6,
        language: "chinese",
        title: "Chinese tutors",
        teachers: "7,029 teachers",
        icon: "📓",
    },
    LanguageCategory {
        id: 7,
        language: "arabic",
        title: "Arabic tutors",
        teachers: "2,284 teachers",
        icon: "📔",
    },
    LanguageCategory {
        id: 8,
        language: "japanese",
        title: "Japanese tutors",
        teachers: "1,524 teachers",
        icon: "📚",
    },
    LanguageCategory {
        id: 9,
        language: "portuguese",
        title: "Portuguese tutors",
        teachers: "3,311 teachers",
        icon: "📖",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_follow_display_order() {
        for (position, category) in (1_u8..).zip(LANGUAGE_CATEGORIES.iter()) {
            assert_eq!(category.id, position);
        }
    }
}
