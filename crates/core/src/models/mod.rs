//! Shared domain models.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// A playable item: an image file name (extension included) or a path
/// supplied through load-more.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap a raw file name or path.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path component of the identifier.
    pub fn file_name(&self) -> &str {
        Path::new(&self.0)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.0)
    }

    /// Expected answer: the file name up to its first `.`.
    ///
    /// `spider.man.jpg` answers to `spider`, not `spider.man`.
    pub fn answer(&self) -> &str {
        self.file_name().split('.').next().unwrap_or_default()
    }

    /// Case-insensitive comparison of a guess with [`Identifier::answer`].
    /// Surrounding whitespace is significant.
    pub fn matches(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.answer().to_lowercase()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Bounding box images are scaled into, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Maximum width.
    pub width: u32,
    /// Maximum height.
    pub height: u32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
        }
    }
}

/// One quiz: a folder of images plus the wording used around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDefinition {
    /// Title shown above the quiz.
    pub title: String,
    /// Folder the initial images are listed from.
    pub folder: PathBuf,
    /// Singular noun for one item (e.g. `character`).
    pub item: String,
    /// Plural noun for the set (e.g. `characters`).
    pub items: String,
}

impl QuizDefinition {
    /// Build a definition from its parts.
    pub fn new(
        title: impl Into<String>,
        folder: impl Into<PathBuf>,
        item: impl Into<String>,
        items: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            folder: folder.into(),
            item: item.into(),
            items: items.into(),
        }
    }

    /// The Marvel character quiz.
    pub fn characters() -> Self {
        Self::new(
            "Marvel Character Guessing Game",
            "marvel_characters",
            "character",
            "characters",
        )
    }

    /// The logo quiz.
    pub fn logos() -> Self {
        Self::new("Logo Guessing Game", "logos", "logo", "logos")
    }

    /// Message shown when the round ends.
    pub fn round_over_message(&self, won: bool) -> String {
        if won {
            format!("You won! All {} identified.", self.items)
        } else {
            format!("All {} used. Try again!", self.items)
        }
    }

    /// Message shown after extra images were merged in.
    pub fn loaded_message(&self) -> String {
        format!("New {} loaded. Guess the next {}!", self.items, self.item)
    }

    /// Label for the load-more action.
    pub fn load_more_label(&self) -> String {
        format!("Load More {}", capitalize(&self.items))
    }

    /// Title of the prompt that picks extra images.
    pub fn picker_title(&self) -> String {
        format!("Select {} Images", capitalize(&self.item))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_stops_at_first_dot() {
        assert_eq!(Identifier::from("IronMan.png").answer(), "IronMan");
        assert_eq!(Identifier::from("spider.man.jpg").answer(), "spider");
        assert_eq!(Identifier::from("noext").answer(), "noext");
    }

    #[test]
    fn answer_uses_final_path_component() {
        let id = Identifier::from("/tmp/some.dir/Thor.jpeg");
        assert_eq!(id.file_name(), "Thor.jpeg");
        assert_eq!(id.answer(), "Thor");
    }

    #[test]
    fn matching_ignores_case_only() {
        let id = Identifier::from("IronMan.png");
        assert!(id.matches("IronMan"));
        assert!(id.matches("ironman"));
        assert!(id.matches("IRONMAN"));
        assert!(!id.matches(" ironman"));
        assert!(!id.matches("ironman.png"));

        let dotted = Identifier::from("spider.man.jpg");
        assert!(dotted.matches("spider"));
        assert!(!dotted.matches("spider.man"));
    }

    #[test]
    fn messages_follow_item_nouns() {
        let quiz = QuizDefinition::logos();
        assert_eq!(quiz.round_over_message(true), "You won! All logos identified.");
        assert_eq!(quiz.round_over_message(false), "All logos used. Try again!");
        assert_eq!(quiz.loaded_message(), "New logos loaded. Guess the next logo!");
        assert_eq!(
            QuizDefinition::characters().load_more_label(),
            "Load More Characters"
        );
        assert_eq!(QuizDefinition::characters().picker_title(), "Select Character Images");
        assert_eq!(quiz.picker_title(), "Select Logo Images");
    }
}
