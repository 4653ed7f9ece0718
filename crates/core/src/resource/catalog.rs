use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::Identifier;

/// File extensions recognised as playable images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Lists a quiz folder and maps identifiers back to files.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    root_path: PathBuf,
}

impl ImageCatalog {
    /// Build a catalog rooted at the given folder.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }

    /// Folder the catalog lists.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Image file names directly inside the folder, sorted by name.
    ///
    /// A missing or unreadable folder yields no identifiers.
    pub fn identifiers(&self) -> Vec<Identifier> {
        match list_images(&self.root_path) {
            Ok(names) => names.into_iter().map(Identifier::from).collect(),
            Err(err) => {
                warn!(folder = %self.root_path.display(), "Failed to list images: {err:#}");
                Vec::new()
            }
        }
    }

    /// Path to open for an identifier.
    ///
    /// Bare file names live in the catalog folder; anything carrying its own
    /// directory (a load-more selection) is used as given.
    pub fn resolve(&self, identifier: &Identifier) -> PathBuf {
        let path = Path::new(identifier.as_str());
        if path.is_absolute() || path.components().count() > 1 {
            path.to_path_buf()
        } else {
            self.root_path.join(path)
        }
    }

    /// Turn load-more entries into identifiers.
    ///
    /// Relative entries are taken from the working directory, the same place a
    /// file picker would start in. See [`Self::expand_selection_in`].
    pub fn expand_selection<I, S>(&self, entries: I) -> Vec<Identifier>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base = env::current_dir().unwrap_or_else(|err| {
            warn!("Working directory unavailable, keeping selections as typed: {err}");
            PathBuf::new()
        });
        self.expand_selection_in(&base, entries)
    }

    /// Turn load-more entries into identifiers, resolving relative ones
    /// against `base`.
    ///
    /// Directories expand to the images they contain. Every other entry is
    /// passed through unchecked; whether it decodes is found out at draw time.
    /// Entries end up as full paths so [`Self::resolve`] never reads them as
    /// names inside the quiz folder.
    pub fn expand_selection_in<I, S>(&self, base: &Path, entries: I) -> Vec<Identifier>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut identifiers = Vec::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }

            let path = base.join(entry);
            if !path.is_dir() {
                identifiers.push(path_identifier(&path));
                continue;
            }

            match list_images(&path) {
                Ok(names) => {
                    debug!(folder = %path.display(), count = names.len(), "Expanded folder");
                    identifiers.extend(names.iter().map(|name| path_identifier(&path.join(name))));
                }
                Err(err) => warn!(folder = %path.display(), "Skipping folder selection: {err:#}"),
            }
        }
        identifiers
    }
}

fn path_identifier(path: &Path) -> Identifier {
    Identifier::from(path.to_string_lossy().into_owned())
}

/// Whether a file name carries one of [`IMAGE_EXTENSIONS`].
pub fn is_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Split a `;`-separated list of paths as typed into the load-more prompt.
pub fn split_selection(input: &str) -> Vec<String> {
    input
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn list_images(folder: &Path) -> Result<Vec<String>> {
    if !folder.is_dir() {
        warn!(folder = %folder.display(), "Image folder missing");
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = fs::read_dir(folder)
        .with_context(|| format!("failed to read {}", folder.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| is_image_name(name))
        .collect();

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_only_images() -> Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        for name in ["Thor.PNG", "hulk.jpg", "loki.Jpeg", "notes.txt", "gif.gif"] {
            fs::write(root.join(name), b"x")?;
        }
        fs::create_dir_all(root.join("nested.png"))?;

        let catalog = ImageCatalog::new(root);
        let names: Vec<String> = catalog
            .identifiers()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(names, vec!["Thor.PNG", "hulk.jpg", "loki.Jpeg"]);
        Ok(())
    }

    #[test]
    fn missing_folder_is_empty() -> Result<()> {
        let temp = tempdir()?;
        let catalog = ImageCatalog::new(temp.path().join("does-not-exist"));
        assert!(catalog.identifiers().is_empty());
        Ok(())
    }

    #[test]
    fn resolves_bare_names_into_folder() {
        let catalog = ImageCatalog::new("logos");
        assert_eq!(
            catalog.resolve(&Identifier::from("acme.png")),
            PathBuf::from("logos").join("acme.png")
        );
        assert_eq!(
            catalog.resolve(&Identifier::from("other/acme.png")),
            PathBuf::from("other/acme.png")
        );
    }

    #[test]
    fn expands_folders_and_passes_files_through() -> Result<()> {
        let temp = tempdir()?;
        let extra = temp.path().join("extra");
        fs::create_dir_all(&extra)?;
        fs::write(extra.join("b.png"), b"x")?;
        fs::write(extra.join("a.jpg"), b"x")?;
        fs::write(extra.join("readme.md"), b"x")?;

        let catalog = ImageCatalog::new(temp.path());
        let extra_entry = extra.to_string_lossy().into_owned();
        let selected = catalog.expand_selection_in(
            temp.path(),
            ["  ", "/nowhere/cap.png", extra_entry.as_str()],
        );

        let expected = vec![
            Identifier::from("/nowhere/cap.png"),
            Identifier::from(extra.join("a.jpg").to_string_lossy().into_owned()),
            Identifier::from(extra.join("b.png").to_string_lossy().into_owned()),
        ];
        assert_eq!(selected, expected);
        assert_eq!(selected[1].answer(), "a");
        Ok(())
    }

    #[test]
    fn relative_selections_resolve_against_base() -> Result<()> {
        let temp = tempdir()?;
        let quiz = temp.path().join("quiz");
        let picked = temp.path().join("picked");
        fs::create_dir_all(&quiz)?;
        fs::create_dir_all(picked.join("more"))?;
        fs::write(quiz.join("thor.png"), b"x")?;
        fs::write(picked.join("thor.png"), b"x")?;
        fs::write(picked.join("more").join("hulk.png"), b"x")?;

        let catalog = ImageCatalog::new(&quiz);
        let selected = catalog.expand_selection_in(&picked, ["thor.png", "more"]);

        let thor = picked.join("thor.png");
        let hulk = picked.join("more").join("hulk.png");
        assert_eq!(selected, vec![path_identifier(&thor), path_identifier(&hulk)]);
        assert_eq!(catalog.resolve(&selected[0]), thor);
        assert_ne!(selected[0], Identifier::from("thor.png"));
        assert_eq!(selected[0].answer(), "thor");
        Ok(())
    }

    #[test]
    fn splits_prompt_input() {
        assert_eq!(
            split_selection(" a.png ;; /tmp/my pics/b.jpg;"),
            vec!["a.png".to_string(), "/tmp/my pics/b.jpg".to_string()]
        );
        assert!(split_selection("   ").is_empty());
    }
}
