use tracing::{info, warn};

use crate::{
    models::{Bounds, QuizDefinition},
    resource::{load_picture, ImageCatalog, Picture},
    round::{DrawResult, GuessResult, RoundEngine, RoundError, RoundPhase},
};

use super::models::{GuessOutcome, Presentation, SessionView};

/// One running quiz.
///
/// Every draw goes through the image loader; items whose image cannot be
/// decoded are skipped without surfacing an error.
#[derive(Debug)]
pub struct QuizSession {
    definition: QuizDefinition,
    catalog: ImageCatalog,
    engine: RoundEngine,
    bounds: Bounds,
    picture: Option<Picture>,
    presentation: Presentation,
}

impl QuizSession {
    /// List the quiz folder and draw the first image.
    pub fn open(definition: QuizDefinition, bounds: Bounds) -> Self {
        Self::with_engine(definition, bounds, RoundEngine::new())
    }

    /// Like [`QuizSession::open`] with a caller-supplied engine (e.g. seeded).
    pub fn with_engine(
        definition: QuizDefinition,
        bounds: Bounds,
        mut engine: RoundEngine,
    ) -> Self {
        let catalog = ImageCatalog::new(&definition.folder);
        engine.initialize(catalog.identifiers());
        info!(
            quiz = %definition.title,
            folder = %catalog.root_path().display(),
            total = engine.total(),
            "Quiz opened"
        );

        let mut session = Self {
            definition,
            catalog,
            engine,
            bounds,
            picture: None,
            presentation: Presentation::RoundOver { won: false },
        };
        let draw = session.engine.shuffle_and_draw();
        session.present(draw);
        session
    }

    /// Check a guess. A correct guess moves on to the next image.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, RoundError> {
        let answer = self
            .engine
            .current()
            .map(|current| current.answer().to_string())
            .ok_or(RoundError::InvalidState)?;

        match self.engine.check_guess(text)? {
            GuessResult::Correct => {
                let draw = self.engine.draw_next();
                let next = self.present(draw);
                Ok(GuessOutcome::Correct { answer, next })
            }
            GuessResult::Incorrect => Ok(GuessOutcome::Incorrect),
        }
    }

    /// Merge extra images (files or folders) into the round and redraw.
    ///
    /// Relative entries are taken from the working directory. An empty
    /// selection changes nothing and returns `None`.
    pub fn load_more<I, S>(&mut self, entries: I) -> Option<Presentation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let identifiers = self.catalog.expand_selection(entries);
        if identifiers.is_empty() {
            return None;
        }
        let draw = self.engine.load_more(identifiers);
        Some(self.present(draw))
    }

    /// Put every drawn image back and start a new round.
    pub fn restart(&mut self) -> Presentation {
        let draw = self.engine.restart();
        self.present(draw)
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SessionView<'_> {
        let round_over_message = match self.presentation {
            Presentation::RoundOver { won } => Some(self.definition.round_over_message(won)),
            Presentation::Showing(_) => None,
        };
        SessionView {
            title: &self.definition.title,
            picture: self.picture.as_ref(),
            phase: self.engine.phase(),
            stats: self.engine.stats(),
            remaining: self.engine.remaining(),
            total: self.engine.total(),
            round_over_message,
        }
    }

    /// Latest presentation.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Whether guesses are accepted right now.
    pub fn accepts_guesses(&self) -> bool {
        self.engine.phase() == RoundPhase::Active
    }

    /// The quiz being played.
    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    /// Underlying round engine.
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    fn present(&mut self, mut draw: DrawResult) -> Presentation {
        let presentation = loop {
            match draw {
                DrawResult::RoundOver { won } => {
                    self.picture = None;
                    break Presentation::RoundOver { won };
                }
                DrawResult::Drawn(identifier) => {
                    let path = self.catalog.resolve(&identifier);
                    match load_picture(&path, self.bounds) {
                        Ok(picture) => {
                            self.picture = Some(picture);
                            break Presentation::Showing(identifier);
                        }
                        Err(err) => {
                            warn!(identifier = %identifier, "Skipping image: {err}");
                            draw = self.engine.skip_current();
                        }
                    }
                }
            }
        };
        self.presentation = presentation.clone();
        presentation
    }
}
