use std::{env, fs, path::Path};

use anyhow::Result;
use guessr_core::{
    Bounds, GuessOutcome, Identifier, Presentation, QuizDefinition, QuizSession, RoundEngine,
    RoundError, RoundPhase,
};
use image::{Rgb, RgbImage};
use tempfile::{tempdir, Builder};

const BOUNDS: Bounds = Bounds {
    width: 16,
    height: 16,
};

fn write_png(folder: &Path, name: &str) -> Result<()> {
    RgbImage::from_pixel(8, 4, Rgb([10, 200, 30])).save_with_format(
        folder.join(name),
        image::ImageFormat::Png,
    )?;
    Ok(())
}

fn quiz(folder: &Path) -> QuizDefinition {
    QuizDefinition::new("Test Quiz", folder, "character", "characters")
}

fn current_answer(session: &QuizSession) -> String {
    session
        .engine()
        .current()
        .map(|id| id.answer().to_string())
        .expect("an identifier should be current")
}

#[test]
fn open_shows_first_picture() -> Result<()> {
    let temp = tempdir()?;
    for name in ["hulk.png", "thor.png", "loki.png"] {
        write_png(temp.path(), name)?;
    }

    let session = QuizSession::with_engine(quiz(temp.path()), BOUNDS, RoundEngine::with_seed(1));
    assert!(matches!(session.presentation(), Presentation::Showing(_)));
    assert!(session.accepts_guesses());

    let view = session.view();
    assert_eq!(view.title, "Test Quiz");
    assert_eq!(view.total, 3);
    assert_eq!(view.remaining, 2);
    assert!(view.round_over_message.is_none());
    let picture = view.picture.expect("picture decoded");
    assert_eq!((picture.width, picture.height), (16, 8));
    Ok(())
}

#[test]
fn correct_guesses_exhaust_the_round() -> Result<()> {
    let temp = tempdir()?;
    for name in ["Hulk.png", "Thor.PNG", "spider.man.png"] {
        write_png(temp.path(), name)?;
    }

    let mut session = QuizSession::open(quiz(temp.path()), BOUNDS);
    let mut answered = Vec::new();
    loop {
        let answer = current_answer(&session);
        let outcome = session.submit_guess(&answer.to_uppercase())?;
        let GuessOutcome::Correct { answer: echoed, next } = outcome else {
            panic!("uppercased answer should be accepted");
        };
        assert_eq!(echoed, answer);
        answered.push(answer);
        if let Presentation::RoundOver { won } = next {
            assert!(won);
            break;
        }
    }

    answered.sort();
    assert_eq!(answered, vec!["Hulk", "Thor", "spider"]);
    let view = session.view();
    assert_eq!(view.phase, RoundPhase::RoundOver);
    assert!(view.picture.is_none());
    assert_eq!(
        view.round_over_message.as_deref(),
        Some("You won! All characters identified.")
    );
    assert_eq!(view.stats.correct, 3);
    assert_eq!(session.submit_guess("hulk"), Err(RoundError::InvalidState));
    Ok(())
}

#[test]
fn wrong_guess_keeps_picture() -> Result<()> {
    let temp = tempdir()?;
    write_png(temp.path(), "vision.png")?;

    let mut session = QuizSession::open(quiz(temp.path()), BOUNDS);
    assert_eq!(session.submit_guess("wanda")?, GuessOutcome::Incorrect);
    assert_eq!(session.submit_guess(" vision")?, GuessOutcome::Incorrect);
    assert_eq!(
        session.presentation(),
        &Presentation::Showing(Identifier::from("vision.png"))
    );
    assert_eq!(session.view().stats.incorrect, 2);
    Ok(())
}

#[test]
fn undecodable_images_are_skipped() -> Result<()> {
    let temp = tempdir()?;
    write_png(temp.path(), "good.png")?;
    fs::write(temp.path().join("bad.png"), b"garbage")?;

    let mut session =
        QuizSession::with_engine(quiz(temp.path()), BOUNDS, RoundEngine::with_seed(3));
    assert_eq!(
        session.presentation(),
        &Presentation::Showing(Identifier::from("good.png"))
    );

    let outcome = session.submit_guess("good")?;
    assert_eq!(
        outcome,
        GuessOutcome::Correct {
            answer: "good".to_string(),
            next: Presentation::RoundOver { won: true },
        }
    );
    assert_eq!(session.view().stats.skipped, 1);
    assert_eq!(session.engine().used().len(), 2);
    Ok(())
}

#[test]
fn empty_folder_is_over_immediately() -> Result<()> {
    let temp = tempdir()?;
    let mut session = QuizSession::open(quiz(&temp.path().join("missing")), BOUNDS);

    assert_eq!(session.presentation(), &Presentation::RoundOver { won: false });
    assert!(!session.accepts_guesses());
    assert_eq!(
        session.view().round_over_message.as_deref(),
        Some("All characters used. Try again!")
    );
    assert_eq!(session.submit_guess("anything"), Err(RoundError::InvalidState));
    Ok(())
}

#[test]
fn load_more_merges_selected_images() -> Result<()> {
    let temp = tempdir()?;
    let base = temp.path().join("base");
    let extra = temp.path().join("extra");
    fs::create_dir_all(&base)?;
    fs::create_dir_all(&extra)?;
    write_png(&base, "a.png")?;
    write_png(&extra, "b.png")?;
    write_png(&extra, "c.jpg.png")?;

    let mut session = QuizSession::open(quiz(&base), BOUNDS);
    assert!(session.load_more(Vec::<String>::new()).is_none());
    assert!(session.load_more(["   "]).is_none());

    let file = extra.join("b.png").to_string_lossy().into_owned();
    let next = session.load_more([file.as_str()]).expect("selection was not empty");
    assert_eq!(next, Presentation::Showing(Identifier::from(file.as_str())));
    assert_eq!(current_answer(&session), "b");
    assert_eq!(session.engine().total(), 2);

    let folder = extra.to_string_lossy().into_owned();
    session.load_more([folder.as_str()]).expect("selection was not empty");
    assert_eq!(session.engine().total(), 3);
    Ok(())
}

#[test]
fn load_more_reads_relative_files_from_working_directory() -> Result<()> {
    let picked = Builder::new().prefix("picked-").suffix(".png").tempfile_in(".")?;
    let name = picked
        .path()
        .file_name()
        .and_then(|name| name.to_str())
        .expect("temp file name is utf-8")
        .to_string();
    write_png(Path::new("."), &name)?;

    // The quiz folder holds a file of the same name, already drawn.
    let temp = tempdir()?;
    write_png(temp.path(), &name)?;
    let mut session = QuizSession::open(quiz(temp.path()), BOUNDS);
    assert_eq!(session.presentation(), &Presentation::Showing(Identifier::from(name.as_str())));

    let next = session.load_more([name.as_str()]).expect("selection was not empty");
    let expected = env::current_dir()?.join(&name).to_string_lossy().into_owned();
    assert_eq!(next, Presentation::Showing(Identifier::from(expected)));
    assert_eq!(session.engine().total(), 2);
    assert_eq!(session.view().stats.skipped, 0);
    Ok(())
}

#[test]
fn load_more_after_round_over_reopens() -> Result<()> {
    let temp = tempdir()?;
    let extra = temp.path().join("late.png");
    write_png(temp.path(), "late.png")?;

    let mut session = QuizSession::open(quiz(&temp.path().join("empty")), BOUNDS);
    assert!(!session.accepts_guesses());

    let entry = extra.to_string_lossy().into_owned();
    session.load_more([entry]);
    assert!(session.accepts_guesses());
    assert_eq!(current_answer(&session), "late");
    Ok(())
}

#[test]
fn restart_recycles_every_image() -> Result<()> {
    let temp = tempdir()?;
    for name in ["a.png", "b.png"] {
        write_png(temp.path(), name)?;
    }

    let mut session = QuizSession::open(quiz(temp.path()), BOUNDS);
    while session.accepts_guesses() {
        let answer = current_answer(&session);
        session.submit_guess(&answer)?;
    }

    let presentation = session.restart();
    assert!(matches!(presentation, Presentation::Showing(_)));
    let view = session.view();
    assert_eq!(view.total, 2);
    assert_eq!(view.remaining, 1);
    assert_eq!(view.stats.correct, 0);
    assert!(view.round_over_message.is_none());
    Ok(())
}
