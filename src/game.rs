//! The game module ties the parts of the game together: it parses the command line, sets up
//! logging, loads the word list, and runs the session loop that feeds the player's guesses to the
//! engine and the engine's snapshots to the presenter.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use console::{style, Term};
use fastrand::Rng;
use tracing::{warn, Level};

use crate::engine::{EngineConfig, GameEngine, GuessError, DEFAULT_MAX_WRONG};
use crate::input::{confirm, take_guess};
use crate::messages::Console;
use crate::presenter::Presenter;
use crate::view::{Outcome, Status};
use crate::words::{WordList, WordSource};

/// This struct holds the command-line arguments, parsed with clap's derive API. Every option can
/// also be set through the environment.
#[derive(Parser)]
#[command(name = "gallows", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The amount of wrong guesses that loses a round.
    #[arg(short, long, default_value_t = DEFAULT_MAX_WRONG)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    #[arg(env = "GALLOWS_MAX_WRONG", value_name = "COUNT")]
    max_wrong: u32,
    /// A seed for the word selection, to replay the same sequence of words.
    #[arg(long, env = "GALLOWS_SEED", value_name = "SEED")]
    seed: Option<u64>,
    /// Raise the log level; repeat for more detail. Logs are written to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// A word file with one `word = hint` entry per line; `#` starts a comment.
    ///
    /// The built-in word list is used when neither this nor --words-url is given.
    #[arg(short, long, conflicts_with = "words_url")]
    #[arg(env = "GALLOWS_WORDS", value_name = "PATH")]
    words: Option<PathBuf>,
    /// A URL serving a JSON array of objects with `word` and `hint` fields.
    #[arg(long, env = "GALLOWS_WORDS_URL", value_name = "URL")]
    words_url: Option<String>,
}

impl Cli {
    /// This function loads the word list the arguments point at. A list that fails to load is
    /// logged and replaced by an empty one, which the engine reports as having no words.
    fn load_words(&self) -> WordList {
        let loaded = match (self.words.as_ref(), self.words_url.as_ref()) {
            (Some(path), _) => WordList::load(path),
            (None, Some(url)) => WordList::fetch(url),
            (None, None) => Ok(WordList::embedded()),
        };

        loaded.unwrap_or_else(|err| {
            warn!(%err, "failed to load the word list");
            WordList::default()
        })
    }
}

/// Initializes the game and runs it until the player quits. This is a `main()` function of sorts,
/// though it is still called from main.rs.
///
/// # Errors
///
/// The function fails on an invalid mistake budget, and on any terminal or prompt error, such as
/// an `io::Error` or a `dialoguer::Error`.
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let term = Term::stdout();
    let config = EngineConfig::new(cli.max_wrong)?;
    let rng = cli.seed.map_or_else(Rng::new, Rng::with_seed);
    let mut engine = GameEngine::with_rng(cli.load_words(), config, rng);
    let mut console = Console::new(term.clone());

    init_message(&term)?;

    // game loop
    loop {
        match engine.start_round() {
            Ok(view) => console.round_started(&view)?,
            Err(err) => {
                console.no_round(&err)?;

                if !confirm(&term, "Try loading the word list again?")? {
                    break;
                }

                engine.replace_source(cli.load_words());
                continue;
            }
        }

        play_round(&mut engine, &mut console, || take_guess(&term))?;

        if !confirm(&term, "Play another round?")? {
            break;
        }
    }

    term.show_cursor()?;
    term.clear_screen()?;
    Ok(())
}

/// This function installs the subscriber that writes log events to stderr. Warnings are always
/// shown; every `-v` enables one more level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// This function initializes the message shown at the start of the program. The screen is cleared,
/// the cursor hidden and the title of the console window set to the name of the game.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to gallows! Guess the word one letter at a time.";
    let msg = style(MSG).bold();

    term.clear_screen()?;
    term.hide_cursor()?;
    term.set_title("gallows");

    term.write_line(&format!("{msg}"))?;
    Ok(())
}

/// Plays the active round to its end: every guess pulled from `next_guess` is submitted to the
/// engine and the result handed to the presenter, until a guess wins or loses the round.
///
/// Rejected guesses are shown and the loop goes on. If there is no round in progress, the call
/// returns right after the presenter has been told so.
///
/// # Errors
///
/// Any error raised by `next_guess` or by the presenter.
pub fn play_round<S, P, F>(
    engine: &mut GameEngine<S>,
    presenter: &mut P,
    mut next_guess: F,
) -> Result<()>
where
    S: WordSource,
    P: Presenter,
    F: FnMut() -> Result<String>,
{
    let status = engine.view().map(|view| view.status());
    if !matches!(status, Some(Status::InProgress)) {
        return presenter.guess_rejected(&GuessError::RoundNotActive);
    }

    loop {
        let guess = next_guess()?;

        match engine.submit_text(&guess) {
            Ok(resolution) => {
                presenter.guess_resolved(&resolution)?;

                if resolution.outcome != Outcome::Continues {
                    break Ok(());
                }
            }
            Err(err) => presenter.guess_rejected(&err)?,
        }
    }
}
