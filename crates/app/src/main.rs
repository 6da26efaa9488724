mod config;
mod tokenizer;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::rc::Rc;
use std::sync::Arc;

use rand::Rng;
use services::Session;
use storage::FileRepository;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Line source shared by the edit loop and the overwrite prompt.
type Input<I> = Rc<RefCell<I>>;

/// Read one line without its terminator. `None` at end of input.
fn read_line<I: BufRead + ?Sized>(input: &RefCell<I>) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.borrow_mut().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Ask `question` on stdout and read the answer from `input`. Only an answer
/// starting with `y` counts as yes; end of input or a read failure counts as no.
fn prompt_yes_no<I: BufRead + ?Sized>(input: &RefCell<I>, question: &str) -> bool {
    print!("{question} ");
    if io::stdout().flush().is_err() {
        return false;
    }
    match read_line(input) {
        Ok(Some(answer)) => answer.trim_start().starts_with(['y', 'Y']),
        Ok(None) => false,
        Err(err) => {
            warn!(error = %err, "could not read confirmation");
            false
        }
    }
}

fn confirm_from<I: BufRead + 'static>(input: Input<I>) -> impl FnMut(&str) -> bool + 'static {
    move |question: &str| prompt_yes_no(&*input, question)
}

/// Run one command line and report its output. Returns whether it succeeded.
fn dispatch<R: Rng>(session: &mut Session<R>, tokens: &[String]) -> bool {
    let mut out = Vec::new();
    let result = session.run(tokens, &mut out);

    let mut stdout = io::stdout().lock();
    for line in &out {
        // Nothing useful can be done if stdout is gone.
        let _ = writeln!(stdout, "{line}");
    }
    drop(stdout);

    match result {
        Ok(()) => true,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err}");
            false
        }
    }
}

/// Read and dispatch lines until `exit` or end of input.
///
/// No borrow of `input` is held while a command runs, so a command may read
/// its own answer from the same source.
fn edit_loop<I: BufRead + ?Sized, R: Rng>(session: &mut Session<R>, input: &RefCell<I>) {
    loop {
        let line = match read_line(input) {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("end of input in edit mode");
                return;
            }
            Err(err) => {
                warn!(error = %err, "stopped reading commands");
                return;
            }
        };
        let tokens = tokenizer::split(&line);
        if tokens.is_empty() {
            continue;
        }
        dispatch(session, &tokens);
        if !session.is_editing() {
            return;
        }
    }
}

fn main() -> ExitCode {
    let config = AppConfig::from_env();
    init_tracing(&config);

    let input: Input<_> = Rc::new(RefCell::new(io::stdin().lock()));
    let repository = Arc::new(FileRepository::new(&config.data_file));
    info!(path = %repository.path().display(), "using data file");
    let mut session = Session::new(
        repository,
        Box::new(confirm_from(Rc::clone(&input))),
        rand::rng(),
    );

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let succeeded = dispatch(&mut session, &argv);

    if session.is_editing() {
        edit_loop(&mut session, &*input);
        return ExitCode::SUCCESS;
    }

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
