use std::{
    cell::Cell,
    fmt::Display,
    fs::File,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

pub use clap::Parser;
use clex_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use clex_lexical::{keyword::KeywordTable, token_stream::TokenStream};

pub mod listing;

use listing::Listing;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "clex",
    about = "Lexical scanner for C-like source code.",
    author = "clex developers"
)]
pub struct Argument {
    /// The input file to scan, `-` for the standard input.
    pub file: PathBuf,

    /// The number of tokens printed per row.
    #[clap(long = "columns", default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: u16,

    /// Prints the listing without colors.
    #[clap(long = "plain")]
    pub plain: bool,

    /// Prints out the debug form of the token stream instead of the listing.
    #[clap(long = "dump")]
    pub dump: bool,
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Printer {
    printed: Cell<usize>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            printed: Cell::new(0),
        }
    }

    fn printed(&self) -> usize { self.printed.get() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(self.printed.get() + 1);
    }
}

/// Loads the source file at `path`; `-` drains the standard input instead.
///
/// # Errors
/// Returns [`source_file::Error`] if the file can't be read or isn't valid UTF-8.
pub fn load(path: &Path) -> Result<Arc<SourceFile>, source_file::Error> {
    if path == Path::new("-") {
        SourceFile::read(std::io::stdin().lock(), path.to_path_buf())
    } else {
        SourceFile::load(File::open(path)?, path.to_path_buf())
    }
}

/// Loads and scans the file, then prints the listing (or the dump) to the standard output.
///
/// Every lexical error is printed to the standard error stream as it's found.
///
/// # Errors
/// Returns [`source_file::Error`] if the file can't be loaded; nothing is printed then.
pub fn scan(argument: &Argument) -> Result<Report, source_file::Error> {
    let source_file = load(&argument.file)?;
    let printer = Printer::new();

    // token stream
    let token_stream = TokenStream::tokenize(&source_file, KeywordTable::shared(), &printer);

    if argument.dump {
        println!("{token_stream:#?}");
    } else {
        print!(
            "{}",
            Listing::new(&token_stream, usize::from(argument.columns), !argument.plain)
        );
    }

    Ok(Report {
        tokens: token_stream.len(),
        errors: printer.printed(),
    })
}

/// Is the outcome of a [`scan`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Report {
    /// The number of tokens, the terminal EOF token included.
    pub tokens: usize,

    /// The number of lexical errors reported.
    pub errors: usize,
}

impl Report {
    /// Gets the exit code of the program: success only if no lexical error was reported.
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        if self.errors == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    match scan(&argument) {
        Ok(report) => {
            if report.errors != 0 {
                let msg = Message::new(
                    Severity::Error,
                    format!("found {} lexical error(s)", report.errors),
                );

                eprintln!("{msg}");
            }

            report.exit_code()
        }
        Err(error) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.file.display()),
            );

            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
