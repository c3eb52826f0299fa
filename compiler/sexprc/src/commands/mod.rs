//! Command handlers.
//!
//! Each command writes its normal output and its diagnostics to separate
//! writers and reports a [`CommandOutcome`]; the binary maps that to an exit
//! status.

mod demo;
mod options;
mod parse;
mod run;

pub use demo::demo;
pub use options::{parse_run_options, RunOptions};
pub use parse::parse_forms;
pub use run::run_script;

use std::io::BufRead;
use std::path::Path;

use sexpr_diagnostic::Unexpected;
use sexpr_lexer::{SourceOptions, TrackingStream};
use sexpr_parse::Parser;

/// What a command got through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Top-level forms handled successfully.
    pub forms: usize,
    /// Diagnostics reported.
    pub errors: usize,
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }
}

/// Open `path` for parsing; `-` reads standard input.
pub fn open_parser(
    path: &str,
    options: &RunOptions,
) -> Result<Parser<Box<dyn BufRead>>, Unexpected> {
    let source_options = SourceOptions {
        skip_shebang: options.skip_shebang,
    };
    let source = if path == "-" {
        let input: Box<dyn BufRead> = Box::new(std::io::stdin().lock());
        TrackingStream::new("<stdin>", input, source_options)?
    } else {
        TrackingStream::open(Path::new(path), source_options)?
    };
    Ok(Parser::from_stream(source))
}
