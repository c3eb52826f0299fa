//! The `run` and `repl` commands.

use std::io::{self, BufRead, Write};

use sexpr_eval::{Environment, Scheduler, Script};
use sexpr_parse::Parser;

use super::{CommandOutcome, RunOptions};

/// Run a script to completion in `env`, reporting errors to `diagnostics`.
///
/// Without `keep_going` the first error ends the run.
pub fn run_script<R: BufRead + 'static>(
    parser: Parser<R>,
    env: &Environment,
    options: &RunOptions,
    diagnostics: &mut dyn Write,
) -> io::Result<CommandOutcome> {
    if options.prelude {
        env.bind_builtins();
    }
    let script = Script::new(parser, env.clone(), Scheduler::new());
    let mut errors = 0;

    script.start();
    loop {
        match script.scheduler().run_until_idle() {
            Ok(()) => break,
            Err(err) => {
                writeln!(diagnostics, "{err}")?;
                errors += 1;
                if !options.keep_going {
                    break;
                }
                script.resume();
            }
        }
    }

    if errors == 0 && !script.is_finished() {
        tracing::warn!("script suspended with nothing left to resume it");
    }
    Ok(CommandOutcome {
        forms: script.forms_evaluated(),
        errors,
    })
}
