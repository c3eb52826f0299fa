//! The `parse` command: print every top-level form in printed form.

use std::io::{self, BufRead, Write};

use sexpr_ir::SExpr;
use sexpr_parse::Parser;

use super::CommandOutcome;

pub fn parse_forms<R: BufRead>(
    parser: &mut Parser<R>,
    keep_going: bool,
    out: &mut dyn Write,
    diagnostics: &mut dyn Write,
) -> io::Result<CommandOutcome> {
    let mut outcome = CommandOutcome::default();
    loop {
        match parser.next() {
            Ok(SExpr::Void) => break,
            Ok(form) => {
                writeln!(out, "{form}")?;
                outcome.forms += 1;
            }
            Err(err) => {
                writeln!(diagnostics, "{err}")?;
                outcome.errors += 1;
                if !keep_going {
                    break;
                }
            }
        }
    }
    Ok(outcome)
}
