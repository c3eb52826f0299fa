//! The `demo` command: prints one value of every s-expression kind.

use std::io::{self, Write};

use sexpr_ir::{List, SExpr};

pub fn demo(out: &mut dyn Write) -> io::Result<()> {
    let mut expr = SExpr::default();
    writeln!(out, "{expr}")?;

    // Pushing a list into itself stores a copy of what it held at that point.
    let mut list = List::new();
    list.push_front(SExpr::List(list.clone()));
    list.push_front(SExpr::string("string"));
    list.push_front(expr);
    expr = SExpr::List(list);
    writeln!(out, "{expr}")?;

    for expr in [SExpr::Int(42), SExpr::string("string"), SExpr::token("token")] {
        writeln!(out, "{expr}")?;
    }
    Ok(())
}
