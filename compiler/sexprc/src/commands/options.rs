//! Flags shared by `parse`, `run` and `repl`.

/// How a script is read and run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Report an error and carry on with the next form instead of stopping.
    pub keep_going: bool,
    /// Bind `if`, `let` and `print` as well as `builtin`.
    pub prelude: bool,
    /// Set aside a leading `#!` line.
    pub skip_shebang: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            keep_going: false,
            prelude: true,
            skip_shebang: true,
        }
    }
}

/// Split `args` into options and at most one path.
pub fn parse_run_options(
    args: &[String],
    mut options: RunOptions,
) -> Result<(RunOptions, Option<String>), String> {
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "--keep-going" | "-k" => options.keep_going = true,
            "--no-prelude" => options.prelude = false,
            "--keep-shebang" => options.skip_shebang = false,
            "-" => path = Some(arg.clone()),
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            _ if path.is_some() => return Err(format!("unexpected argument '{arg}'")),
            _ => path = Some(arg.clone()),
        }
    }
    Ok((options, path))
}
