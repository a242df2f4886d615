//! Argument handling shared by the binaries

use thiserror::Error;

/// Wrong number of positional arguments
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Expected exactly one argument to program, got: {}", format_arg_list(.0))]
pub struct UsageError(pub Vec<String>);

/// The single positional argument, or a usage error echoing what was received
pub fn single_argument(args: &[String]) -> Result<&str, UsageError> {
    match args {
        [arg] => Ok(arg.as_str()),
        _ => Err(UsageError(args.to_vec())),
    }
}

/// Render arguments as a bracketed list of quoted strings: `['a', 'b']`
pub fn format_arg_list(args: &[String]) -> String {
    let quoted: Vec<String> = args.iter().map(|arg| quote_arg(arg)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Quote one argument the way a Python string repr does.
///
/// Single quotes unless the argument contains one and no double quote.
/// Every non-printable character below U+0100 is escaped (`\n`, `\r`, `\t`,
/// otherwise `\xNN`). Non-printable characters above U+00FF, such as
/// zero-width or line separator code points, are passed through unescaped.
fn quote_arg(arg: &str) -> String {
    let quote = if arg.contains('\'') && !arg.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(arg.len() + 2);
    out.push(quote);
    for c in arg.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_latin1_non_printable(c) => {
                out.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Control characters plus the no-break space and soft hyphen
fn is_latin1_non_printable(c: char) -> bool {
    c.is_control() || c == '\u{a0}' || c == '\u{ad}'
}
