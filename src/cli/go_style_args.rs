use std::ffi::OsString;

/// Long flags that may also be spelled with a single dash, e.g. `-workingDir=x`.
const GO_STYLE_FLAGS: [&str; 8] = [
    "workingDir",
    "moduleName",
    "package",
    "current",
    "output-dir",
    "log-level",
    "help",
    "version",
];

/// Flag that takes an optional value, which may also follow as its own argument.
const BOOL_FLAG: &str = "current";

/// Spellings clap's boolish parser accepts, compared case-insensitively.
const BOOLISH_VALUES: [&str; 12] = [
    "true", "false", "1", "0", "yes", "no", "y", "n", "t", "f", "on", "off",
];

/// Rewrites single-dash spellings of known long flags to the double-dash form
/// clap expects, and joins `-current <bool>` into `--current=<bool>`.
/// Arguments after a `--` terminator are left untouched.
pub fn normalize_go_style_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let mut normalized = Vec::new();

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if text == "--" {
            normalized.push(arg);
            normalized.extend(args);
            break;
        }

        let Some(flag) = long_flag(text) else {
            normalized.push(arg);
            continue;
        };
        let joined = args
            .peek()
            .and_then(|next| next.to_str())
            .filter(|value| flag == BOOL_FLAG && is_boolish(value))
            .map(|value| format!("--{flag}={value}"));
        match joined {
            Some(joined) => {
                normalized.push(OsString::from(joined));
                args.next();
            }
            None => normalized.push(OsString::from(format!("--{flag}"))),
        }
    }

    normalized
}

/// Returns the flag text without its dashes when `text` is a known long flag,
/// keeping any `=value` suffix.
fn long_flag(text: &str) -> Option<&str> {
    text.strip_prefix("--")
        .or_else(|| text.strip_prefix('-'))
        .filter(|flag| !flag.starts_with('-') && is_go_style_flag(flag))
}

fn is_boolish(value: &str) -> bool {
    BOOLISH_VALUES
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(value))
}

fn is_go_style_flag(flag: &str) -> bool {
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    GO_STYLE_FLAGS.contains(&name)
}
