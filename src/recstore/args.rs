use clap::Parser;
use recstore::config::Arguments;
use std::ffi::OsString;

const VALUE_FLAGS: [&str; 4] = ["fileName", "operation", "id", "item"];
const SWITCH_FLAGS: [&str; 1] = ["verbose"];

#[derive(Parser, Debug)]
#[command(name = "recstore")]
#[command(about = "Create, read and delete user records kept in a JSON file", long_about = None)]
pub struct Cli {
    /// Name of a JSON file
    #[arg(long = "fileName", value_name = "PATH", allow_hyphen_values = true)]
    pub file_name: Option<String>,

    /// Supported operations: add, list, findById, remove
    #[arg(long, allow_hyphen_values = true)]
    pub operation: Option<String>,

    /// User id
    #[arg(long, allow_hyphen_values = true)]
    pub id: Option<String>,

    /// Valid json object with the id, email and age fields
    #[arg(long, value_name = "JSON", allow_hyphen_values = true)]
    pub item: Option<String>,

    /// Print diagnostics to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments, accepting `-fileName` as well as
    /// `--fileName`.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize(std::env::args_os()))
    }

    pub fn arguments(&self) -> Arguments {
        let mut args = Arguments::default();
        if let Some(file_name) = &self.file_name {
            args = args.with_file_name(file_name);
        }
        if let Some(operation) = &self.operation {
            args = args.with_operation(operation);
        }
        if let Some(id) = &self.id {
            args = args.with_id(id);
        }
        if let Some(item) = &self.item {
            args = args.with_item(item);
        }
        args
    }
}

/// Rewrite Go-style flags into the form clap expects.
///
/// `-verbose` becomes `--verbose`. A value flag written as `-id VALUE` or
/// `--id VALUE` is joined into `--id=VALUE`, so the value is taken verbatim
/// even when it starts with a hyphen. `-id=VALUE` only gains the extra dash.
/// Anything else passes through untouched.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let Some(flag) = arg.to_str().and_then(parse_long_flag) else {
            normalized.push(arg);
            continue;
        };

        match flag {
            LongFlag::Switch(name) | LongFlag::WithValue(name) => {
                normalized.push(OsString::from(format!("--{}", name)));
            }
            LongFlag::ValueNext(name) => {
                let mut joined = OsString::from(format!("--{}", name));
                if let Some(value) = args.next() {
                    joined.push("=");
                    joined.push(value);
                }
                normalized.push(joined);
            }
        }
    }

    normalized
}

/// A recognised flag token, stripped of its leading dashes.
enum LongFlag {
    /// A boolean flag, with any `=value` suffix kept.
    Switch(String),
    /// A value flag written as `name=value`.
    WithValue(String),
    /// A value flag whose value is the next token.
    ValueNext(String),
}

fn parse_long_flag(arg: &str) -> Option<LongFlag> {
    let rest = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);

    if SWITCH_FLAGS.contains(&name) {
        Some(LongFlag::Switch(rest.to_string()))
    } else if !VALUE_FLAGS.contains(&name) {
        None
    } else if name.len() < rest.len() {
        Some(LongFlag::WithValue(rest.to_string()))
    } else {
        Some(LongFlag::ValueNext(rest.to_string()))
    }
}
