//! Purpose: `json-to-string` CLI entry point.
//! Role: Binary crate root; parses args, reads input, runs encode or decode, emits the result.
//! Invariants: stdout carries only the result (plus a trailing newline unless `--raw`).
//! Invariants: Errors go to stderr as text on a TTY and as a JSON envelope otherwise.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::error::Error as StdError;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use jsonstr::api::{self, Error, ErrorKind, to_exit_code};
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

mod input;

use input::{read_input, resolve_input_source};

const BIN_NAME: &str = "json-to-string";

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                return Ok(RunOutcome::ok());
            }
            _ => {
                let message = clap_error_summary(&err);
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(message)
                        .with_hint(format!("Try `{BIN_NAME} --help`.")),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    execute(cli)
        .map_err(add_internal_hint)
        .map_err(|err| (err, color_mode))
}

#[derive(Parser)]
#[command(
    name = "json-to-string",
    version,
    about = "Convert JSON to an escaped string and back",
    help_template = r#"{about-with-newline}
USAGE
  {usage}

OPTIONS
{options}

{after-help}
"#,
    long_about = None,
    after_help = r#"EXAMPLES
  Encoding (JSON to string):
  $ json-to-string --file input.json
  $ json-to-string --json '{"key": "value"}'
  $ echo '{"key": "value"}' | json-to-string
  $ json-to-string --compact --file input.json    # drop whitespace first
  $ json-to-string --file input.json --raw        # no trailing newline

  Decoding (string to JSON):
  $ json-to-string --decode --json '{\"key\":\"value\"}'
  $ json-to-string --decode --pretty --file escaped.txt

  Round trip:
  $ echo '{"key":"value"}' | json-to-string --raw | json-to-string --decode --pretty

INPUT
  --file wins over --json, which wins over stdin.
  Set RUST_LOG=debug for diagnostic logs on stderr."#
)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Read input from a file",
        value_hint = ValueHint::FilePath
    )]
    file: Option<PathBuf>,
    #[arg(short, long, value_name = "TEXT", help = "Input given inline")]
    json: Option<String>,
    #[arg(
        short,
        long,
        help = "Remove newlines and extra spaces before escaping (encode only)"
    )]
    compact: bool,
    #[arg(short, long, help = "Decode an escaped string back to JSON")]
    decode: bool,
    #[arg(
        short,
        long,
        help = "Indent decoded JSON two spaces per level (decode only)"
    )]
    pretty: bool,
    #[arg(short, long, help = "Omit the trailing newline (useful for piping)")]
    raw: bool,
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize human-readable diagnostics"
    )]
    color: ColorMode,
    #[arg(
        long,
        value_name = "SHELL",
        value_enum,
        help = "Print a shell completion script and exit"
    )]
    completion: Option<Shell>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

fn execute(cli: Cli) -> Result<RunOutcome, Error> {
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        clap_complete::aot::generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
        return Ok(RunOutcome::ok());
    }

    if cli.decode && cli.compact {
        tracing::debug!("--compact has no effect with --decode");
    }
    if !cli.decode && cli.pretty {
        tracing::debug!("--pretty has no effect without --decode");
    }

    let source = resolve_input_source(cli.file, cli.json);
    tracing::debug!(source = source.label(), decode = cli.decode, "resolved input");
    let input = read_input(source)?;

    let result = if cli.decode {
        api::decode(&input, cli.pretty)?
    } else {
        api::encode(&input, cli.compact)?
    };

    emit_result(&result, cli.raw)?;
    Ok(RunOutcome::ok())
}

fn emit_result(result: &str, raw: bool) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();
    let written = if raw {
        stdout.write_all(result.as_bytes())
    } else {
        writeln!(stdout, "{result}")
    };
    written.and_then(|()| stdout.flush()).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write output")
            .with_source(err)
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn add_internal_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Serialization || err.hint().is_some() {
        return err;
    }
    err.with_hint("Valid JSON should always re-serialize; please report this input.")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
        ErrorKind::InvalidJson => "invalid JSON".to_string(),
        ErrorKind::InvalidEscapedString => "invalid JSON string".to_string(),
        ErrorKind::DecodedContentNotJson => "decoded string is not valid JSON".to_string(),
        ErrorKind::Serialization => "serialization failed".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {}",
            colorize_label("path:", use_color, AnsiColor::Yellow),
            path.display()
        ));
    }

    let causes = error_causes(err);
    if let Some(cause) = causes.first() {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }

    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}
