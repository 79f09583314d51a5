use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use splice_core::{Pattern, SpliceError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "Examples:\n  splice decode pattern_1.splice -o pattern_1.json\n  splice print pattern_1.splice\n  splice encode pattern_1.json -o pattern_1.splice";

#[derive(Parser, Debug)]
#[command(name = "splice")]
#[command(version)]
#[command(
    about = "Decode, encode and print SPLICE drum-machine pattern files.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a .splice file into a JSON pattern.
    Decode {
        /// Path to a .splice file
        input: PathBuf,

        /// Output pattern path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write JSON pattern to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Pretty-print JSON output (compact by default)
        #[arg(long)]
        pretty: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Encode a JSON pattern into a .splice file.
    Encode {
        /// Path to a JSON pattern
        input: PathBuf,

        /// Output .splice path
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Print a .splice file as a step grid.
    Print {
        /// Path to a .splice file
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            input,
            output,
            stdout,
            pretty,
            quiet,
        } => cmd_decode(input, output, stdout, pretty, quiet),
        Commands::Encode {
            input,
            output,
            quiet,
        } => cmd_encode(input, output, quiet),
        Commands::Print { input } => cmd_print(input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_decode(
    input: PathBuf,
    output: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input, "splice")?;
    let output = if stdout {
        None
    } else {
        Some(output.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--output or --stdout".to_string()),
            )
        })?)
    };
    if let Some(output_path) = output.as_ref() {
        ensure_distinct_output(&resolved_input, output_path)?;
    }

    let pattern = decode_input(&resolved_input)?;
    let json = serialize_pattern(&pattern, pretty)?;

    let Some(output) = output else {
        println!("{}", json);
        return Ok(());
    };
    write_output(&output, json.as_bytes())?;
    if !quiet {
        eprintln!("OK: pattern written -> {}", output.display());
    }
    Ok(())
}

fn cmd_encode(input: PathBuf, output: PathBuf, quiet: bool) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input, "json")?;
    ensure_distinct_output(&resolved_input, &output)?;

    let json = fs::read_to_string(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    let pattern: Pattern = serde_json::from_str(&json)
        .with_context(|| format!("Invalid JSON pattern: {}", resolved_input.display()))?;
    let bytes = splice_core::encode(&pattern).map_err(|err| {
        CliError::new(
            format!("pattern does not fit the SPLICE format: {}", err),
            Some(
                "names are limited to 255 bytes, versions to 32, and the whole payload to 255"
                    .to_string(),
            ),
        )
    })?;

    write_output(&output, &bytes)?;
    if !quiet {
        eprintln!("OK: splice written -> {}", output.display());
    }
    Ok(())
}

fn cmd_print(input: PathBuf) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input, "splice")?;
    let pattern = decode_input(&resolved_input)?;
    print!("{}", pattern);
    Ok(())
}

fn decode_input(input: &Path) -> Result<Pattern, CliError> {
    splice_core::decode_file(input).map_err(|err| match err {
        SpliceError::Format(err) => CliError::new(
            format!("not a valid SPLICE file '{}': {}", input.display(), err),
            Some("the file may be truncated or come from another tool".to_string()),
        ),
        other => CliError::new(
            format!("failed to read '{}': {}", input.display(), other),
            None,
        ),
    })
}

fn serialize_pattern(pattern: &Pattern, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(pattern)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(pattern)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn write_output(output: &Path, bytes: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(output, bytes)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;
    Ok(())
}

fn ensure_distinct_output(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let output_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A missing output directory is created later and cannot hold the input.
    let Ok(output_dir) = fs::canonicalize(output_dir) else {
        return Ok(());
    };
    let file_name = output
        .file_name()
        .ok_or_else(|| CliError::new(format!("invalid output path: {}", output.display()), None))?;
    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path, expected_ext: &str) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some(format!("use a .{} file", expected_ext)),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some(format!("use a .{} file", expected_ext)),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != expected_ext {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some(format!("expected a .{} file", expected_ext)),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let hint = "pass a single file, or run once per file".to_string();
        let mut message = format!(
            "multiple files match pattern '{}' ({} matches)",
            pattern,
            matches.len()
        );
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>();
        message.push_str("; matches: ");
        message.push_str(&listed.join(", "));
        if matches.len() > 3 {
            message.push_str(", ...");
        }
        return Err(CliError::new(message, Some(hint)));
    }

    let resolved = matches.remove(0);
    debug!(pattern = %pattern, resolved = %resolved.display(), "resolved input glob");
    Ok(resolved)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
