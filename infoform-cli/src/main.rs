use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, bail, eyre};
use serde_json::Value;

use infoform::{
    DocumentFormat, FormValues, InfoFormUI, OutputDestination, OutputOptions, UiOptions, emit,
    form_values_schema, parse_document_str, values_from_document,
};

mod logging;

#[derive(Debug, Parser)]
#[command(
    name = "infoform",
    version,
    about = "Collect personal information in an interactive terminal form"
)]
struct Cli {
    /// Prefill values: a file path, an inline document, or "-" for stdin
    #[arg(short = 'v', long = "values", value_name = "SPEC")]
    values: Option<String>,

    /// Title shown at the top of the form
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Where the submission goes ("-" is stdout); repeatable
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Output format (json, yaml, toml); taken from the output file extension when omitted
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<String>,

    /// Emit compact JSON/TOML
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files that already exist
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Only validate on submit instead of while typing
    #[arg(long = "no-validate-live")]
    no_validate_live: bool,

    /// Quit immediately even with unsubmitted edits
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Hide the key help line
    #[arg(long = "no-help")]
    no_help: bool,

    /// Directory for log files (defaults to the platform data directory)
    #[arg(long = "log-dir", value_name = "PATH")]
    log_dir: Option<PathBuf>,

    /// Print the JSON Schema accepted by --values and exit
    #[arg(long = "print-schema")]
    print_schema: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.print_schema {
        let schema = form_values_schema().map_err(|err| eyre!("{err:#}"))?;
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let log_dir = logging::init(cli.log_dir.clone())?;

    // everything that can be rejected is checked before the screen is taken
    let prefill = cli.values.as_deref().map(load_prefill).transpose()?;
    let output = output_options(&cli)?;

    let options = UiOptions::default()
        .with_auto_validate(!cli.no_validate_live)
        .with_confirm_exit(!cli.no_confirm_exit)
        .with_help(!cli.no_help);
    let mut ui = InfoFormUI::new().with_options(options);
    if let Some(title) = cli.title.clone() {
        ui = ui.with_title(title);
    }
    if let Some(values) = prefill {
        ui = ui.with_values(values);
    }

    let info = ui.run().map_err(Report::msg).wrap_err_with(|| {
        format!("no submission kept (logs in {})", log_dir.display())
    })?;
    tracing::info!("submission kept");

    emit(&info, &output).map_err(|err| eyre!("{err:#}"))
}

/// Where `--values` points.
#[derive(Debug, PartialEq, Eq)]
enum PrefillSource<'a> {
    Stdin,
    File(&'a Path),
    Inline(&'a str),
}

impl<'a> PrefillSource<'a> {
    fn from_spec(spec: &'a str) -> Self {
        if spec == "-" {
            return PrefillSource::Stdin;
        }
        let path = Path::new(spec);
        if path.is_file() {
            PrefillSource::File(path)
        } else {
            PrefillSource::Inline(spec)
        }
    }
}

fn load_prefill(spec: &str) -> Result<FormValues> {
    let document = match PrefillSource::from_spec(spec) {
        PrefillSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .wrap_err("failed to read values from stdin")?;
            sniff_document(&text)?
        }
        PrefillSource::File(path) => {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read values from {}", path.display()))?;
            match format_for_path(path)? {
                Some(format) => {
                    parse_document_str(&text, format).map_err(|err| eyre!("{err:#}"))?
                }
                None => sniff_document(&text)?,
            }
        }
        PrefillSource::Inline(text) => sniff_document(text)?,
    };

    values_from_document(&document)
        .map_err(|err| eyre!("{err:#}"))
        .wrap_err("prefill values rejected")
}

/// Parse text of unknown format with the first format that accepts it.
fn sniff_document(text: &str) -> Result<Value> {
    DocumentFormat::available_formats()
        .into_iter()
        .find_map(|format| parse_document_str(text, format).ok())
        .ok_or_else(|| eyre!("values are not a {} document", supported_formats()))
}

/// Format implied by a file extension. Extensions this build cannot read are
/// an error rather than a silent fallback.
fn format_for_path(path: &Path) -> Result<Option<DocumentFormat>> {
    if let Some(format) = DocumentFormat::from_path(path) {
        return Ok(Some(format));
    }
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some(ext @ ("yaml" | "yml" | "toml")) => bail!(
            "{} needs {ext} support, which this build was compiled without",
            path.display()
        ),
        _ => Ok(None),
    }
}

fn supported_formats() -> String {
    DocumentFormat::available_formats()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

fn output_options(cli: &Cli) -> Result<OutputOptions> {
    let destinations = if cli.outputs.is_empty() {
        vec![OutputDestination::Stdout]
    } else {
        cli.outputs
            .iter()
            .map(|raw| parse_destination(raw))
            .collect::<Result<Vec<_>>>()?
    };

    let format = match cli.format.as_deref() {
        Some(name) => DocumentFormat::from_name(name).ok_or_else(|| {
            eyre!(
                "unknown format '{name}'; this build supports {}",
                supported_formats()
            )
        })?,
        None => format_from_files(&destinations)?,
    };
    if !cli.force {
        refuse_overwrite(&destinations)?;
    }

    Ok(OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations))
}

fn parse_destination(raw: &str) -> Result<OutputDestination> {
    match raw.trim() {
        "" => bail!("output destination cannot be empty"),
        "-" => Ok(OutputDestination::Stdout),
        _ => Ok(OutputDestination::file(raw)),
    }
}

fn output_files(destinations: &[OutputDestination]) -> impl Iterator<Item = &Path> {
    destinations.iter().filter_map(|dest| match dest {
        OutputDestination::File(path) => Some(path.as_path()),
        OutputDestination::Stdout => None,
    })
}

/// All output files must agree on one format; stdout alone means JSON.
fn format_from_files(destinations: &[OutputDestination]) -> Result<DocumentFormat> {
    let mut chosen: Option<(DocumentFormat, &Path)> = None;
    for path in output_files(destinations) {
        let Some(format) = format_for_path(path)? else {
            bail!(
                "cannot tell the format of {}; use a {} extension or --format",
                path.display(),
                supported_formats()
            );
        };
        match chosen {
            Some((first, first_path)) if first != format => bail!(
                "{} ({first}) and {} ({format}) disagree on the output format",
                first_path.display(),
                path.display()
            ),
            Some(_) => {}
            None => chosen = Some((format, path)),
        }
    }
    Ok(chosen.map(|(format, _)| format).unwrap_or_default())
}

fn refuse_overwrite(destinations: &[OutputDestination]) -> Result<()> {
    let taken: Vec<String> = output_files(destinations)
        .filter(|path| path.exists())
        .map(|path| path.display().to_string())
        .collect();
    if taken.is_empty() {
        return Ok(());
    }
    bail!(
        "refusing to overwrite {} (pass --force)",
        taken.join(", ")
    )
}
