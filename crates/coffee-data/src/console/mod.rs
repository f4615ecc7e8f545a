//! Console front end: one-shot generation and an interactive prompt loop.
//!
//! The binary only parses arguments and wires up the terminal. Everything
//! else lives here so it can be driven from tests with a scripted
//! [`Prompter`] and an in-memory writer.

mod error;

use std::io::Write;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use tracing::info;

pub use self::error::ConsoleError;
use crate::atomic_io::write_atomic;
use crate::batch::{Batch, DEFAULT_MAX_RECORDS, RecordCount, generate_batch};
use crate::catalogue::{City, Country, OrderExtra};
use crate::data_type::DataType;
use crate::export::{ExportArtifact, ExportFormat, export};
use crate::last_batch::LastBatch;
use crate::locale::Locale;
use crate::options::{GenerationOptions, OrderOptions, Validity};

const PREVIEW_ROWS: usize = 10;

/// Command-line interface of the `coffee-data` binary.
#[derive(Debug, Parser)]
#[command(
    name = "coffee-data",
    version,
    about = "Generate synthetic coffee-shop test data"
)]
pub struct Cli {
    /// Mode to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Console modes.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate one batch and print or save the export.
    Generate(GenerateArgs),
    /// Start the interactive prompt loop.
    Interactive,
}

/// Flags for one-shot generation.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Record shape: registrierung, login, profil or bestellung.
    #[arg(long = "type", value_name = "TYPE")]
    pub data_type: DataType,
    /// Number of records to generate.
    #[arg(long, allow_negative_numbers = true)]
    pub count: i64,
    /// Export format: json, csv, xlsx, xml or txt.
    #[arg(long, default_value = "json")]
    pub format: ExportFormat,
    /// Write the export to this file instead of stdout.
    #[arg(long)]
    pub output: Option<Utf8PathBuf>,
    /// Locale for names, addresses and phone numbers.
    #[arg(long, default_value = "de_DE")]
    pub locale: Locale,
    /// Generate credentials that fail validation.
    #[arg(long)]
    pub invalid: bool,
    /// Pin every record to one catalogue city.
    #[arg(long)]
    pub city: Option<City>,
    /// Pin every record to one country.
    #[arg(long)]
    pub country: Option<Country>,
    /// Append an extra field to orders: rabatt, versandkosten or geschenk.
    #[arg(long)]
    pub extra: Option<OrderExtra>,
    /// Append the customer block to orders.
    #[arg(long)]
    pub customer: bool,
    /// Seed for a reproducible batch.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    /// Generation options described by the flags.
    #[must_use]
    pub fn options(&self) -> GenerationOptions {
        let mut options = GenerationOptions::default()
            .with_locale(self.locale)
            .with_validity(Validity::from_flag(!self.invalid))
            .with_order(OrderOptions {
                with_customer: self.customer,
                extra: self.extra,
            });
        options.city = self.city;
        options.country = self.country;
        options.seed = self.seed;
        options
    }
}

/// State carried across console commands.
#[derive(Debug)]
pub struct ConsoleSession {
    options: GenerationOptions,
    max_records: u32,
    last_batch: LastBatch,
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self::new(GenerationOptions::default())
    }
}

impl ConsoleSession {
    /// A session with no batch generated yet.
    #[must_use]
    pub const fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            max_records: DEFAULT_MAX_RECORDS,
            last_batch: LastBatch::new(),
        }
    }

    /// Options applied to the next generation.
    #[must_use]
    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Replace the options applied to the next generation.
    pub const fn set_options(&mut self, options: GenerationOptions) {
        self.options = options;
    }

    /// Generate a batch with the session options and remember it.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Generation`] when `count` is out of range.
    pub fn generate(&self, data_type: DataType, count: i64) -> Result<Arc<Batch>, ConsoleError> {
        let validated = RecordCount::new(count, self.max_records)?;
        let batch = generate_batch(data_type, validated, &self.options);
        info!(data_type = %data_type, count = validated.get(), "generated batch");
        Ok(self.last_batch.store(batch))
    }

    /// Export the last generated batch.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NoBatch`] before the first generation and
    /// [`ConsoleError::Export`] when encoding fails.
    pub fn export(&self, format: ExportFormat) -> Result<ExportArtifact, ConsoleError> {
        let batch = self.last_batch.snapshot().ok_or(ConsoleError::NoBatch)?;
        Ok(export(&batch, format)?)
    }

    /// The batch generated last, if any.
    #[must_use]
    pub fn last_batch(&self) -> Option<Arc<Batch>> {
        self.last_batch.snapshot()
    }
}

/// Run the parsed command line against the real terminal.
///
/// # Errors
///
/// Returns any [`ConsoleError`] raised by the selected mode.
pub fn run(cli: Cli) -> Result<(), ConsoleError> {
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Generate(args) => run_generate(&args, &mut stdout),
        Command::Interactive => run_interactive(
            &mut ConsoleSession::default(),
            &mut DialoguerPrompter::default(),
            &mut stdout,
        ),
    }
}

/// Generate one batch and deliver its export.
///
/// Text formats go to `out` unless `--output` names a file. Binary formats
/// need a file.
///
/// # Errors
///
/// Returns [`ConsoleError`] when the request is rejected, the export fails or
/// the output cannot be written.
pub fn run_generate(args: &GenerateArgs, out: &mut impl Write) -> Result<(), ConsoleError> {
    let session = ConsoleSession::new(args.options());
    session.generate(args.data_type, args.count)?;
    let artifact = session.export(args.format)?;

    match &args.output {
        Some(path) => {
            write_atomic(path, artifact.bytes())?;
            info!(path = %path, format = %args.format, "wrote export");
        }
        None if args.format.is_text() => out.write_all(artifact.bytes())?,
        None => {
            return Err(ConsoleError::OutputRequired {
                format: args.format,
            });
        }
    }
    Ok(())
}

/// Terminal interactions used by the interactive loop.
pub trait Prompter {
    /// Choose one of `items`, returning its index.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Prompt`] when the terminal cannot be read.
    fn select(&mut self, prompt: &str, items: &[&str], default: usize)
    -> Result<usize, ConsoleError>;

    /// Read a line of text.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Prompt`] when the terminal cannot be read.
    fn input(&mut self, prompt: &str, default: &str) -> Result<String, ConsoleError>;

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Prompt`] when the terminal cannot be read.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, ConsoleError>;
}

/// [`Prompter`] backed by `dialoguer` widgets.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn select(
        &mut self,
        prompt: &str,
        items: &[&str],
        default: usize,
    ) -> Result<usize, ConsoleError> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn input(&mut self, prompt: &str, default: &str) -> Result<String, ConsoleError> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_owned())
            .interact_text()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, ConsoleError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEntry {
    Generate,
    Export,
    Preview,
    Settings,
    Quit,
}

impl MenuEntry {
    const ALL: [Self; 5] = [
        Self::Generate,
        Self::Export,
        Self::Preview,
        Self::Settings,
        Self::Quit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Generate => "Daten generieren",
            Self::Export => "Daten exportieren",
            Self::Preview => "Vorschau anzeigen",
            Self::Settings => "Einstellungen",
            Self::Quit => "Beenden",
        }
    }
}

const RANDOM_CHOICE: &str = "Zufällig";
const NO_EXTRA: &str = "Keine";

/// Drive the menu loop until the user quits.
///
/// Rejected requests and exports before generation are reported on `out` and
/// the loop continues. Terminal and file failures end the loop.
///
/// # Errors
///
/// Returns [`ConsoleError::Prompt`], [`ConsoleError::Output`] or
/// [`ConsoleError::Io`] when the terminal or file system fails.
pub fn run_interactive<P, W>(
    session: &mut ConsoleSession,
    prompter: &mut P,
    out: &mut W,
) -> Result<(), ConsoleError>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    writeln!(
        out,
        "Willkommen beim Testdaten-Generator für einen Coffeeshop!"
    )?;
    let labels = MenuEntry::ALL.map(MenuEntry::label);
    loop {
        let choice = prompter.select("Was möchten Sie tun?", &labels, 0)?;
        let entry = MenuEntry::ALL.get(choice).copied().unwrap_or(MenuEntry::Quit);
        let outcome = match entry {
            MenuEntry::Generate => generate_step(session, prompter, out),
            MenuEntry::Export => export_step(session, prompter, out),
            MenuEntry::Preview => preview_step(session, out),
            MenuEntry::Settings => settings_step(session, prompter),
            MenuEntry::Quit => return Ok(()),
        };
        match outcome {
            Ok(()) => {}
            Err(
                err @ (ConsoleError::Generation(_)
                | ConsoleError::Export(_)
                | ConsoleError::NoBatch),
            ) => writeln!(out, "⚠️ {err}")?,
            Err(err) => return Err(err),
        }
    }
}

fn generate_step<P, W>(
    session: &mut ConsoleSession,
    prompter: &mut P,
    out: &mut W,
) -> Result<(), ConsoleError>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    let type_names = DataType::ALL.map(DataType::as_str);
    let type_index = prompter.select("Datentyp wählen", &type_names, 0)?;
    let data_type = DataType::ALL
        .get(type_index)
        .copied()
        .unwrap_or(DataType::Registration);

    let raw_count = prompter.input("Anzahl der Datensätze", "1")?;
    let Ok(count) = raw_count.trim().parse::<i64>() else {
        writeln!(out, "⚠️ '{}' ist keine ganze Zahl", raw_count.trim())?;
        return Ok(());
    };

    let mut options = *session.options();
    options.city = choose_optional(prompter, "Stadt wählen", &City::ALL, City::label)?;
    options.country = choose_optional(prompter, "Land wählen", &Country::ALL, Country::label)?;
    if data_type == DataType::Order {
        options.order = order_options(prompter)?;
    }
    session.set_options(options);

    let batch = session.generate(data_type, count)?;
    writeln!(out, "{} Datensätze generiert!", batch.len())?;
    write_preview(&batch, out)
}

fn order_options<P>(prompter: &mut P) -> Result<OrderOptions, ConsoleError>
where
    P: Prompter + ?Sized,
{
    let with_customer = prompter.confirm("Kundendaten anhängen?", false)?;
    let extra = choose_optional_with(
        prompter,
        "Zusatzfeld wählen",
        NO_EXTRA,
        &OrderExtra::ALL,
        OrderExtra::field_name,
    )?;
    Ok(OrderOptions {
        with_customer,
        extra,
    })
}

fn export_step<P, W>(
    session: &ConsoleSession,
    prompter: &mut P,
    out: &mut W,
) -> Result<(), ConsoleError>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    if session.last_batch().is_none() {
        return Err(ConsoleError::NoBatch);
    }
    let format_names = ExportFormat::ALL.map(ExportFormat::as_str);
    let format_index = prompter.select("Exportformat auswählen", &format_names, 0)?;
    let format = ExportFormat::ALL
        .get(format_index)
        .copied()
        .unwrap_or(ExportFormat::Json);
    let target = prompter.input("Zieldatei", &format.file_name())?;

    let artifact = session.export(format)?;
    let path = Utf8Path::new(target.trim());
    write_atomic(path, artifact.bytes())?;
    writeln!(out, "Daten wurden nach {path} exportiert.")?;
    Ok(())
}

fn preview_step<W>(session: &ConsoleSession, out: &mut W) -> Result<(), ConsoleError>
where
    W: Write + ?Sized,
{
    let batch = session.last_batch().ok_or(ConsoleError::NoBatch)?;
    write_preview(&batch, out)
}

fn settings_step<P>(session: &mut ConsoleSession, prompter: &mut P) -> Result<(), ConsoleError>
where
    P: Prompter + ?Sized,
{
    let current = *session.options();
    let codes = Locale::ALL.map(Locale::code);
    let default_index = Locale::ALL
        .iter()
        .position(|locale| *locale == current.locale)
        .unwrap_or_default();
    let locale_index = prompter.select("Sprache wählen", &codes, default_index)?;
    let locale = Locale::ALL.get(locale_index).copied().unwrap_or_default();
    let valid = prompter.confirm("Gültige Zugangsdaten erzeugen?", current.validity.is_valid())?;
    session.set_options(
        current
            .with_locale(locale)
            .with_validity(Validity::from_flag(valid)),
    );
    Ok(())
}

fn write_preview<W>(batch: &Batch, out: &mut W) -> Result<(), ConsoleError>
where
    W: Write + ?Sized,
{
    let preview = export(&batch.head(PREVIEW_ROWS), ExportFormat::Txt)?;
    out.write_all(preview.bytes())?;
    if batch.len() > PREVIEW_ROWS {
        writeln!(out, "... {} weitere", batch.len().saturating_sub(PREVIEW_ROWS))?;
    }
    Ok(())
}

fn choose_optional<P, T>(
    prompter: &mut P,
    prompt: &str,
    choices: &[T],
    label: fn(T) -> &'static str,
) -> Result<Option<T>, ConsoleError>
where
    P: Prompter + ?Sized,
    T: Copy,
{
    choose_optional_with(prompter, prompt, RANDOM_CHOICE, choices, label)
}

/// Offer `none_label` followed by every choice; index 0 selects nothing.
fn choose_optional_with<P, T>(
    prompter: &mut P,
    prompt: &str,
    none_label: &str,
    choices: &[T],
    label: fn(T) -> &'static str,
) -> Result<Option<T>, ConsoleError>
where
    P: Prompter + ?Sized,
    T: Copy,
{
    let items: Vec<&str> = std::iter::once(none_label)
        .chain(choices.iter().copied().map(label))
        .collect();
    let index = prompter.select(prompt, &items, 0)?;
    Ok(index
        .checked_sub(1)
        .and_then(|position| choices.get(position))
        .copied())
}
