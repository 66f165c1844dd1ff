//! Subcommand execution.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use freight_core::density::{compute, CalculationResult};
use freight_core::errors::{FreightError, FreightResult};
use freight_core::measurement::{Field, MeasurementInputs};
use freight_core::persistence::{DraftStore, KeyValueStore, MemoryStore};
use freight_core::report::{DocumentSink, FileSink, PageCanvas, TypstCanvas};
use freight_core::FileStore;

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::output::{format_classes, format_inputs, format_result, format_templates};
use crate::session::Session;

/// Where the draft lives for this run
#[derive(Debug)]
pub enum DraftBackend {
    File(FileStore),
    /// Used when the data directory cannot be opened; the draft lasts for
    /// this run only
    Memory(MemoryStore),
}

impl DraftBackend {
    /// Open the file store in the configured data directory, falling back to
    /// memory with a warning.
    pub fn open(config: &AppConfig) -> Self {
        let dir = config.data_dir();
        match FileStore::open(&dir) {
            Ok(store) => DraftBackend::File(store),
            Err(e) => {
                tracing::warn!(
                    data_dir = %dir.display(),
                    error = %e,
                    "data directory unavailable; the draft will not be saved"
                );
                DraftBackend::Memory(MemoryStore::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, DraftBackend::File(_))
    }
}

impl KeyValueStore for DraftBackend {
    fn get(&self, key: &str) -> FreightResult<Option<String>> {
        match self {
            DraftBackend::File(store) => store.get(key),
            DraftBackend::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> FreightResult<()> {
        match self {
            DraftBackend::File(store) => store.set(key, value),
            DraftBackend::Memory(store) => store.set(key, value),
        }
    }
}

#[derive(Serialize)]
struct CalcOutput<'a> {
    inputs: &'a MeasurementInputs,
    result: &'a CalculationResult,
}

pub fn execute(command: Commands, config: &AppConfig) -> FreightResult<()> {
    match command {
        Commands::Calc {
            length,
            width,
            height,
            weight,
            metric,
            palletized,
            json,
        } => {
            let inputs = MeasurementInputs {
                length,
                width,
                height,
                weight,
                use_metric: metric,
                palletized,
            };

            let backend = DraftBackend::open(config);
            if backend.is_persistent() {
                // Failures are already logged by the draft store
                let _ = DraftStore::new(backend).save(&inputs);
            }

            println!("{}", calc_output(&inputs, json)?);
            Ok(())
        }
        Commands::Classes => {
            println!("{}", format_classes());
            Ok(())
        }
        Commands::Templates => {
            println!("{}", format_templates());
            Ok(())
        }
        Commands::Shell => run_shell(config),
    }
}

/// Text or JSON output for `calc`.
///
/// Incomplete inputs are an error here, naming the first unusable field.
pub fn calc_output(inputs: &MeasurementInputs, json: bool) -> FreightResult<String> {
    let Some(result) = compute(inputs) else {
        let field = Field::ALL
            .into_iter()
            .find(|&field| inputs.positive_value(field).is_none())
            .unwrap_or(Field::Length);
        return Err(FreightError::invalid_input(
            field.name(),
            inputs.field(field),
            "expected a number greater than zero",
        ));
    };

    if json {
        Ok(serde_json::to_string_pretty(&CalcOutput {
            inputs,
            result: &result,
        })?)
    } else {
        Ok(format!(
            "{}\n{}",
            format_inputs(inputs),
            format_result(inputs, Some(&result))
        ))
    }
}

fn run_shell(config: &AppConfig) -> FreightResult<()> {
    let backend = DraftBackend::open(config);
    if let DraftBackend::File(store) = &backend {
        tracing::info!(data_dir = %store.dir().display(), "starting shell");
    }

    let sink = FileSink::new(config.output_dir());
    let mut session = Session::open(DraftStore::new(backend), TypstCanvas::letter, sink, config.prepared_by.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), &mut stdout)
        .map_err(|e| FreightError::internal(format!("terminal I/O failed: {}", e)))
}

/// Read commands until `quit` or end of input.
pub fn run_loop<S, C, K, R, W>(session: &mut Session<S, C, K>, input: R, out: &mut W) -> io::Result<()>
where
    S: KeyValueStore,
    C: PageCanvas,
    K: DocumentSink<C::Document>,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Freight Class Pro - type 'help' for commands")?;
    writeln!(out, "{}", session.handle_line("show").text)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", session.prompt())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            if session.cancel_dialog() {
                writeln!(out, "Cancelled.")?;
            }
            break;
        };
        let reply = session.handle_line(&line?);
        if !reply.text.is_empty() {
            writeln!(out, "{}", reply.text)?;
        }
        if reply.quit {
            break;
        }
    }
    Ok(())
}
