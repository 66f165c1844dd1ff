//! Interactive session state.
//!
//! A [`Session`] owns the current draft and its result, the saved loads of
//! this run and the open dialog. Each line of user input becomes a
//! [`Reply`]; the session never prints by itself.

use chrono::Local;

use freight_core::density::{compute, CalculationResult};
use freight_core::loads::{LoadCollection, LoadId};
use freight_core::measurement::{Field, MeasurementInputs};
use freight_core::persistence::{DraftStore, KeyValueStore};
use freight_core::report::{render_multi, render_single, DocumentSink, MultiReport, PageCanvas, SingleReport};
use freight_core::templates::find_template;

use crate::dialog::{Confirmed, Dialog, DocumentKind};
use crate::output::{format_classes, format_inputs, format_loads, format_result, format_templates};

pub const PROMPT: &str = "freight> ";

pub const HELP: &str = "\
Commands:
  set <field> <value>   Set length, width, height or weight (l, w, h, wt)
  metric on|off         Enter dimensions in cm and weight in kg
  pallet on|off         Apply the 48 x 40 in pallet footprint floor
  show                  Show inputs and result
  reset                 Clear the inputs (keeps the unit system)
  templates             List quick templates
  template <name|#>     Load a quick template
  prepared-by [name]    Set or clear the report's Prepared By line
  save                  Save the current calculation as a load
  loads                 List saved loads
  remove <id>           Remove a saved load
  clear                 Remove all saved loads
  pdf                   Write a report for the current calculation
  export                Write a report for all saved loads
  classes               Show the density to class table
  help                  Show this help
  quit                  Leave the shell";

/// What the shell should do after a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Reply {
            text: String::new(),
            quit: true,
        }
    }
}

pub struct Session<S, C, K> {
    inputs: MeasurementInputs,
    result: Option<CalculationResult>,
    drafts: DraftStore<S>,
    loads: LoadCollection,
    prepared_by: Option<String>,
    dialog: Dialog,
    new_canvas: fn() -> C,
    sink: K,
}

impl<S, C, K> Session<S, C, K>
where
    S: KeyValueStore,
    C: PageCanvas,
    K: DocumentSink<C::Document>,
{
    /// Start a session from the saved draft.
    pub fn open(drafts: DraftStore<S>, new_canvas: fn() -> C, sink: K, prepared_by: Option<String>) -> Self {
        let inputs = drafts.load();
        let result = compute(&inputs);
        tracing::debug!(complete = result.is_some(), "session opened from saved draft");

        Session {
            inputs,
            result,
            drafts,
            loads: LoadCollection::new(),
            prepared_by,
            dialog: Dialog::default(),
            new_canvas,
            sink,
        }
    }

    /// Prompt for the next line: the open dialog's question, or the shell prompt
    pub fn prompt(&self) -> String {
        self.dialog.prompt().unwrap_or_else(|| PROMPT.to_string())
    }

    /// Close an open dialog without running it. Returns whether one was open.
    pub fn cancel_dialog(&mut self) -> bool {
        let was_open = self.dialog.is_open();
        self.dialog.cancel();
        was_open
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        if self.dialog.is_open() {
            return match self.dialog.submit(line) {
                Some(confirmed) => self.run_confirmed(confirmed),
                None => Reply::text("Cancelled."),
            };
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "" => Reply::text(""),
            "set" => self.set_field(rest),
            "metric" => self.toggle(rest, |inputs, on| inputs.use_metric = on),
            "pallet" | "palletized" => self.toggle(rest, |inputs, on| inputs.palletized = on),
            "show" => Reply::text(self.summary()),
            "reset" => {
                let inputs = self.inputs.reset();
                self.update(inputs)
            }
            "templates" => Reply::text(format_templates()),
            "template" => match find_template(rest) {
                Some(template) => {
                    self.dialog.open_confirm_template(template);
                    Reply::text("")
                }
                None => Reply::text(format!("No template matches '{}'. Try 'templates'.", rest)),
            },
            "prepared-by" => {
                self.prepared_by = Some(rest.to_string()).filter(|name| !name.is_empty());
                match &self.prepared_by {
                    Some(name) => Reply::text(format!("Reports will be prepared by {}.", name)),
                    None => Reply::text("Prepared By cleared."),
                }
            }
            "save" => {
                if self.result.is_none() {
                    return Reply::text(format_result(&self.inputs, None));
                }
                self.dialog.open_name_load();
                Reply::text("")
            }
            "loads" => Reply::text(format_loads(&self.loads)),
            "remove" => match rest.parse::<u64>() {
                Ok(id) => match self.loads.remove(LoadId(id)) {
                    Some(record) => Reply::text(format!("Removed load #{} ({}).", record.id, record.name)),
                    None => Reply::text(format!("No saved load #{}.", id)),
                },
                Err(_) => Reply::text("Usage: remove <id>"),
            },
            "clear" => {
                let count = self.loads.len();
                self.loads.clear();
                Reply::text(format!("Removed {} saved load(s).", count))
            }
            "pdf" => {
                if self.result.is_none() {
                    return Reply::text(format_result(&self.inputs, None));
                }
                self.dialog.open_name_document(DocumentKind::Single);
                Reply::text("")
            }
            "export" => {
                if self.loads.is_empty() {
                    return Reply::text("No saved loads to export.");
                }
                self.dialog.open_name_document(DocumentKind::Multi);
                Reply::text("")
            }
            "classes" => Reply::text(format_classes()),
            "help" | "?" => Reply::text(HELP),
            "quit" | "exit" => Reply::quit(),
            other => Reply::text(format!("Unknown command '{}'. Type 'help' for commands.", other)),
        }
    }

    fn summary(&self) -> String {
        format!(
            "{}\n{}",
            format_inputs(&self.inputs),
            format_result(&self.inputs, self.result.as_ref())
        )
    }

    /// Replace the inputs, recompute and save the draft.
    fn update(&mut self, inputs: MeasurementInputs) -> Reply {
        self.inputs = inputs;
        self.result = compute(&self.inputs);
        // Failures are already logged by the draft store
        let _ = self.drafts.save(&self.inputs);
        Reply::text(self.summary())
    }

    fn set_field(&mut self, args: &str) -> Reply {
        let (name, value) = match args.split_once(char::is_whitespace) {
            Some((name, value)) => (name, value.trim()),
            None => (args, ""),
        };
        let Some(field) = Field::from_name(name) else {
            return Reply::text(format!(
                "Unknown field '{}'. Fields: length, width, height, weight.",
                name
            ));
        };

        let mut inputs = self.inputs.clone();
        inputs.set_field(field, value);
        self.update(inputs)
    }

    fn toggle(&mut self, arg: &str, apply: fn(&mut MeasurementInputs, bool)) -> Reply {
        let on = match arg.to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" => true,
            "off" | "no" | "false" => false,
            _ => return Reply::text("Expected 'on' or 'off'."),
        };
        let mut inputs = self.inputs.clone();
        apply(&mut inputs, on);
        self.update(inputs)
    }

    fn run_confirmed(&mut self, confirmed: Confirmed) -> Reply {
        match confirmed {
            Confirmed::SaveLoad { name } => match self.result.clone() {
                Some(result) => {
                    let record = self.loads.add(&name, self.inputs.clone(), result);
                    Reply::text(format!(
                        "Saved load #{}: {} (class {}).",
                        record.id, record.name, record.result.freight_class
                    ))
                }
                None => Reply::text(format_result(&self.inputs, None)),
            },
            Confirmed::ApplyTemplate { template } => {
                let inputs = template.apply(&self.inputs);
                tracing::debug!(template = template.name, "applied quick template");
                self.update(inputs)
            }
            Confirmed::Export { kind, label } => self.export(kind, label),
        }
    }

    fn export(&mut self, kind: DocumentKind, file_label: String) -> Reply {
        let generated_at = Local::now().naive_local();
        let canvas = (self.new_canvas)();

        let rendered = match kind {
            DocumentKind::Single => {
                let report = SingleReport {
                    inputs: self.inputs.clone(),
                    result: self.result.clone(),
                    file_label,
                    prepared_by: self.prepared_by.clone(),
                    generated_at,
                };
                render_single(canvas, &mut self.sink, &report)
            }
            DocumentKind::Multi => {
                let report = MultiReport {
                    records: self.loads.records().to_vec(),
                    file_label,
                    prepared_by: self.prepared_by.clone(),
                    generated_at,
                };
                render_multi(canvas, &mut self.sink, &report)
            }
        };

        match rendered {
            Ok(Some(filename)) => Reply::text(format!("Wrote {}.", filename)),
            Ok(None) => Reply::text("Nothing to export."),
            Err(e) => {
                tracing::error!(error = %e, "report generation failed");
                Reply::text(format!("Could not create the report: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_core::persistence::{MemoryStore, DRAFT_KEY};
    use freight_core::report::{MemorySink, RecordedDocument, RecordingCanvas};

    type TestSession = Session<MemoryStore, RecordingCanvas, MemorySink<RecordedDocument>>;

    fn session_with(store: MemoryStore) -> TestSession {
        Session::open(DraftStore::new(store), RecordingCanvas::letter, MemorySink::new(), None)
    }

    fn session() -> TestSession {
        session_with(MemoryStore::new())
    }

    fn run(session: &mut TestSession, lines: &[&str]) -> Reply {
        let mut reply = Reply::text("");
        for line in lines {
            reply = session.handle_line(line);
        }
        reply
    }

    fn saved_draft(session: &TestSession) -> Option<String> {
        session.drafts.store().get(DRAFT_KEY).unwrap()
    }

    #[test]
    fn test_set_fields_computes_result() {
        let mut session = session();
        let reply = run(&mut session, &["set l 24", "set w 18", "set h 12", "set weight 45"]);

        assert!(reply.text.ends_with("Freight Class: 70"));
        assert_eq!(session.result.as_ref().unwrap().density_pcf, 15.0);
        assert!(saved_draft(&session).unwrap().contains("\"weight\":\"45\""));
    }

    #[test]
    fn test_restores_draft_on_open() {
        let mut store = MemoryStore::new();
        store.insert_raw(
            DRAFT_KEY,
            r#"{"length":"24","width":"18","height":"12","weight":"45","useMetric":false,"palletized":true}"#,
        );
        let session = session_with(store);
        assert!(session.inputs.palletized);
        assert_eq!(session.result.as_ref().unwrap().freight_class, "250");
    }

    #[test]
    fn test_failing_draft_save_does_not_interrupt_input() {
        let mut store = MemoryStore::new();
        store.set_read_only(true);
        let mut session = session_with(store);

        let reply = run(&mut session, &["set l 24", "set w 18", "set h 12", "set wt 45"]);
        assert!(reply.text.ends_with("Freight Class: 70"));
        assert!(session.result.is_some());
        assert_eq!(saved_draft(&session), None);
    }

    #[test]
    fn test_cancel_dialog() {
        let mut session = session();
        assert!(!session.cancel_dialog());
        run(&mut session, &["template 1"]);
        assert!(session.cancel_dialog());
        assert_eq!(session.prompt(), PROMPT);
    }

    #[test]
    fn test_unknown_field_and_command() {
        let mut session = session();
        assert!(session.handle_line("set depth 4").text.starts_with("Unknown field 'depth'"));
        assert!(session.handle_line("frobnicate").text.starts_with("Unknown command"));
        assert_eq!(session.handle_line("   ").text, "");
    }

    #[test]
    fn test_toggles_and_reset() {
        let mut session = session();
        run(&mut session, &["metric on", "pallet on", "set l 120"]);
        assert!(session.inputs.use_metric);
        assert!(session.inputs.palletized);

        session.handle_line("reset");
        assert!(session.inputs.use_metric);
        assert!(!session.inputs.palletized);
        assert_eq!(session.inputs.length, "");
        assert_eq!(session.handle_line("metric maybe").text, "Expected 'on' or 'off'.");
    }

    #[test]
    fn test_template_requires_confirmation() {
        let mut session = session();
        run(&mut session, &["metric on", "set l 5", "template furniture"]);
        assert!(session.dialog.is_open());
        assert!(session.prompt().contains("Furniture (Couch)"));

        assert_eq!(session.handle_line("n").text, "Cancelled.");
        assert_eq!(session.inputs.length, "5");

        run(&mut session, &["template 2", "y"]);
        assert_eq!(session.inputs.length, "96");
        assert!(!session.inputs.use_metric);
        assert_eq!(session.prompt(), PROMPT);
    }

    #[test]
    fn test_save_needs_complete_inputs() {
        let mut session = session();
        let reply = session.handle_line("save");
        assert!(reply.text.starts_with("Incomplete"));
        assert!(!session.dialog.is_open());
    }

    #[test]
    fn test_save_remove_and_clear_loads() {
        let mut session = session();
        let reply = run(&mut session, &["template 1", "y", "save", "Crate A"]);
        assert_eq!(reply.text, "Saved load #1: Crate A (class 70).");

        let reply = run(&mut session, &["save", ""]);
        assert_eq!(reply.text, "Saved load #2: Load 2 (class 70).");
        assert_eq!(session.loads.len(), 2);

        assert_eq!(session.handle_line("remove 1").text, "Removed load #1 (Crate A).");
        assert_eq!(session.handle_line("remove 1").text, "No saved load #1.");
        assert_eq!(session.handle_line("remove x").text, "Usage: remove <id>");
        assert_eq!(session.handle_line("clear").text, "Removed 1 saved load(s).");
        assert!(session.loads.is_empty());
    }

    #[test]
    fn test_cancelled_save_adds_nothing() {
        let mut session = session();
        run(&mut session, &["template 1", "y", "save", "cancel"]);
        assert!(session.loads.is_empty());
    }

    #[test]
    fn test_pdf_flow_delivers_once() {
        let mut session = session();
        run(&mut session, &["template 1", "y", "prepared-by Dock 3", "pdf"]);
        assert!(session.sink.delivered.is_empty());

        let reply = session.handle_line("Order #12345!");
        assert_eq!(reply.text, "Wrote order--12345-.pdf.");
        assert_eq!(session.sink.delivered.len(), 1);

        let texts = session.sink.last().unwrap().1.texts().join("\n");
        assert!(texts.contains("Prepared By: Dock 3"));
    }

    #[test]
    fn test_pdf_without_result_opens_nothing() {
        let mut session = session();
        assert!(session.handle_line("pdf").text.starts_with("Incomplete"));
        assert!(!session.dialog.is_open());
    }

    #[test]
    fn test_export_flow() {
        let mut session = session();
        assert_eq!(session.handle_line("export").text, "No saved loads to export.");

        run(&mut session, &["template 1", "y", "save", "", "template 4", "y", "save", ""]);
        let reply = run(&mut session, &["export", ""]);
        assert_eq!(reply.text, "Wrote multi-load-report.pdf.");

        let document = &session.sink.last().unwrap().1;
        assert!(document
            .texts()
            .iter()
            .any(|t| t.starts_with("Total Loads: 2 | Generated: ")));
        assert!(document.texts().contains(&"2. Load 2"));
    }

    #[test]
    fn test_quit() {
        let mut session = session();
        assert!(session.handle_line("quit").quit);
        assert!(!session.handle_line("help").quit);
    }
}
