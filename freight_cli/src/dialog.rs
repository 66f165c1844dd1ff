//! Prompt flow for actions that need a name or a confirmation.
//!
//! At most one dialog is open. `submit` and `cancel` always close it; only a
//! submitted dialog yields a [`Confirmed`] action for the session to run.

use freight_core::report::{MULTI_DEFAULT_STEM, SINGLE_DEFAULT_STEM};
use freight_core::templates::QuickTemplate;

/// Which report a document-name dialog is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Single,
    Multi,
}

impl DocumentKind {
    pub fn default_stem(self) -> &'static str {
        match self {
            DocumentKind::Single => SINGLE_DEFAULT_STEM,
            DocumentKind::Multi => MULTI_DEFAULT_STEM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    NameLoad,
    NameDocument { kind: DocumentKind },
    ConfirmTemplate { template: &'static QuickTemplate },
}

/// An action the user has confirmed
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmed {
    SaveLoad { name: String },
    Export { kind: DocumentKind, label: String },
    ApplyTemplate { template: &'static QuickTemplate },
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    pub fn open_name_load(&mut self) {
        *self = Dialog::NameLoad;
    }

    pub fn open_name_document(&mut self, kind: DocumentKind) {
        *self = Dialog::NameDocument { kind };
    }

    pub fn open_confirm_template(&mut self, template: &'static QuickTemplate) {
        *self = Dialog::ConfirmTemplate { template };
    }

    /// Text shown while waiting for the user's answer
    pub fn prompt(&self) -> Option<String> {
        match self {
            Dialog::Closed => None,
            Dialog::NameLoad => Some("Load name (blank for default, 'cancel' to abort): ".to_string()),
            Dialog::NameDocument { kind } => Some(format!(
                "File name (blank for {}, 'cancel' to abort): ",
                kind.default_stem()
            )),
            Dialog::ConfirmTemplate { template } => Some(format!(
                "Replace current inputs with {} ({})? [y/N]: ",
                template.name,
                template.summary()
            )),
        }
    }

    /// Answer the open dialog and close it.
    ///
    /// Returns the confirmed action, or `None` when no dialog was open or the
    /// answer declined it.
    pub fn submit(&mut self, answer: &str) -> Option<Confirmed> {
        let answer = answer.trim();
        let dialog = std::mem::take(self);
        if answer.eq_ignore_ascii_case("cancel") {
            return None;
        }

        match dialog {
            Dialog::Closed => None,
            Dialog::NameLoad => Some(Confirmed::SaveLoad {
                name: answer.to_string(),
            }),
            Dialog::NameDocument { kind } => Some(Confirmed::Export {
                kind,
                label: answer.to_string(),
            }),
            Dialog::ConfirmTemplate { template } => {
                let yes = answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes");
                yes.then_some(Confirmed::ApplyTemplate { template })
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = Dialog::Closed;
    }
}
