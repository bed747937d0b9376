//! # Controller — the page's single state object
//!
//! Every user action and every async completion becomes a [`Command`].
//! [`Controller::dispatch`] applies it to the state and returns the
//! [`Effect`]s the view layer has to carry out (HTTP request, clipboard write,
//! timers, `data-theme`). The controller never awaits anything itself, so it
//! can be driven directly in tests.
//!
//! ## Submission lifecycle
//!
//! ```text
//! Idle → Validating ─┬─ invalid ─→ error shown ─────────────→ Idle
//!                    └─ valid ───→ Loading ─┬─ Ok  → result shown
//!                                           └─ Err → error shown
//! ```
//!
//! [`Command::Completed`] always clears the loading flag of the submission it
//! belongs to. Completions for anything but the latest submission are dropped.
//!
//! ## Notices
//!
//! Errors and the copy confirmation expire on a timer. Each one gets an id;
//! the expiry command carries that id and only clears the notice it was
//! scheduled for, so an old timer cannot hide a newer message.

use api::{ApiError, CryptoOutput, CryptoRequest, Mode};
use store::config::LimitsConfig;
use store::{PreferenceStore, Theme};

use crate::messages;
use crate::platform::CopyOutcome;
use crate::theme::{ThemeIcon, ThemeManager};

/// Identifies a submission, an error notice or a copy confirmation.
pub type NoticeId = u64;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    SetMode(Mode),
    ToggleTheme,
    SystemThemeChanged(bool),
    EditText(String),
    EditPassword(String),
    Submit,
    Completed {
        seq: NoticeId,
        result: Result<CryptoOutput, ApiError>,
    },
    Copy,
    CopyFinished(CopyOutcome),
    DismissError(NoticeId),
    ResetCopyFeedback(NoticeId),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ApplyTheme(Theme),
    Request {
        seq: NoticeId,
        mode: Mode,
        request: CryptoRequest,
    },
    WriteClipboard(String),
    ScheduleErrorDismiss(NoticeId),
    ScheduleCopyReset(NoticeId),
}

/// What the result panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    /// Fresh for every completed request; keys the result panel.
    pub id: NoticeId,
    pub text: String,
    pub stats: String,
}

/// A message in the error banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyIcon {
    Copy,
    Copied,
}

pub struct Controller<S> {
    mode: Mode,
    theme: ThemeManager<S>,
    limits: LimitsConfig,
    text: String,
    password: String,
    loading: bool,
    in_flight: Option<NoticeId>,
    result: Option<ResultView>,
    error: Option<Notice>,
    copy_feedback: Option<NoticeId>,
    next_id: NoticeId,
}

impl<S: PreferenceStore> Controller<S> {
    pub fn new(store: S, system_prefers_dark: bool, limits: LimitsConfig) -> Self {
        Self {
            mode: Mode::default(),
            theme: ThemeManager::new(store, system_prefers_dark),
            limits,
            text: String::new(),
            password: String::new(),
            loading: false,
            in_flight: None,
            result: None,
            error: None,
            copy_feedback: None,
            next_id: 0,
        }
    }

    /// Effects to run once at startup.
    pub fn initial_effects(&self) -> Vec<Effect> {
        vec![Effect::ApplyTheme(self.theme.theme())]
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn theme_icon(&self) -> ThemeIcon {
        self.theme.icon()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }

    pub fn copy_icon(&self) -> CopyIcon {
        if self.copy_feedback.is_some() {
            CopyIcon::Copied
        } else {
            CopyIcon::Copy
        }
    }

    fn next_id(&mut self) -> NoticeId {
        self.next_id += 1;
        self.next_id
    }

    fn show_error(&mut self, message: String) -> Vec<Effect> {
        let id = self.next_id();
        self.error = Some(Notice { id, message });
        vec![Effect::ScheduleErrorDismiss(id)]
    }

    fn clear_output(&mut self) {
        self.result = None;
        self.error = None;
        self.copy_feedback = None;
    }

    pub fn dispatch(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::SetMode(mode) => {
                self.mode = mode;
                self.clear_output();
                Vec::new()
            }
            Command::ToggleTheme => vec![Effect::ApplyTheme(self.theme.toggle())],
            Command::SystemThemeChanged(prefers_dark) => self
                .theme
                .system_changed(prefers_dark)
                .map(Effect::ApplyTheme)
                .into_iter()
                .collect(),
            Command::EditText(text) => {
                self.text = text;
                Vec::new()
            }
            Command::EditPassword(password) => {
                self.password = password;
                Vec::new()
            }
            Command::Submit => self.submit(),
            Command::Completed { seq, result } => self.complete(seq, result),
            Command::Copy => self.copy(),
            Command::CopyFinished(outcome) => self.copy_finished(outcome),
            Command::DismissError(id) => {
                if self.error.as_ref().is_some_and(|n| n.id == id) {
                    self.error = None;
                }
                Vec::new()
            }
            Command::ResetCopyFeedback(id) => {
                if self.copy_feedback == Some(id) {
                    self.copy_feedback = None;
                }
                Vec::new()
            }
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.loading {
            tracing::debug!("submit ignored, a request is already in flight");
            return Vec::new();
        }
        self.clear_output();

        let request = match CryptoRequest::validated(&self.text, &self.password, &self.limits) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("rejected locally: {e}");
                return self.show_error(messages::validation_message(&e));
            }
        };

        let seq = self.next_id();
        self.loading = true;
        self.in_flight = Some(seq);
        vec![Effect::Request {
            seq,
            mode: self.mode,
            request,
        }]
    }

    fn complete(&mut self, seq: NoticeId, result: Result<CryptoOutput, ApiError>) -> Vec<Effect> {
        if self.in_flight != Some(seq) {
            tracing::debug!(seq, "dropping stale response");
            return Vec::new();
        }
        self.in_flight = None;
        self.loading = false;

        match result {
            Ok(output) => {
                let time = output.timestamp.and_then(messages::format_timestamp);
                let stats = messages::stats_line(output.statistic, time.as_deref());
                let id = self.next_id();
                self.result = Some(ResultView {
                    id,
                    text: output.text,
                    stats,
                });
                Vec::new()
            }
            Err(e) => {
                tracing::error!("API Error: {e}");
                self.show_error(messages::localize_error(&e))
            }
        }
    }

    fn copy(&mut self) -> Vec<Effect> {
        match self.result.as_ref().map(|r| r.text.clone()) {
            Some(text) if !text.is_empty() => vec![Effect::WriteClipboard(text)],
            _ => self.show_error(messages::NOTHING_TO_COPY.to_string()),
        }
    }

    fn copy_finished(&mut self, outcome: CopyOutcome) -> Vec<Effect> {
        match outcome {
            CopyOutcome::Copied => {
                let id = self.next_id();
                self.copy_feedback = Some(id);
                vec![Effect::ScheduleCopyReset(id)]
            }
            CopyOutcome::CopiedWithFallback => {
                self.show_error(messages::COPIED_WITH_FALLBACK.to_string())
            }
            CopyOutcome::Failed(e) => {
                tracing::warn!("copy failed: {e}");
                self.show_error(messages::COPY_FAILED.to_string())
            }
        }
    }
}
