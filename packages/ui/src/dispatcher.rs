//! Runs controller effects inside the Dioxus runtime.
//!
//! [`Dispatcher`] is provided as context by [`crate::SifraApp`]. Components
//! call [`Dispatcher::send`] from their event handlers; the dispatcher feeds
//! the command to the [`Controller`] and spawns a task for every effect that
//! has to wait on something. Those tasks report back with another command.

use api::{CryptoApi, HttpCryptoApi};
use dioxus::prelude::*;
use store::config::UiConfig;

use crate::controller::{Command, Controller, Effect};
use crate::platform;
use crate::storage::AppStore;

pub type AppController = Controller<AppStore>;

#[derive(Clone)]
pub struct Dispatcher {
    state: Signal<AppController>,
    api: HttpCryptoApi,
    ui: UiConfig,
}

impl Dispatcher {
    pub fn new(state: Signal<AppController>, api: HttpCryptoApi, ui: UiConfig) -> Self {
        Self { state, api, ui }
    }

    /// The controller, for rendering.
    pub fn state(&self) -> Signal<AppController> {
        self.state
    }

    pub fn send(&self, command: Command) {
        let mut state = self.state;
        let effects = state.write().dispatch(command);
        self.run(effects);
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.perform(effect);
        }
    }

    fn perform(&self, effect: Effect) {
        match effect {
            Effect::ApplyTheme(theme) => platform::apply_theme(theme),
            Effect::Request { seq, mode, request } => {
                let this = self.clone();
                spawn(async move {
                    let result = this.api.send(mode, &request).await;
                    this.send(Command::Completed { seq, result });
                });
            }
            Effect::WriteClipboard(text) => {
                let this = self.clone();
                spawn(async move {
                    let outcome = platform::copy_text(&text, platform::RESULT_FIELD_ID).await;
                    this.send(Command::CopyFinished(outcome));
                });
            }
            Effect::ScheduleErrorDismiss(id) => {
                let this = self.clone();
                spawn(async move {
                    platform::sleep_ms(this.ui.error_dismiss_ms).await;
                    this.send(Command::DismissError(id));
                });
            }
            Effect::ScheduleCopyReset(id) => {
                let this = self.clone();
                spawn(async move {
                    platform::sleep_ms(this.ui.copy_feedback_ms).await;
                    this.send(Command::ResetCopyFeedback(id));
                });
            }
        }
    }
}

/// Consume the [`Dispatcher`] from context.
pub fn use_dispatcher() -> Dispatcher {
    use_context::<Dispatcher>()
}
