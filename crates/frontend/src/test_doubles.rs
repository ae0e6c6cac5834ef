//! Trait doubles for exercising page flows without a browser

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use panel_http::{LogoutResponse, StatusResponse};

use crate::platform::{ConfirmDialog, Navigator, Notifier, SessionApi, ToastLevel};
use crate::services::AuthServiceError;

/// Records the last navigation target
#[derive(Default)]
pub struct RecordingNavigator {
    target: RefCell<Option<String>>,
}

impl RecordingNavigator {
    pub fn target(&self) -> Option<String> {
        self.target.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        *self.target.borrow_mut() = Some(path.to_string());
    }
}

/// Records every toast
#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(String, ToastLevel)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(String, ToastLevel)> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, level: ToastLevel) {
        self.messages.borrow_mut().push((message.to_string(), level));
    }
}

/// Always answers the prompt the same way
pub struct FixedDialog(pub bool);

impl ConfirmDialog for FixedDialog {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Session API double with scripted single-shot responses; counts calls
/// so tests can assert a request never went out.
#[derive(Default)]
pub struct ScriptedSession {
    logout_result: RefCell<Option<Result<LogoutResponse, AuthServiceError>>>,
    status_result: RefCell<Option<Result<StatusResponse, AuthServiceError>>>,
    calls: Cell<u32>,
}

impl ScriptedSession {
    pub fn with_logout(result: Result<LogoutResponse, AuthServiceError>) -> Self {
        let session = Self::default();
        *session.logout_result.borrow_mut() = Some(result);
        session
    }

    pub fn with_status(result: Result<StatusResponse, AuthServiceError>) -> Self {
        let session = Self::default();
        *session.status_result.borrow_mut() = Some(result);
        session
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl SessionApi for ScriptedSession {
    async fn logout(&self) -> Result<LogoutResponse, AuthServiceError> {
        self.calls.set(self.calls.get() + 1);
        self.logout_result
            .borrow_mut()
            .take()
            .expect("no logout response scripted")
    }

    async fn status(&self) -> Result<StatusResponse, AuthServiceError> {
        self.calls.set(self.calls.get() + 1);
        self.status_result
            .borrow_mut()
            .take()
            .expect("no status response scripted")
    }
}
