/// Page settings. Everything is fixed at build time; there are no config files.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Id of the element the page is mounted under
    pub mount_id: String,
    pub title: String,
    pub challenge_title: String,
    /// Ping form target. Empty submits back to the current page.
    pub form_action: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            mount_id: "wasm-example".to_string(),
            title: "Welcome to Challenge #2".to_string(),
            challenge_title: "Command Injection".to_string(),
            form_action: String::new(),
        }
    }
}

impl PageConfig {
    pub fn with_mount_id(mut self, mount_id: impl Into<String>) -> Self {
        self.mount_id = mount_id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_challenge_title(mut self, challenge_title: impl Into<String>) -> Self {
        self.challenge_title = challenge_title.into();
        self
    }

    pub fn with_form_action(mut self, form_action: impl Into<String>) -> Self {
        self.form_action = form_action.into();
        self
    }
}
