/// Backend API family a request targets.
///
/// Every variant resolves to exactly one live and one sandbox base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Service {
    /// QuestBlue SecureFax v3.
    SecureFax,
}

impl Service {
    /// Production base URL.
    pub fn live_base_url(self) -> &'static str {
        match self {
            Self::SecureFax => "https://api.questblue.com/v3/securefax/",
        }
    }

    /// Sandbox (staging) base URL.
    pub fn sandbox_base_url(self) -> &'static str {
        match self {
            Self::SecureFax => "http://apiv3.test/v3/securefax/",
        }
    }

    /// Pick the base URL for the selected environment.
    pub fn base_url(self, sandbox: bool) -> &'static str {
        if sandbox {
            self.sandbox_base_url()
        } else {
            self.live_base_url()
        }
    }
}
