//! In-memory transport for client tests.

use std::error::Error as StdError;
use std::sync::{Arc, Mutex};

use super::auth::MultiAuthenticator;
use super::{BoxFuture, Genesis, HttpRequest, HttpTransport};
use crate::domain::{ApiKey, Password, Username};
use crate::transport::Response;

#[derive(Debug, Clone)]
enum Reply {
    Respond { status: u16, body: String },
    Fail(String),
}

#[derive(Debug, Default)]
struct FakeState {
    last_request: Option<HttpRequest>,
    requests: usize,
}

/// Records every request and answers with a canned reply.
#[derive(Debug, Clone)]
pub(super) struct FakeTransport {
    reply: Reply,
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub(super) fn new(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(Reply::Respond {
            status,
            body: body.into(),
        })
    }

    pub(super) fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Fail(message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            state: Arc::new(Mutex::new(FakeState::default())),
        }
    }

    pub(super) fn last_request(&self) -> HttpRequest {
        self.state
            .lock()
            .unwrap()
            .last_request
            .clone()
            .expect("no request was sent")
    }

    pub(super) fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<Response, Box<dyn StdError + Send + Sync>>> {
        {
            let mut state = self.state.lock().unwrap();
            state.last_request = Some(request);
            state.requests += 1;
        }

        let reply = self.reply.clone();
        Box::pin(async move {
            match reply {
                Reply::Respond { status, body } => Ok(Response::new(status, body)),
                Reply::Fail(message) => Err(message.into()),
            }
        })
    }
}

/// Client with Basic `user:pass` and security key `key-123`, backed by `transport`.
pub(super) fn make_client(transport: FakeTransport, sandbox: bool) -> Genesis {
    Genesis {
        auth: MultiAuthenticator::from_credentials(
            Some(Username::new("user").unwrap()),
            Some(Password::new("pass").unwrap()),
            Some(ApiKey::new("key-123").unwrap()),
        ),
        sandbox,
        base_url: None,
        http: Arc::new(transport),
    }
}

/// Value of the first header named `name`.
pub(super) fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
