use async_trait::async_trait;
use github_badge::error::{GitHubBadgeError, Result};
use github_badge::github::GitHubClient;
use github_badge::http::{HttpResponse, HttpTransport};

/// Transport that serves one canned outcome for every request
pub struct StubTransport {
    canned: Canned,
}

enum Canned {
    Body { status: u16, body: String },
    ConnectionError,
}

impl StubTransport {
    /// Respond 200 with the given JSON body
    pub fn json(body: &str) -> Self {
        StubTransport::status(200, body)
    }

    /// Respond with an arbitrary status and body
    pub fn status(status: u16, body: &str) -> Self {
        StubTransport {
            canned: Canned::Body {
                status,
                body: body.to_string(),
            },
        }
    }

    /// Fail every request at the transport level
    pub fn failing() -> Self {
        StubTransport {
            canned: Canned::ConnectionError,
        }
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, _url: &str) -> Result<HttpResponse> {
        match &self.canned {
            Canned::Body { status, body } => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Canned::ConnectionError => Err(GitHubBadgeError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "stubbed connection failure",
            ))),
        }
    }
}

/// Client wired to a stub transport; the base URL never gets dialed
pub fn client_with(stub: StubTransport) -> GitHubClient {
    GitHubClient::with_transport(Box::new(stub), "https://api.stub.test")
        .expect("stub base url is valid")
}
