//! Shared helpers for the lookup integration tests

use einline::{HttpTransport, LookupController, LookupTemplate, RequestBuilder, ResponseRenderer};
use reqwest::Url;
use wiremock::MockServer;

pub const ORGS_PATH: &str = "/api/organizations";

/// Controller whose template points at `<server>/api/organizations`
pub fn interpolated_controller(server: &MockServer) -> LookupController {
    let base = Url::parse(&format!("{}{ORGS_PATH}", server.uri())).unwrap();
    controller_for(LookupTemplate::Interpolated { base })
}

#[allow(dead_code)]
pub fn controller_for(template: LookupTemplate) -> LookupController {
    LookupController::new(
        RequestBuilder::new(template),
        HttpTransport::new().unwrap(),
        ResponseRenderer::default(),
    )
}

/// URI of a port nothing listens on, so connections are refused
#[allow(dead_code)]
pub fn dead_server_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
