//! # Lookup
//!
//! One lookup-and-display cycle: build a GET request from an identifier,
//! send it, and render the JSON response (or the failure) onto a display
//! area and a status banner.

pub mod banner;
pub mod controller;
pub mod display;
pub mod error;
pub mod renderer;
pub mod request;
pub mod result;
pub mod transport;
pub mod view;

pub use banner::{BannerState, Severity, StatusBanner};
pub use controller::{CycleOutcome, LookupController, TriggerOutcome, TASK_ABORTED_MESSAGE};
pub use display::{DisplayArea, FAILURE_TEXT, LOADING_PLACEHOLDER};
pub use error::{LookupError, EMPTY_IDENTIFIER_MESSAGE};
pub use renderer::ResponseRenderer;
pub use request::{LookupRequest, LookupTemplate, RequestBuilder, RequestDescriptor};
pub use result::LookupResult;
pub use transport::HttpTransport;
pub use view::SurfaceView;
