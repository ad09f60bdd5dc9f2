//! # einline - Organization Lookup Client
//!
//! Looks an organization up by identifier against a JSON API and shows the
//! pretty-printed response, one request per trigger.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  trigger   ┌──────────────────┐  spawn   ┌───────────────┐
//! │     App     │───────────▶│ LookupController │─────────▶│ HttpTransport │
//! │             │            │                  │◀─────────│               │
//! │ - CLI args  │   redraw   │ - RequestBuilder │  mpsc    └───────────────┘
//! │ - stdin     │◀───────────│ - Renderer       │
//! └─────────────┘            │ - DisplayArea    │
//!        │                   │ - StatusBanner   │
//!        ▼                   └──────────────────┘
//!  SurfaceView (text | json)
//! ```

pub mod app;
pub mod cmd_args;
pub mod config;
pub mod lookup;

pub use app::App;
pub use lookup::*;
