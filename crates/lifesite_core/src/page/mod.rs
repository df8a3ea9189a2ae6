//! Page chrome, routes and site output.
//!
//! # Responsibility
//! - Map every page to a route and an `index.html` under the output dir.
//! - Wrap renderer output in the shared document layout.
//!
//! # Invariants
//! - Route paths always start and end with `/`.
//! - Dynamic segments never contain `/` and are never `.` or `..`.

pub mod layout;
pub mod routes;
pub mod site;

pub use layout::{render_document, PageMeta};
pub use routes::{path_segment, Route};
pub use site::{build_site, BuildError, BuildReport, SiteBuilder};
