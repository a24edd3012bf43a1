//! Correlation and client-identity header conventions.
//!
//! Every integration that talks through this client stamps the same set of
//! identity headers so that requests can be traced across services. The
//! constants here are the single source of truth for those header names.

/// Standard header identifying the client software making the request.
///
/// Browsers inherit this from `navigator.userAgent`; CLI, mobile, and
/// desktop apps should set it explicitly (e.g. `"awee-cli/1.0.0"`).
pub const USER_AGENT: &str = "User-Agent";

/// Identifies the type of client making the request (web, mobile, desktop, cli, service).
///
/// Disambiguates clients that may share the same app version.
pub const CLIENT_PLATFORM: &str = "X-Client-Platform";

/// Identifies the version of the app making the request.
///
/// Used for debugging, feature flags, and context tagging alongside the
/// platform header.
pub const CLIENT_APP_VERSION: &str = "X-Client-Version";

/// Persistent identifier for the client install or device.
///
/// Stored locally and stable across app restarts; changes only when the app
/// is reinstalled or reset.
pub const CLIENT_ID: &str = "X-Client-ID";

/// Identifies a session or user login context.
///
/// Optional, but useful to correlate related requests within one session.
pub const SESSION_ID: &str = "X-Session-ID";

/// Unique identifier for an individual request.
///
/// Used to trace a single request across services; a stand-in for
/// `traceparent` on systems that do not support it yet.
pub const REQUEST_ID: &str = "X-Request-ID";

/// Identifies the originating service in server-to-server communication.
///
/// Set by background jobs, cron, and internal services to clarify the
/// source of the request.
pub const SERVICE_NAME: &str = "X-Service-Name";

/// Formats a user agent string, e.g. `"awee-cli/1.0.0 (darwin 14.2; arm64)"`.
pub fn user_agent(app: &str, version: &str, os: &str, os_version: &str, arch: &str) -> String {
    format!("{}/{} ({} {}; {})", app, version, os, os_version, arch)
}
