//! Release metadata via an external time service
//!
//! Fetches the current timestamp from worldtimeapi and pairs it with the
//! classifier's release type and version label. Any fetch failure degrades
//! silently to the local clock, with the version tagged so consumers can
//! tell a genuine timestamp from a fallback one.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::release::{infer_release_type, synthesize_version, ReleaseType};

/// worldtimeapi base URL
const TIME_API_BASE: &str = "https://worldtimeapi.org/api/timezone";

/// Timeout for the metadata fetch; the generator should not hang on it
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Suffix marking a version whose timestamp came from the local clock
const FALLBACK_SUFFIX: &str = "-fallback";

/// Metadata attached to one generation request
#[derive(Debug, Clone)]
pub struct ReleaseMetadata {
    pub version: String,
    pub release_date: String,
    pub release_type: ReleaseType,
}

#[derive(Debug, Deserialize)]
struct TimeResponse {
    datetime: Option<String>,
}

/// Check that a timestamp is ISO-8601 with a zone offset or trailing "Z"
fn is_valid_timestamp(iso: &str) -> bool {
    DateTime::parse_from_rfc3339(&iso.replace('Z', "+00:00")).is_ok()
}

/// Local-clock timestamp in ISO-8601 form with a trailing "Z"
fn local_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

async fn fetch_release_timestamp(timezone: &str) -> Option<String> {
    let url = format!("{}/{}", TIME_API_BASE, timezone);
    let response = Client::new()
        .get(&url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .ok()?
        .error_for_status()
        .ok()?;

    let body: TimeResponse = response.json().await.ok()?;
    let iso = body.datetime?;
    if !is_valid_timestamp(&iso) {
        return None;
    }
    Some(iso)
}

/// Resolve metadata for a change list: classify the release, synthesize a
/// version label, and fetch the release timestamp.
///
/// Never fails. A degraded fetch substitutes the local clock and suffixes
/// the version with "-fallback".
pub async fn resolve_release_metadata(bullets: &[String], timezone: &str) -> ReleaseMetadata {
    let release_type = infer_release_type(bullets);
    let version = synthesize_version(release_type);

    match fetch_release_timestamp(timezone).await {
        Some(release_date) => {
            debug!(%release_date, "fetched release timestamp");
            ReleaseMetadata {
                version,
                release_date,
                release_type,
            }
        }
        None => {
            warn!("time service unavailable, using local clock");
            ReleaseMetadata {
                version: format!("{}{}", version, FALLBACK_SUFFIX),
                release_date: local_timestamp(),
                release_type,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_timestamps() {
        assert!(is_valid_timestamp("2025-01-01T00:00:00Z"));
        assert!(is_valid_timestamp("2025-06-15T09:30:00.123456-04:00"));
    }

    #[test]
    fn test_invalid_timestamps() {
        assert!(!is_valid_timestamp("yesterday"));
        assert!(!is_valid_timestamp("2025-01-01"));
        assert!(!is_valid_timestamp(""));
    }

    #[test]
    fn test_local_timestamp_has_zulu_suffix() {
        let ts = local_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(is_valid_timestamp(&ts));
    }

    #[test]
    fn test_time_response_parsing() {
        let body: TimeResponse =
            serde_json::from_str(r#"{"datetime": "2025-01-01T00:00:00-05:00", "abbreviation": "EST"}"#)
                .unwrap();
        assert_eq!(body.datetime.as_deref(), Some("2025-01-01T00:00:00-05:00"));

        let empty: TimeResponse = serde_json::from_str(r#"{"abbreviation": "EST"}"#).unwrap();
        assert!(empty.datetime.is_none());
    }
}
