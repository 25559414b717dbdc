//! Test helpers for composing route requests on disk.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, TimeDelta, Utc};
use errand_core::{LatLng, Priority, RoutePreferences, StopTimeWindow};
use tempfile::TempDir;

pub(super) const DEPOT: LatLng = LatLng::new(39.9789, -82.8677);
pub(super) const STOP: LatLng = LatLng::new(40.0, -83.0);

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// A temporary directory with a UTF-8 root path.
pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// A single high-priority stop due a day after `now`, routed out and back.
pub(super) fn sample_request(now: DateTime<Utc>) -> RouteRequest {
    RouteRequest {
        origin: DEPOT,
        stops: vec![
            StopTimeWindow::new(STOP, Priority::High).with_due_date(now + TimeDelta::days(1)),
        ],
        preferences: RoutePreferences {
            return_to_start: true,
            ..RoutePreferences::default()
        },
    }
}

/// Serialise `request` as pretty JSON into `path`.
pub(super) fn write_request(path: &Utf8Path, request: &RouteRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}
