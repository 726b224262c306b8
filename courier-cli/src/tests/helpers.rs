//! Test helpers for staging optimise requests in temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Three stops east of the origin along the equator, visited B, A, C.
pub(super) const THREE_STOP_REQUEST: &str = r#"{
    "start": {"x": 0.0, "y": 0.0},
    "stops": [
        {"order_id": "A", "location": {"x": 0.1, "y": 0.0}, "address": "1 Quay Street"},
        {"order_id": "B", "location": {"x": 0.05, "y": 0.0}, "payload": {"parcels": 2}},
        {"order_id": "C", "location": {"x": 0.2, "y": 0.0}}
    ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory owning a request file.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn request(&self, body: &str) -> Utf8PathBuf {
        let path = self.path("request.json");
        write_utf8(&path, body.as_bytes());
        path
    }
}
