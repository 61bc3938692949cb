//! Test helpers for writing CLI inputs to a temporary workspace.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use geo::Coord;
use tempfile::TempDir;
use tripwise_core::{Destination, TripRequest};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory holding a catalogue and a request.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) request_path: Utf8PathBuf,
    pub(super) catalogue_path: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let request_path = root.join("request.json");
        let catalogue_path = root.join("destinations.json");
        Self {
            _dir: dir,
            root,
            request_path,
            catalogue_path,
        }
    }

    pub(super) fn write_catalogue(&self) {
        let payload = serde_json::to_string_pretty(&catalogue()).expect("serialise catalogue");
        write_utf8(&self.catalogue_path, payload.as_bytes());
    }

    pub(super) fn write_request(&self, request: &TripRequest) {
        let payload = serde_json::to_string_pretty(request).expect("serialise request");
        write_utf8(&self.request_path, payload.as_bytes());
    }
}

pub(super) fn catalogue() -> Vec<Destination> {
    vec![
        Destination::new(
            "paris",
            "Paris",
            Coord {
                x: 2.3522,
                y: 48.8566,
            },
            vec!["Louvre Museum".to_owned(), "Eiffel Tower".to_owned()],
        ),
        Destination::new(
            "lyon",
            "Lyon",
            Coord {
                x: 4.8357,
                y: 45.764,
            },
            vec!["Vieux Lyon".to_owned()],
        ),
        Destination::new(
            "rome",
            "Rome",
            Coord {
                x: 12.4964,
                y: 41.9028,
            },
            vec!["Colosseum".to_owned(), "Pantheon".to_owned()],
        ),
    ]
}

pub(super) fn request(destinations: &[&str], days: u32) -> TripRequest {
    TripRequest {
        destinations: destinations.iter().copied().map(Into::into).collect(),
        mode: None,
        days,
        start_date: NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date"),
        premium: true,
        seed: Some(21),
    }
}
