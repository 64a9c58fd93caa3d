use std::cell::RefCell;
use std::collections::HashMap;

use image::{ColorType, DynamicImage, Rgba, RgbaImage};
use tempfile::TempDir;

use super::*;
use crate::io::fetch::FetchResponse;
use crate::io::writers::png::encode_png;
use crate::types::TargetSize;

fn params_in(dir: &Path) -> PrepParams {
    PrepParams {
        target: TargetSize::new(30, 20).unwrap(),
        images_dir: dir.to_path_buf(),
        ..PrepParams::default()
    }
}

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    encode_png(&DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        w,
        h,
        Rgba([50, 60, 70, 90]),
    )))
    .unwrap()
}

/// Serves canned responses and remembers the order URLs were requested in
struct FakeFetcher {
    responses: HashMap<String, FetchResponse>,
    requested: RefCell<Vec<String>>,
}

impl FakeFetcher {
    fn new(responses: &[(&str, u16, Vec<u8>)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(url, status, body)| {
                    (
                        url.to_string(),
                        FetchResponse {
                            status: *status,
                            body: body.clone(),
                        },
                    )
                })
                .collect(),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl Fetcher for FakeFetcher {
    fn get(&self, url: &str) -> Result<FetchResponse> {
        self.requested.borrow_mut().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    format!("connection refused: {url}"),
                ))
            })
    }
}

#[test]
fn missing_source_is_skipped_and_later_entries_still_run() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("wide.png"), png_bytes(90, 20)).unwrap();
    let entries = [
        LocalEntry::new("absent.jpeg", "game1.png"),
        LocalEntry::new("wide.png", "game2.png"),
    ];

    let report = process_local_entries(&entries, &params_in(dir.path())).unwrap();

    assert_eq!((report.processed, report.skipped, report.errors), (1, 1, 0));
    assert_eq!(report.items[0].outcome, ItemOutcome::Skipped);
    assert!(report.items[0].message.as_deref().unwrap().contains("not found"));
    assert!(!dir.path().join("game1.png").exists());

    let out = image::open(dir.path().join("game2.png")).unwrap();
    assert_eq!((out.width(), out.height()), (30, 20));
    assert_eq!(out.color(), ColorType::Rgb8);
}

#[test]
fn corrupt_source_fails_without_stopping_the_run() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("broken.jpeg"), b"definitely not a jpeg").unwrap();
    std::fs::write(dir.path().join("tall.png"), png_bytes(10, 80)).unwrap();
    let entries = [
        LocalEntry::new("broken.jpeg", "game1.png"),
        LocalEntry::new("tall.png", "game2.png"),
    ];

    let report = process_local_entries(&entries, &params_in(dir.path())).unwrap();

    assert_eq!((report.processed, report.skipped, report.errors), (1, 0, 1));
    assert_eq!(report.items[0].outcome, ItemOutcome::Failed);
    assert!(!dir.path().join("game1.png").exists());
    assert!(dir.path().join("game2.png").exists());
}

#[test]
fn images_dir_is_created_when_absent() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("nested").join("images");
    let report = process_local_entries(&[], &params_in(&images)).unwrap();
    assert!(images.is_dir());
    assert!(report.items.is_empty());
}

#[test]
fn non_success_status_writes_nothing_and_continues() {
    let dir = TempDir::new().unwrap();
    let fetcher = FakeFetcher::new(&[
        ("http://icons.test/missing", 404, Vec::new()),
        ("http://icons.test/ok", 200, png_bytes(5, 50)),
    ]);
    let entries = [
        RemoteEntry::new("game1.png", "http://icons.test/missing"),
        RemoteEntry::new("game2.png", "http://icons.test/ok"),
    ];

    let report = process_remote_entries(&fetcher, &entries, &params_in(dir.path())).unwrap();

    assert_eq!(
        *fetcher.requested.borrow(),
        ["http://icons.test/missing", "http://icons.test/ok"]
    );
    assert_eq!((report.processed, report.errors), (1, 1));
    assert!(report.items[0].message.as_deref().unwrap().contains("404"));
    assert!(!dir.path().join("game1.png").exists());

    let out = image::open(dir.path().join("game2.png")).unwrap();
    assert_eq!((out.width(), out.height()), (30, 20));
}

#[test]
fn transport_and_decode_errors_are_isolated_per_entry() {
    let dir = TempDir::new().unwrap();
    let fetcher = FakeFetcher::new(&[
        ("http://icons.test/garbage", 200, b"<html>oops</html>".to_vec()),
        ("http://icons.test/ok", 200, png_bytes(40, 40)),
    ]);
    let entries = [
        RemoteEntry::new("game1.png", "http://icons.test/unreachable"),
        RemoteEntry::new("game2.png", "http://icons.test/garbage"),
        RemoteEntry::new("game3.png", "http://icons.test/ok"),
    ];

    let report = process_remote_entries(&fetcher, &entries, &params_in(dir.path())).unwrap();

    assert_eq!((report.processed, report.skipped, report.errors), (1, 0, 2));
    let outcomes: Vec<ItemOutcome> = report.items.iter().map(|i| i.outcome).collect();
    assert_eq!(
        outcomes,
        [ItemOutcome::Failed, ItemOutcome::Failed, ItemOutcome::Processed]
    );
    assert!(!dir.path().join("game2.png").exists());
    assert!(dir.path().join("game3.png").exists());
}

#[test]
fn report_serializes_outcomes_in_lowercase() {
    let mut report = BatchReport::default();
    report.record(ItemReport {
        procedure: Procedure::Crop,
        output: "game1.png".to_string(),
        outcome: ItemOutcome::Processed,
        message: None,
    });
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["processed"], 1);
    assert_eq!(json["items"][0]["outcome"], "processed");
    assert_eq!(json["items"][0]["procedure"], "crop");
    assert!(json["items"][0].get("message").is_none());
}
