mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use focus_core::error::FocusError;
use focus_core::io::ImageSource;
use focus_core::quality::batch::{score_source, score_sources, score_sources_with_progress};

use common::{checkerboard, png_bytes, ramp, uniform};

fn mixed_sources() -> Vec<ImageSource> {
    vec![
        ImageSource::Bytes(png_bytes(checkerboard(16, 16, 1))),
        ImageSource::Bytes(png_bytes(uniform(16, 16, 40))),
        ImageSource::Bytes(b"junk".to_vec()),
        ImageSource::Path("/definitely/not/here.png".into()),
        ImageSource::Bytes(png_bytes(ramp(64, 64))),
    ]
}

#[test]
fn test_results_follow_input_order() {
    let sources = mixed_sources();
    let results = score_sources(&sources, 100.0);
    assert_eq!(results.len(), sources.len());

    assert!(results[0].as_ref().unwrap().is_acceptable);
    assert_eq!(results[1].as_ref().unwrap().focus_measure, 0.0);
    assert!(matches!(results[2], Err(FocusError::DecodeFailure(_))));
    assert!(matches!(results[3], Err(FocusError::NotFound { .. })));
    assert!(!results[4].as_ref().unwrap().is_acceptable);
}

#[test]
fn test_batch_matches_single_scoring() {
    let sources = mixed_sources();
    let results = score_sources(&sources, 100.0);
    for (source, result) in sources.iter().zip(&results) {
        let single = score_source(source, 100.0);
        match (result, single) {
            (Ok(a), Ok(b)) => assert_eq!(*a, b),
            (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind()),
            _ => panic!("batch and single scoring disagree"),
        }
    }
}

#[test]
fn test_progress_reports_every_source() {
    let sources = mixed_sources();
    let calls = AtomicUsize::new(0);
    let max_seen = AtomicUsize::new(0);

    let results = score_sources_with_progress(&sources, 100.0, |done| {
        calls.fetch_add(1, Ordering::Relaxed);
        max_seen.fetch_max(done, Ordering::Relaxed);
    });

    assert_eq!(results.len(), sources.len());
    assert_eq!(calls.load(Ordering::Relaxed), sources.len());
    assert_eq!(max_seen.load(Ordering::Relaxed), sources.len());
}

#[test]
fn test_empty_batch() {
    assert!(score_sources(&[], 100.0).is_empty());
}
