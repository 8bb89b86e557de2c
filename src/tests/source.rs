use std::path::Path;

use crate::{
    prelude::{AlmanacSource, AlmanacStore, Error, FileSource, TrimbleAlmanac},
    tests::{init_logger, TRIMBLE_W2296},
};

/// In memory source, that may fail on demand
struct TestSource {
    content: Option<String>,
    fetched: usize,
}

impl AlmanacSource for TestSource {
    fn fetch(&mut self) -> Result<String, Error> {
        self.fetched += 1;
        self.content
            .clone()
            .ok_or(Error::FetchFailed("offline".to_string()))
    }
}

#[test]
fn refresh_from_source() {
    init_logger();

    let format = TrimbleAlmanac::default();
    let mut store = AlmanacStore::new();

    let mut source = TestSource {
        content: Some(TRIMBLE_W2296.to_string()),
        fetched: 0,
    };

    assert_eq!(store.refresh(&mut source, &format), Ok(6));
    assert_eq!(source.fetched, 1);
    assert!(store.is_ready());

    source.content = None;

    assert_eq!(
        store.refresh(&mut source, &format),
        Err(Error::FetchFailed("offline".to_string()))
    );
    assert_eq!(source.fetched, 2);

    // previous content is preserved
    assert!(store.is_ready());
    assert_eq!(store.len(), 6);
}

#[test]
fn file_source() {
    init_logger();

    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("trimble_w2296.alm");

    let mut source = FileSource::new(&path);
    assert_eq!(source.path(), path.as_path());

    let mut store = AlmanacStore::new();
    assert_eq!(store.refresh(&mut source, &TrimbleAlmanac::default()), Ok(6));
    assert_eq!(store.satellite_ids(), vec![1, 2, 3, 5, 7, 9]);
}

#[test]
fn missing_file() {
    init_logger();

    let mut source = FileSource::new("data/does_not_exist.alm");
    let mut store = AlmanacStore::new();

    match store.refresh(&mut source, &TrimbleAlmanac::default()) {
        Err(Error::FetchFailed(reason)) => assert!(reason.contains("does_not_exist.alm")),
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(!store.is_ready());
}
