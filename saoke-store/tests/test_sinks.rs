use saoke_core::{Source, Transaction};
use saoke_store::{
    CSV_HEADER, KeyValueSink, MemoryStore, StoreError, TRANSACTIONS_KEY, load, publish, read_csv,
    write_csv, write_csv_file,
};

fn sample() -> Vec<Transaction> {
    vec![
        Transaction::new(
            Some("NGUYEN VAN A".to_string()),
            "01/09/2024",
            1_500_000,
            "MBVCB.123 NGUYEN VAN A chuyen tien, ung ho",
            Source::Vietcombank,
        ),
        Transaction::new(None, "07/09/2024", 500_000, "ung ho \"mien Bac\"", Source::Cash),
        Transaction::new(
            Some("TRAN VAN B".to_string()),
            "10/09/2024 10:22:33",
            250_000,
            "Ung ho dong bao",
            Source::treasury("BIDV"),
        ),
    ]
}

#[test]
fn test_publish_stores_one_json_array() {
    let mut store = MemoryStore::new();
    publish(&mut store, TRANSACTIONS_KEY, &sample()).unwrap();

    let raw = store.raw(TRANSACTIONS_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        let keys: Vec<&String> = item.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        for key in CSV_HEADER {
            assert!(item.get(key).is_some(), "missing {key}");
        }
    }
    assert!(items[1]["offset_name"].is_null());
    assert_eq!(items[0]["credit"], 1_500_000);
    assert_eq!(items[2]["source"], "TREASURY - BIDV");
}

#[test]
fn test_load_round_trip_keeps_order() {
    let mut store = MemoryStore::new();
    publish(&mut store, TRANSACTIONS_KEY, &sample()).unwrap();
    assert_eq!(load(&mut store, TRANSACTIONS_KEY).unwrap(), sample());
}

#[test]
fn test_load_missing_key() {
    let mut store = MemoryStore::new();
    store.set("other", "[]").unwrap();
    assert!(matches!(
        load(&mut store, TRANSACTIONS_KEY),
        Err(StoreError::MissingKey(k)) if k == TRANSACTIONS_KEY
    ));
}

#[test]
fn test_csv_round_trip() {
    let mut buf = Vec::new();
    write_csv(&mut buf, &sample()).unwrap();

    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.starts_with("offset_name,transaction_date,credit,transaction_details,source\n"));

    let mut rdr = csv::Reader::from_reader(buf.as_slice());
    assert_eq!(rdr.records().count(), 3);

    assert_eq!(read_csv(buf.as_slice()).unwrap(), sample());
}

#[test]
fn test_csv_file_with_no_rows_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.csv");
    write_csv_file(&path, &[]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "offset_name,transaction_date,credit,transaction_details,source\n");
    assert!(read_csv(text.as_bytes()).unwrap().is_empty());
}
