//! Loading recorded feeds from disk

use std::io::Write;
use std::sync::Arc;

use chrono::Utc;
use multicall_devtools::domain::{Event, Message, Reducer, State};
use multicall_devtools::feed::{self, FeedError};

#[test]
fn test_load_ndjson_file_and_replay() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"timestamp":0,"payload":{{"type":"INIT"}}}}"#).unwrap();
    writeln!(
        file,
        r#"{{"timestamp":1000,"payload":{{"type":"NETWORK_CHANGED","chainId":42}}}}"#
    )
    .unwrap();
    writeln!(
        file,
        r#"{{"timestamp":2000,"payload":{{"type":"BLOCK_NUMBER_CHANGED","chainId":42,"blockNumber":9}}}}"#
    )
    .unwrap();
    writeln!(file, r#"{{"timestamp":3000,"payload":{{"type":"CALLS_CHANGED"}}}}"#).unwrap();

    let messages = feed::load_path(file.path()).unwrap();
    assert_eq!(messages.len(), 4);

    let state = Reducer::new(Utc).reduce(State::initial(), &Message::replay(messages));
    assert_eq!(
        state.events,
        vec![
            Event::Init {
                time: "00:00:00".into()
            },
            Event::NetworkConnected {
                network: "Kovan".into(),
                time: "00:00:01".into()
            },
            Event::BlockFound {
                network: "Kovan".into(),
                time: "00:00:02".into(),
                block_number: 9
            },
        ]
    );
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = feed::load_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, FeedError::Io(_)));
}

#[test]
fn test_load_reader() {
    let input = br#"[{"timestamp":5,"payload":{"type":"INIT"}}]"#;
    let messages = feed::load_reader(&input[..]).unwrap();
    assert_eq!(messages, vec![Message::init(5)]);
}

#[test]
fn test_unreduced_kinds_of_any_shape_load_and_change_nothing() {
    let content = r#"{"timestamp":0,"payload":{"type":"INIT"}}
{"timestamp":1000,"payload":{"type":"MULTICALL_SUCCESS"}}
{"timestamp":2000,"payload":{"type":"MULTICALL_ERROR","chainId":1,"error":{"message":"reverted"}}}
{"timestamp":3000,"payload":{"type":"CALLS_CHANGED","calls":[{"address":"0x1"}]}}
"#;
    let messages = feed::parse(content).unwrap();
    assert_eq!(messages.len(), 4);

    let reducer = Reducer::new(Utc);
    let after_init = reducer.reduce(State::initial(), &messages[0]);
    let replayed = reducer.reduce(Arc::clone(&after_init), &Message::replay(messages[1..].to_vec()));
    assert!(Arc::ptr_eq(&after_init, &replayed));
}
