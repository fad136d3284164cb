//! Message feed loading
//!
//! A feed is either a JSON array of messages or newline-delimited JSON with
//! one message per line.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

use crate::domain::Message;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid message on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a feed file.
pub fn load_path(path: &Path) -> Result<Vec<Message>, FeedError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Read and parse a feed from any reader (stdin in practice).
pub fn load_reader<R: Read>(mut reader: R) -> Result<Vec<Message>, FeedError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<Vec<Message>, FeedError> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).map_err(|source| FeedError::Parse {
            line: source.line(),
            source,
        });
    }

    let mut messages = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let message = serde_json::from_str(line).map_err(|source| FeedError::Parse {
            line: idx + 1,
            source,
        })?;
        messages.push(message);
    }
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let messages = parse(
            r#"[
                {"timestamp":1,"payload":{"type":"INIT"}},
                {"timestamp":2,"payload":{"type":"NETWORK_CHANGED","chainId":1}}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            messages,
            vec![Message::init(1), Message::network_changed(Some(1), 2)]
        );
    }

    #[test]
    fn test_parse_ndjson_skips_blank_lines() {
        let content = "{\"timestamp\":1,\"payload\":{\"type\":\"INIT\"}}\n\n\
                       {\"timestamp\":2,\"payload\":{\"type\":\"BLOCK_NUMBER_CHANGED\",\"chainId\":5,\"blockNumber\":42}}\n";
        let messages = parse(content).unwrap();
        assert_eq!(
            messages,
            vec![Message::init(1), Message::block_number_changed(5, 42, 2)]
        );
    }

    #[test]
    fn test_parse_error_reports_line() {
        let content = "{\"timestamp\":1,\"payload\":{\"type\":\"INIT\"}}\nnot json\n";
        match parse(content) {
            Err(FeedError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_feed() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("[]").unwrap().is_empty());
    }
}
