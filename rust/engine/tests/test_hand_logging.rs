use std::fs;

use tablestakes_engine::logger::{
    format_hand_id, ActionRecord, BlindRecord, HandLogger, HandRecord, Payout, Street,
};
use tablestakes_engine::player::{PlayerAction, SeatId};

fn record(seq: u32) -> HandRecord {
    let mut rec = HandRecord::new(format_hand_id("20250102", seq), Some(1));
    rec.blinds.push(BlindRecord {
        seat: SeatId(1),
        amount: 5,
    });
    rec.actions.push(ActionRecord {
        seat: SeatId(0),
        street: Street::Preflop,
        action: PlayerAction::Raise(20),
    });
    rec.board = vec!["Ac".parse().unwrap()];
    rec.payouts.push(Payout {
        seat: SeatId(0),
        name: "alice".to_string(),
        amount: 25,
    });
    rec.result = Some("fold".to_string());
    rec
}

#[test]
fn hand_ids_are_date_and_zero_padded_sequence() {
    assert_eq!(format_hand_id("20250102", 7), "20250102-000007");
}

#[test]
fn writes_one_json_line_per_hand_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("hands.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger.write(&record(1)).expect("write");
    logger.write(&record(2)).expect("write");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));

    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let parsed: HandRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(parsed.hand_id, "20250102-000002");
    assert!(parsed.ts.is_some(), "timestamp is filled in on write");
    assert_eq!(parsed.actions[0].action, PlayerAction::Raise(20));
    assert_eq!(parsed.total_paid(), 25);
}

#[test]
fn existing_timestamp_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let mut rec = record(1);
    rec.ts = Some("2025-01-02T03:04:05Z".to_string());
    let mut logger = HandLogger::create(&path).unwrap();
    logger.write(&rec).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(value["ts"], "2025-01-02T03:04:05Z");
    assert_eq!(value["result"], "fold");
    assert_eq!(value["blinds"][0]["amount"], 5);
}
