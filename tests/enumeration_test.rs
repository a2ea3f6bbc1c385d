use digit_enum::{expected_line_count, DigitEnumerator, MemorySink, Strategy, WriterSink};

#[test]
fn test_single_level_from_empty_prefix() {
    for depth in [0, 1] {
        let lines = DigitEnumerator::default().collect("", depth).unwrap();
        assert_eq!(lines, ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }
}

#[test]
fn test_two_levels_from_empty_prefix() {
    let lines = DigitEnumerator::default().collect("", 2).unwrap();

    assert_eq!(lines.len(), 100);
    assert_eq!(lines[0], "0");
    assert_eq!(lines[9], "9");
    assert_eq!(lines[10], "10");
    assert_eq!(lines[19], "19");
    assert_eq!(lines[90], "90");
    assert_eq!(lines[99], "99");
}

#[test]
fn test_output_is_ordered_and_complete() {
    for strategy in [Strategy::Iterative, Strategy::Recursive] {
        let lines = DigitEnumerator::new(strategy).collect("", 4).unwrap();
        let numbers: Vec<u32> = lines.iter().map(|l| l.parse().unwrap()).collect();
        let expected: Vec<u32> = (0..10_000).collect();
        assert_eq!(numbers, expected);
    }
}

#[test]
fn test_prefixed_lines_have_full_width() {
    let lines = DigitEnumerator::default().collect("p", 3).unwrap();

    assert_eq!(lines.len() as u64, expected_line_count(3).unwrap());
    assert!(lines.iter().all(|l| l.len() == 4 && l.starts_with('p')));
    assert_eq!(lines[0], "p000");

    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
}

#[test]
fn test_writer_output_matches_collected_lines() {
    let enumerator = DigitEnumerator::new(Strategy::Recursive);

    let mut writer = WriterSink::new(Vec::new());
    let emitted = enumerator.enumerate("3", 2, &mut writer).unwrap();
    let bytes = writer.into_inner();

    let mut memory = MemorySink::new();
    enumerator.enumerate("3", 2, &mut memory).unwrap();
    let joined: String = memory.lines().iter().map(|l| format!("{}\n", l)).collect();

    assert_eq!(emitted, 100);
    assert_eq!(String::from_utf8(bytes).unwrap(), joined);
}
