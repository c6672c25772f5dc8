use super::*;
use crate::tools::log_lines;

const M1: &str = "a1b2c3d4-0000-0000-0000-000000000001|100001:app|2024-05-10 10:00:00|SELECT *";
const M2: &str = "a1b2c3d4-0000-0000-0000-000000000002|100002:app|2024-05-10 10:00:01|UPDATE t";
const M3: &str = "a1b2c3d4-0000-0000-0000-000000000003|100003:app|2024-05-10 10:00:02|DELETE FROM t";

#[test]
fn test_single_line_entry() {
    let entries = parse_entries_from_string(M1);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].line_count(), 1);
    assert_eq!(entries[0].first_line(), M1);
    assert!(!entries[0].has_continuation_lines());
    assert!(entries[0].starts_with_marker());
}

#[test]
fn test_multi_line_entry() {
    let input = format!("{M1}\nFROM users\nWHERE id = 1");
    let entries = parse_entries_from_string(&input);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].line_count(), 3);
    assert!(entries[0].has_continuation_lines());
    assert_eq!(entries[0].all_lines()[1], "FROM users");
    assert_eq!(entries[0].all_lines()[2], "WHERE id = 1");
    assert_eq!(entries[0].full_content(), format!("{M1}\nFROM users\nWHERE id = 1"));
}

#[test]
fn test_multiple_entries_with_continuation() {
    let input = format!("{M1}\nFROM a\n{M2}\nSET x = 1\nWHERE id = 2\n{M3}\n");
    let entries = parse_entries_from_string(&input);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].line_count(), 2);
    assert_eq!(entries[1].line_count(), 3);
    assert_eq!(entries[2].line_count(), 1);
    assert_eq!(entries[1].first_line(), M2);
}

#[test]
fn test_leading_lines_form_an_entry() {
    let input = format!("cabecalho do arquivo\nlinha solta\n{M1}\n");
    let entries = parse_entries_from_string(&input);

    assert_eq!(entries.len(), 2);
    assert!(!entries[0].starts_with_marker());
    assert_eq!(entries[0].all_lines(), ["cabecalho do arquivo", "linha solta"]);
    assert!(entries[1].starts_with_marker());
}

#[test]
fn test_no_marker_at_all() {
    let entries = parse_entries_from_string("foo\nbar\nbaz");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].line_count(), 3);
}

#[test]
fn test_empty_input() {
    assert!(parse_entries_from_string("").is_empty());
}

#[test]
fn test_blank_lines_stay_in_entry() {
    let input = format!("{M1}\n\n\n{M2}");
    let entries = parse_entries_from_string(&input);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].all_lines(), [M1, "", ""]);
}

#[test]
fn test_partition_is_lossless() {
    let inputs = [
        String::new(),
        "x\ny\n".to_string(),
        format!("{M1}"),
        format!("junk\n{M1}\n{M2}\n\n{M3}\ntrailer"),
        format!("{M1}\r\n{M2}\rcont\r\n\r\n{M3}"),
    ];

    for input in &inputs {
        let expected: Vec<&str> = log_lines(input).collect();
        let entries = parse_entries_from_string(input);
        let flattened: Vec<&str> = entries
            .iter()
            .flat_map(|e| e.all_lines().iter().map(String::as_str))
            .collect();
        assert_eq!(flattened, expected, "input: {:?}", input);
    }
}

#[test]
fn test_segmenter_is_restartable() {
    let lines = vec![M1, "cont", M2];

    let first: Vec<_> = segment_lines(lines.clone()).collect();
    let second: Vec<_> = segment_lines(lines).collect();
    assert_eq!(first, second);
}

#[test]
fn test_segmenter_is_lazy() {
    let mut pulled = 0;
    let lines = [M1, "cont", M2, M3].into_iter().inspect(|_| pulled += 1);
    let mut segmenter = segment_lines(lines);

    let first = segmenter.next().unwrap();
    assert_eq!(first.line_count(), 2);
    drop(segmenter);
    // 只需读到第二个起始行即可输出第一个条目
    assert_eq!(pulled, 3);
}

#[test]
fn test_segmenter_fused() {
    let mut segmenter = segment_lines(vec![M1]);
    assert!(segmenter.next().is_some());
    assert!(segmenter.next().is_none());
    assert!(segmenter.next().is_none());
}

#[test]
fn test_owned_lines() {
    let lines: Vec<String> = vec![M1.to_string(), "cont".to_string()];
    let entries: Vec<_> = segment_lines(lines).collect();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].line_count(), 2);
}
