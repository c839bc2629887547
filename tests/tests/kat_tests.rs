// tests/kat_tests.rs
use sha1sum_tests::suites::kat::{
    load_suite, run_case, Runner, TestCase, TestGroup, TestSuite, VectorError, SHA1_KNOWN_ANSWERS,
};

#[test]
fn test_sha1_known_answers() {
    let suite = &*SHA1_KNOWN_ANSWERS;
    assert_eq!(suite.algorithm, "SHA-1");

    println!("Running known-answer suite: {}", suite.algorithm);
    let summary = Runner::run_suite(suite).expect("SHA-1 known-answer tests failed");
    assert_eq!(summary.passed, suite.case_count());

    assert_eq!(summary.groups.len(), suite.groups.len());
    for group in &suite.groups {
        let tally = summary.group(group.group_id).expect("missing group tally");
        assert_eq!(tally.passed, group.tests.len());
        assert_eq!(tally.failed, 0);
    }
}

fn text_case(test_id: u64, text: &str, md: &str) -> TestCase {
    TestCase {
        test_id,
        text: Some(text.into()),
        msg: None,
        repeat: 1,
        md: md.into(),
        chunks: None,
    }
}

#[test]
fn test_failures_are_tallied_per_group() {
    let suite = TestSuite {
        algorithm: "SHA-1".into(),
        revision: None,
        groups: vec![
            TestGroup {
                group_id: 1,
                description: "passing".into(),
                tests: vec![
                    text_case(1, "", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
                    text_case(2, "abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
                ],
            },
            TestGroup {
                group_id: 2,
                description: "one wrong digest".into(),
                tests: vec![
                    text_case(3, "abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
                    text_case(4, "abc", "0000000000000000000000000000000000000000"),
                ],
            },
        ],
    };

    let summary = Runner::tally_suite(&suite);
    assert_eq!((summary.passed, summary.failed), (3, 1));

    let first = summary.group(1).unwrap();
    assert_eq!((first.passed, first.failed), (2, 0));
    let second = summary.group(2).unwrap();
    assert_eq!((second.passed, second.failed), (1, 1));
    assert!(summary.group(3).is_none());

    assert!(matches!(
        Runner::run_suite(&suite),
        Err(VectorError::Failures { failed: 1, total: 4 })
    ));
}

#[test]
fn test_suite_covers_padding_boundaries() {
    let lengths: Vec<usize> = SHA1_KNOWN_ANSWERS
        .groups
        .iter()
        .flat_map(|g| g.tests.iter())
        .filter_map(|c| c.message().ok().map(|m| m.len()))
        .collect();
    for len in [55, 56, 64, 119, 120] {
        assert!(lengths.contains(&len), "no vector of length {}", len);
    }
}

#[test]
fn test_mismatch_is_reported() {
    let case = text_case(99, "abc", "0000000000000000000000000000000000000000");
    match run_case(&case) {
        Err(VectorError::Mismatch { test_id, actual, .. }) => {
            assert_eq!(test_id, 99);
            assert_eq!(actual, "a9993e364706816aba3e25717850c26c9cd0d89d");
        }
        other => panic!("Expected Mismatch, got {:?}", other),
    }
}

#[test]
fn test_missing_message_is_rejected() {
    let case = TestCase {
        test_id: 7,
        text: None,
        msg: None,
        repeat: 1,
        md: String::new(),
        chunks: None,
    };
    assert!(matches!(run_case(&case), Err(VectorError::MissingMessage(7))));
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        load_suite("sha1/does_not_exist.json"),
        Err(VectorError::Io { .. })
    ));
}
