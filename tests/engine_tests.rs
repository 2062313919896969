// In-process tests for the all-pairs engine, driven through the library API.

use std::collections::HashSet;
use std::io::Cursor;

use pairdist::{Dataset, EngineConfig, PairEngine, ProgressBar, ProgressMode, ResultSink};

fn run_to_lines(input: &str, num_workers: usize) -> Vec<String> {
    let dataset = Dataset::load(Cursor::new(input)).unwrap();
    let sink = ResultSink::new(
        Vec::new(),
        ProgressBar::new(dataset.pair_count(), ProgressMode::Never),
    );
    let engine = PairEngine::new(EngineConfig {
        num_workers,
        ..EngineConfig::default()
    });
    engine.run(&dataset, &sink).unwrap();
    let out = String::from_utf8(sink.finish().unwrap()).unwrap();
    out.lines().map(str::to_string).collect()
}

fn synthetic_input(n: usize) -> String {
    let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let mut input = String::new();
    for i in 0..n {
        input.push_str(&format!(
            "id{:03}\t{} {} shared suffix\t{}\n",
            i,
            words[i % words.len()],
            words[(i * 3) % words.len()],
            words[(i * 7) % words.len()],
        ));
    }
    input
}

#[test]
fn emits_exactly_all_unordered_pairs() {
    let n = 30;
    let lines = run_to_lines(&synthetic_input(n), 4);
    assert_eq!(lines.len(), n * (n - 1) / 2);

    let mut pairs = HashSet::new();
    for line in &lines {
        let cols: Vec<&str> = line.split('\t').collect();
        assert_eq!(cols.len(), 4, "id1, id2 and two field distances: {}", line);
        assert_ne!(cols[0], cols[1]);
        // Unordered uniqueness: neither (a,b) nor (b,a) may repeat
        assert!(pairs.insert((cols[0].to_string(), cols[1].to_string())));
        assert!(!pairs.contains(&(cols[1].to_string(), cols[0].to_string())));
        for dist in &cols[2..] {
            dist.parse::<usize>().expect("distances are non-negative integers");
        }
    }
}

#[test]
fn thread_count_does_not_change_the_result_multiset() {
    let input = synthetic_input(25);
    let mut single = run_to_lines(&input, 1);
    let mut multi = run_to_lines(&input, 6);
    single.sort();
    multi.sort();
    assert_eq!(single, multi);
}

#[test]
fn known_distances_appear_in_output() {
    // Single-token fields: token-level distance is 0 for equal tokens,
    // 1 for differing ones, and the length for an empty field (record d's
    // first field is empty, so it has no tokens at all).
    let input = "a\tred\tx\nb\tred\ty\nc\tblue\tx\nd\t\tx\n";
    let lines = run_to_lines(input, 2);
    let set: HashSet<&str> = lines.iter().map(String::as_str).collect();
    assert_eq!(lines.len(), 6);
    assert!(set.contains("a\tb\t0\t1"));
    assert!(set.contains("a\tc\t1\t0"));
    assert!(set.contains("a\td\t1\t0"));
    assert!(set.contains("b\tc\t1\t1"));
    assert!(set.contains("b\td\t1\t1"));
    assert!(set.contains("c\td\t1\t0"));
}

#[test]
fn multi_token_fields_use_token_level_distance() {
    let input = "x\tthe quick brown fox\ny\tthe slow brown fox\nz\tthe quick brown fox jumps\n";
    let lines = run_to_lines(input, 2);
    let set: HashSet<&str> = lines.iter().map(String::as_str).collect();
    assert!(set.contains("x\ty\t1"), "one substituted token: {:?}", lines);
    assert!(set.contains("x\tz\t1"), "one appended token: {:?}", lines);
    assert!(set.contains("y\tz\t2"), "substitute plus append: {:?}", lines);
}

#[test]
fn rejected_records_never_reach_the_output() {
    // "bad" has three fields against an established count of two
    let input = "a\tone\ttwo\nbad\tone\ttwo\tthree\nb\tthree\tfour\nc\tfive\tsix\n";
    let lines = run_to_lines(input, 3);
    assert_eq!(lines.len(), 3);
    for line in &lines {
        let cols: Vec<&str> = line.split('\t').collect();
        assert_ne!(cols[0], "bad");
        assert_ne!(cols[1], "bad");
    }
}

#[test]
fn progress_counter_matches_pair_count() {
    let dataset = Dataset::load(Cursor::new(synthetic_input(20))).unwrap();
    let total = dataset.pair_count();
    let sink = ResultSink::new(Vec::new(), ProgressBar::new(total, ProgressMode::Never));
    PairEngine::new(EngineConfig {
        num_workers: 4,
        ..EngineConfig::default()
    })
    .run(&dataset, &sink)
    .unwrap();
    assert_eq!(total, 190);
    assert_eq!(sink.completed(), total);
}

#[test]
fn empty_and_singleton_datasets_produce_no_lines() {
    assert!(run_to_lines("", 4).is_empty());
    assert!(run_to_lines("only\tone record\n", 4).is_empty());
}
