//! Performance benchmarks for content analysis and capsule queries.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Content analysis at various entry lengths
//! - Due/upcoming/anniversary scans at various collection sizes

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use journal_life::journal_core::{Block, JournalEntry, WritingContext};
use journal_life::JournalLifeCore;
use uuid::Uuid;

const SAMPLE_SENTENCE: &str =
    "Walked along the beach after work and called my sister, feeling calm and grateful. ";

fn entry_with_words(words: usize) -> JournalEntry {
    let sentence_words = SAMPLE_SENTENCE.split_whitespace().count();
    let text = SAMPLE_SENTENCE.repeat(words / sentence_words + 1);
    JournalEntry::new(
        Uuid::new_v4(),
        "Benchmark",
        vec![Block::text_block(text)],
        Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap(),
    )
}

/// Benchmark analysis and the full assistant pass with various entry sizes.
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let core = JournalLifeCore::default();

    for words in [50usize, 500, 5_000] {
        let entry = entry_with_words(words);

        group.throughput(Throughput::Elements(words as u64));
        group.bench_with_input(BenchmarkId::new("content", words), &entry, |b, entry| {
            b.iter(|| black_box(core.analyze_journal_content(black_box(entry))));
        });
        group.bench_with_input(BenchmarkId::new("assistant", words), &entry, |b, entry| {
            b.iter(|| {
                let insights = core
                    .intelligent_journal_assistant(black_box(entry), WritingContext::Travel)
                    .expect("assistant failed");
                black_box(insights);
            });
        });
    }

    group.finish();
}

/// Benchmark capsule and anniversary scans with various collection sizes.
fn bench_capsule_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("capsules");
    let core = JournalLifeCore::default();
    let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let created = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();

    for size in [100usize, 10_000] {
        let entries: Vec<JournalEntry> = (0..size)
            .map(|i| {
                JournalEntry::new(
                    Uuid::new_v4(),
                    format!("Entry {}", i),
                    Vec::new(),
                    created + Duration::days(i as i64 % 5_000),
                )
            })
            .collect();
        let capsules: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                core.create_time_capsule(entry, today + Duration::days(i as i64 % 30), created)
                    .expect("capsule creation failed")
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("due", size), &capsules, |b, capsules| {
            b.iter(|| black_box(core.check_due_time_capsules(capsules, today)));
        });
        group.bench_with_input(BenchmarkId::new("upcoming", size), &capsules, |b, capsules| {
            b.iter(|| black_box(core.get_upcoming_time_capsules(capsules, today, Some(14))));
        });
        group.bench_with_input(
            BenchmarkId::new("anniversaries", size),
            &entries,
            |b, entries| {
                b.iter(|| black_box(core.get_anniversary_entries(entries, today)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_analysis, bench_capsule_queries);
criterion_main!(benches);
