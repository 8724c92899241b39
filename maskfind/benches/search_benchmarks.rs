use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maskfind::{search, SearchAlgorithm, SearchConfig};
use std::{fs::File, io::Write, num::NonZeroUsize, path::Path};
use tempfile::tempdir;

fn create_test_file(path: &Path, line_count: usize) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    for i in 0..line_count {
        writeln!(
            file,
            "line {} with some searchable text: cab cob cub and more filler",
            i
        )?;
    }
    Ok(())
}

fn create_config(path: &Path, mask: &str, algorithm: SearchAlgorithm) -> SearchConfig {
    SearchConfig {
        mask: mask.to_string(),
        input_path: path.to_path_buf(),
        algorithm,
        thread_count: NonZeroUsize::new(4).unwrap(),
        log_level: "warn".to_string(),
    }
}

fn bench_algorithms(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.txt");
    create_test_file(&path, 500).unwrap();

    let algorithms = [
        SearchAlgorithm::Naive,
        SearchAlgorithm::BoyerMoore,
        SearchAlgorithm::Horspool,
    ];

    let mut group = c.benchmark_group("Algorithm");
    for algorithm in algorithms {
        let config = create_config(&path, "c?b", algorithm);
        group.bench_function(format!("{algorithm}"), |b| {
            b.iter(|| black_box(search(&config).unwrap()));
        });
    }
    group.finish();
}

fn bench_wildcard_counts(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.txt");
    create_test_file(&path, 100).unwrap();

    let masks = ["cab", "c?b", "c??"];

    let mut group = c.benchmark_group("Wildcard Count");
    for (wildcards, mask) in masks.iter().enumerate() {
        let config = create_config(&path, mask, SearchAlgorithm::Horspool);
        group.bench_function(format!("wildcards_{}", wildcards), |b| {
            b.iter(|| black_box(search(&config).unwrap()));
        });
    }
    group.finish();
}

fn bench_thread_scaling(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.txt");
    create_test_file(&path, 200).unwrap();

    let mut group = c.benchmark_group("Thread Scaling");
    for threads in [1, 2, 4, 8] {
        let mut config = create_config(&path, "c??", SearchAlgorithm::Horspool);
        config.thread_count = NonZeroUsize::new(threads).unwrap();
        group.bench_function(format!("threads_{}", threads), |b| {
            b.iter(|| black_box(search(&config).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_algorithms,
    bench_wildcard_counts,
    bench_thread_scaling
);
criterion_main!(benches);
