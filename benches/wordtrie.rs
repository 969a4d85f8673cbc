use wordtrie::trie::Trie;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{distributions::Alphanumeric, thread_rng, Rng};

fn random_word(max_len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(thread_rng().gen_range(1..=max_len))
        .map(char::from)
        .collect()
}

fn make_trie(words: &[String]) -> Trie {
    let mut trie = Trie::new();
    for w in words {
        trie.insert(w);
    }
    trie
}

fn trie_insert(c: &mut Criterion) {
    static POPULATION_SIZE: usize = 1000;
    static SIZE: usize = 16;

    let words: Vec<String> = (0..POPULATION_SIZE).map(|_| random_word(SIZE)).collect();
    c.bench_function("trie insert", |b| b.iter(|| make_trie(&words)));
}

fn trie_contains(c: &mut Criterion) {
    static POPULATION_SIZE: usize = 1000;
    static SIZE: usize = 16;

    let words: Vec<String> = (0..POPULATION_SIZE).map(|_| random_word(SIZE)).collect();
    let trie = make_trie(&words);
    c.bench_function("trie contains", |b| {
        b.iter(|| {
            words
                .iter()
                .map(|w| trie.contains(w))
                .collect::<Vec<bool>>()
        })
    });
    c.bench_function("trie is_word", |b| {
        b.iter(|| {
            words
                .iter()
                .map(|w| trie.is_word(w))
                .collect::<Vec<bool>>()
        })
    });
}

fn search(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 10000;

    let mut group = c.benchmark_group("search");
    for size in [BASE_SIZE, 2 * BASE_SIZE, 4 * BASE_SIZE, 8 * BASE_SIZE].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("random find", size), size, |b, &size| {
            let mut trie = Trie::new();
            for _i in 0..POPULATION_SIZE {
                trie.insert(&random_word(size));
            }
            b.iter_batched(
                || random_word(size),
                |input| trie.is_word(&input),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("always find", size), size, |b, &size| {
            let mut trie = Trie::new();
            let mut searches: Vec<String> = vec![];
            for _i in 0..POPULATION_SIZE {
                let entry = random_word(size);
                searches.push(entry.clone());
                trie.insert(&entry);
            }
            b.iter_batched(
                || searches[thread_rng().gen_range(1..POPULATION_SIZE)].clone(),
                |input| trie.is_word(&input),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn enumerate(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 1000;

    let mut group = c.benchmark_group("enumerate");
    for size in [BASE_SIZE, 2 * BASE_SIZE, 4 * BASE_SIZE, 8 * BASE_SIZE].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("all words", size), size, |b, &size| {
            let mut trie = Trie::new();
            for _i in 0..POPULATION_SIZE {
                trie.insert(&random_word(size));
            }
            b.iter(|| trie.all_words().count())
        });
    }
    group.finish();
}

criterion_group!(benches, trie_insert, trie_contains, search, enumerate);
criterion_main!(benches);
