use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reqmock_matcher::{Matcher, MatcherSet, PreparedRequest};

fn create_matchers(count: usize) -> MatcherSet {
    (0..count)
        .map(|i| {
            Matcher::builder("GET", &format!("//api.test.com/v1/endpoint{i}?page=1"))
                .build()
                .unwrap()
        })
        .collect()
}

fn create_regex_matchers(count: usize) -> MatcherSet {
    (0..count)
        .map(|i| {
            Matcher::builder("GET", "/")
                .regex(format!(r"/v\d+/endpoint{i}$"))
                .build()
                .unwrap()
        })
        .collect()
}

fn bench_set_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_lookup");

    for count in [10, 50, 100, 500].iter() {
        let set = create_matchers(*count);

        let first = PreparedRequest::new("GET", "https://api.test.com/v1/endpoint0?page=1").unwrap();
        let last = PreparedRequest::new(
            "GET",
            format!("https://api.test.com/v1/endpoint{}?page=1&x=2", count - 1),
        )
        .unwrap();
        let miss = PreparedRequest::new("GET", "https://api.test.com/v1/nothing").unwrap();

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("match_first", count), count, |b, _| {
            b.iter(|| set.find(black_box(&first)));
        });
        group.bench_with_input(BenchmarkId::new("match_last", count), count, |b, _| {
            b.iter(|| set.find(black_box(&last)));
        });
        group.bench_with_input(BenchmarkId::new("no_match", count), count, |b, _| {
            b.iter(|| set.find(black_box(&miss)));
        });
    }

    group.finish();
}

fn bench_regex_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("regex_lookup");

    for count in [10, 50, 100].iter() {
        let set = create_regex_matchers(*count);
        let request =
            PreparedRequest::new("GET", format!("http://localhost/v1/endpoint{}", count / 2))
                .unwrap();

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("regex_match", count), count, |b, _| {
            b.iter(|| set.find(black_box(&request)));
        });
    }

    group.finish();
}

fn bench_single_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_matcher");

    let subset = Matcher::builder("GET", "http://www.test.com:5000/abc?a=1&b=2")
        .build()
        .unwrap();
    let complete = Matcher::builder("GET", "http://www.test.com:5000/abc?a=1&b=2")
        .complete_qs(true)
        .build()
        .unwrap();
    let request =
        PreparedRequest::new("get", "http://www.test.com:5000/abc?c=3&b=2&a=1").unwrap();

    group.throughput(Throughput::Elements(1));
    group.bench_function("subset_qs", |b| {
        b.iter(|| subset.matches(black_box(&request)));
    });
    group.bench_function("complete_qs", |b| {
        b.iter(|| complete.matches(black_box(&request)));
    });
    group.bench_function("prepare_request", |b| {
        b.iter(|| {
            PreparedRequest::new(
                black_box("GET"),
                black_box("http://www.test.com:5000/abc?c=3&b=2&a=1"),
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_set_lookup,
    bench_regex_lookup,
    bench_single_matcher
);
criterion_main!(benches);
