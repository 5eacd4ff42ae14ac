//! Benchmarks comparing shoal parsing vs the `toml` crate
//!
//! Run with: cargo bench -p shoal-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Sample shoal content
const SHOAL_SAMPLE: &str = r#"; service configuration sample
host = localhost
port = 8080
tags = alpha, beta, gamma
paths = [
    /usr/local/bin,
    /opt/tools
]

#logging:
  level = info
  file = '/var/log/app.log'
-

#redis:
  url = redis://127.0.0.1
  #pool:
    size = 16
    timeout = 30
--redis

#endpoints:
###
  route = /api/v1/users
  methods = [GET, POST]
###
  route = /api/v1/items
  methods = [GET]
-
"#;

/// Equivalent TOML content (as close as possible)
const TOML_SAMPLE: &str = r#"# service configuration sample
host = "localhost"
port = 8080
tags = ["alpha", "beta", "gamma"]
paths = ["/usr/local/bin", "/opt/tools"]

[logging]
level = "info"
file = "/var/log/app.log"

[redis]
url = "redis://127.0.0.1"

[redis.pool]
size = 16
timeout = 30

[[endpoints]]
route = "/api/v1/users"
methods = ["GET", "POST"]

[[endpoints]]
route = "/api/v1/items"
methods = ["GET"]
"#;

fn build_document(sections: usize) -> String {
    let mut doc = String::new();
    for i in 0..sections {
        doc.push_str(&format!(
            "#section{i}:\n  name = 'service {i}'\n  replicas = {i}, {}\n  #limits:\n    cpu = 2\n    memory = 512\n--section{i}\n",
            i + 1
        ));
    }
    doc
}

fn bench_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_document");

    group.throughput(Throughput::Bytes(SHOAL_SAMPLE.len() as u64));
    group.bench_function("shoal", |b| {
        b.iter(|| shoal_core::parse(black_box(SHOAL_SAMPLE)).unwrap())
    });

    group.throughput(Throughput::Bytes(TOML_SAMPLE.len() as u64));
    group.bench_function("toml", |b| {
        b.iter(|| black_box(TOML_SAMPLE).parse::<toml::Table>().unwrap())
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_count");
    for sections in [10, 100, 1000] {
        let doc = build_document(sections);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| shoal_core::parse(black_box(doc)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_samples, bench_scaling);
criterion_main!(benches);
