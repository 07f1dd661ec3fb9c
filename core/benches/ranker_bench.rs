use criterion::{criterion_group, criterion_main, Criterion};
use jobmatch_core::{rank, Posting, Query, Subset, SubsetKind};

fn bench_rank(c: &mut Criterion) {
    let words = ["python", "spark", "sql", "aws", "airflow", "kafka", "dbt", "azure", "databricks", "etl"];
    let postings: Vec<Posting> = (0..500)
        .map(|i| Posting {
            row_id: i,
            description: (0..40).map(|j| words[(i * 7 + j * 3) % words.len()]).collect::<Vec<_>>().join(" "),
            location: None,
            remote_allowed: None,
        })
        .collect();
    let subset = Subset { kind: SubsetKind::Local, postings: postings.iter().collect() };
    let query = Query::parse("data engineer with python spark sql and aws").unwrap();
    c.bench_function("rank_500_postings", |b| b.iter(|| rank(&query, &subset)));
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
