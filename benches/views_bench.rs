//! Benchmarks for the hot paths behind interactive views
//!
//! Run with: cargo bench

use carboncredx::assistant::reply_for;
use carboncredx::clock::{Clock, ManualClock};
use carboncredx::config::SimulationConfig;
use carboncredx::format::group_indian;
use carboncredx::store::{reduce, AppStore, StoreAction, TokenHolding};
use carboncredx::upload::{Assessment, FileMeta, FixedAssessor, UploadPipeline};
use carboncredx::views::explorer::{ExplorerView, ProjectFilter};
use chrono::Duration;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_assistant(c: &mut Criterion) {
    let mut group = c.benchmark_group("assistant");

    for prompt in ["show my portfolio", "what is the market price today?", "hello there"] {
        group.bench_function(format!("reply_for_{}", prompt.len()), |b| {
            b.iter(|| reply_for(black_box(prompt)))
        });
    }

    group.finish();
}

fn bench_upload_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("upload");
    let config = SimulationConfig::default();

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("select_and_settle_{}", size), |b| {
            b.iter(|| {
                let clock = ManualClock::at_epoch();
                let assessor = FixedAssessor(Assessment::Verified { credits: 500 });
                let mut pipeline = UploadPipeline::new(assessor, &config);
                let files = (0..size)
                    .map(|i| FileMeta::new(format!("cert-{}.pdf", i), 2048, "application/pdf"));
                pipeline.select_files(files, clock.now());
                clock.advance(Duration::seconds(3));
                black_box(pipeline.advance(clock.now()))
            })
        });
    }

    group.finish();
}

fn bench_explorer(c: &mut Criterion) {
    let mut group = c.benchmark_group("explorer");

    group.bench_function("search_and_filter", |b| {
        let mut view = ExplorerView::new();
        view.set_filter(ProjectFilter::Forest);
        view.set_query("amazon");
        b.iter(|| black_box(view.results()))
    });

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    let mut store = AppStore::default();
    for i in 0..100 {
        store.dispatch(StoreAction::AddToken(TokenHolding {
            id: format!("t{}", i),
            symbol: format!("T{}", i),
            name: format!("Token {}", i),
            balance: 100.0,
            value: 1845.0,
            price: 18.45,
        }));
    }

    group.bench_function("update_balance_100_tokens", |b| {
        b.iter(|| {
            reduce(
                black_box(&store),
                StoreAction::UpdateTokenBalance {
                    token_id: "t50".to_string(),
                    balance: 250.0,
                },
            )
        })
    });

    group.bench_function("group_indian", |b| b.iter(|| group_indian(black_box(1_234_567_890))));

    group.finish();
}

criterion_group!(
    benches,
    bench_assistant,
    bench_upload_pipeline,
    bench_explorer,
    bench_store
);
criterion_main!(benches);
