//! Benchmark-only crate; see `benches/pipeline_benchmarks.rs`.
