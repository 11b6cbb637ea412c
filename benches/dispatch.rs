//! Benchmarks for function dispatch
//!
//! This benchmark measures:
//! - Functions schema emission for registries of different sizes
//! - Lookup plus argument parsing plus invocation for a single call

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ai_lib_functions::functions::{BaseFunctionSet, FunctionRegistry, FunctionSet, ToolOptions};
use ai_lib_functions::CallRequest;
use schemars::JsonSchema;
use serde::Deserialize;

/// Add two decimal values together.
#[derive(Deserialize, JsonSchema)]
struct AddDecimalValues {
    value1: i64,
    value2: i64,
}

fn add_decimal_values(args: AddDecimalValues) -> anyhow::Result<i64> {
    Ok(args.value1 + args.value2)
}

fn registry_of(size: usize) -> FunctionRegistry {
    let mut functions = FunctionRegistry::new();
    for i in 0..size {
        ToolOptions::new()
            .name(format!("add_{i}"))
            .apply(&mut functions, add_decimal_values)
            .expect("register");
    }
    functions
}

fn bench_functions_schema(c: &mut Criterion) {
    let mut group = c.benchmark_group("functions_schema");
    for size in [1usize, 10, 50] {
        let functions = registry_of(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &functions, |b, f| {
            b.iter(|| black_box(f.functions_schema()))
        });
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    for size in [1usize, 10, 50] {
        let functions = registry_of(size);
        let request = CallRequest::new(
            format!("add_{}", size - 1),
            r#"{"value1": 2, "value2": 3}"#,
        );
        group.bench_with_input(BenchmarkId::from_parameter(size), &request, |b, r| {
            b.iter(|| black_box(functions.run(r).expect("run")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_functions_schema, bench_run);
criterion_main!(benches);
