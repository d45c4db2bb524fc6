//! Performance benchmarks for struct emission
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.
//!
//! Measures Go struct emission for wide schemas (many sibling properties) and
//! deep schemas (nested objects), plus a full client run over many operations.

use clientgen_codegen::emitter::emit_struct;
use clientgen_codegen::format::IdentityFormatter;
use clientgen_codegen::golang::{self, GoClientConfig};
use clientgen_codegen::{AuthenticationConfig, Operation, ResolvedApi, Runner, SchemaNode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Object with `count` properties cycling through every scalar kind.
fn wide_schema(count: usize) -> SchemaNode {
    SchemaNode::object((0..count).map(|i| {
        let node = match i % 5 {
            0 => SchemaNode::string().required(),
            1 => SchemaNode::number(),
            2 => SchemaNode::boolean(),
            3 => SchemaNode::array(SchemaNode::string()),
            _ => SchemaNode::reference("Shared"),
        };
        (format!("field{i}"), node)
    }))
}

/// `depth` levels of nested objects, each with a couple of leaves.
fn deep_schema(depth: usize) -> SchemaNode {
    let mut node = SchemaNode::object([("leaf", SchemaNode::string())]);
    for level in 0..depth {
        node = SchemaNode::object([
            (format!("id{level}"), SchemaNode::number().required()),
            (format!("child{level}"), node),
        ]);
    }
    node
}

fn api_with_operations(count: usize) -> ResolvedApi {
    let operations = (0..count)
        .map(|i| {
            let op = if i % 2 == 0 {
                Operation::query(format!("Query{i}"))
            } else {
                Operation::mutation(format!("Mutation{i}"))
            };
            op.with_variables(wide_schema(8))
                .with_response(SchemaNode::object([("data", wide_schema(12))]))
        })
        .collect();
    ResolvedApi::new(operations, AuthenticationConfig::default()).unwrap()
}

fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit_wide");
    for count in [10, 100, 1000] {
        let schema = wide_schema(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &schema, |b, schema| {
            b.iter(|| emit_struct(black_box(schema), "Wide", true).unwrap())
        });
    }
    group.finish();
}

fn bench_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit_deep");
    for depth in [4, 16, 64] {
        let schema = deep_schema(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &schema, |b, schema| {
            b.iter(|| emit_struct(black_box(schema), "Deep", false).unwrap())
        });
    }
    group.finish();
}

fn bench_client_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("golang_client");
    let runner = Runner::new(IdentityFormatter);
    let templates = golang::all(&GoClientConfig::default());
    for count in [10, 100] {
        let api = api_with_operations(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &api, |b, api| {
            b.iter(|| runner.run(black_box(api), &templates).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wide, bench_deep, bench_client_run);
criterion_main!(benches);
