//! Parser benchmarks.
//!
//! Run with: `cargo bench --bench parser_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use monkey_lex::Lexer;
use monkey_syntax::Parser;

fn parse_source(source: &str) {
    let mut parser = Parser::new(Lexer::new(source));
    black_box(parser.parse_program());
}

fn bench_parser_let(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_let");

    let source = "let x = 42;";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("let_statement", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_expressions");

    let source = "1 + 2 * 3 - 4 / 5 + (6 + 7) * 8 == 9 != 10 < 11 > 12;";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("operator_chain", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_functions");

    let source = r#"
        let fibonacci = fn(n) {
            if (n < 2) {
                return n;
            } else {
                return fibonacci(n - 1) + fibonacci(n - 2);
            }
        };
        fibonacci(10);
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("recursive_function", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

criterion_group!(benches, bench_parser_let, bench_parser_expressions, bench_parser_functions);
criterion_main!(benches);
