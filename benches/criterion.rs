use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use ecmascript_absops::ecmascript::{
    abstract_operations::type_conversion::{canonical_numeric_index_string, to_number},
    execution::{Agent, Options},
    types::{String, Value},
};

/// Benchmarks `op` on each input, once with the fast paths enabled and once
/// with them disabled.
fn bench_strings<R>(
    c: &mut Criterion,
    name: &str,
    inputs: &[&str],
    op: impl Fn(&mut Agent, String) -> R,
) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).try_init();
    for disable_fast_paths in [false, true] {
        let mut agent = Agent::new(Options { disable_fast_paths });
        let path = if disable_fast_paths { "general" } else { "fast" };
        for input in inputs {
            let string = String::from_str(&mut agent, input);
            c.bench_function(&format!("{name}({input:?}) {path}"), |b| {
                b.iter_batched(
                    || string,
                    |string| op(&mut agent, string),
                    BatchSize::SmallInput,
                )
            });
        }
    }
}

fn bench_canonical_numeric_index_string(c: &mut Criterion) {
    bench_strings(
        c,
        "CanonicalNumericIndexString",
        &["5", "42", "325", "1234", "33333", "-0", "1.5", "length"],
        |agent, string| canonical_numeric_index_string(agent, string),
    );
}

fn bench_to_number(c: &mut Criterion) {
    bench_strings(
        c,
        "ToNumber",
        &["42", "  3.25  ", "0x1F", "1e21", "Infinity", "not a number"],
        |agent, string| to_number(agent, Value::String(string)),
    );
}

criterion_group!(benches, bench_canonical_numeric_index_string, bench_to_number);
criterion_main!(benches);
