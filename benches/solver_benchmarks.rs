use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crible::{
    examples::map_colouring::australia,
    solver::{
        backtrack::BacktrackSolver,
        heuristic_mac::HeuristicMacSolver,
        heuristics::{value::IdentityValueHeuristic, variable::DomainSizeHeuristic},
        mac::MacSolver,
        Solver,
    },
};

fn solver_variant_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Map Colouring Solvers");

    group.bench_function("backtracking", |b| {
        let (variables, constraints) = australia();
        let solver = BacktrackSolver::new(variables, constraints);
        b.iter(|| {
            let (outcome, _stats) = black_box(&solver).solve().unwrap();
            assert!(outcome.is_satisfiable());
        })
    });

    group.bench_function("mac", |b| {
        let (variables, constraints) = australia();
        let solver = MacSolver::new(variables, constraints, true).unwrap();
        b.iter(|| {
            let (outcome, _stats) = black_box(&solver).solve().unwrap();
            assert!(outcome.is_satisfiable());
        })
    });

    group.bench_function("heuristic mac, fail-first", |b| {
        let (variables, constraints) = australia();
        let solver = HeuristicMacSolver::new(
            variables,
            constraints,
            Box::new(DomainSizeHeuristic { maximize: false }),
            Box::new(IdentityValueHeuristic),
            true,
        )
        .unwrap();
        b.iter(|| {
            let (outcome, _stats) = black_box(&solver).solve().unwrap();
            assert!(outcome.is_satisfiable());
        })
    });

    group.finish();
}

fn propagation_mode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Propagation Modes");

    for (label, use_ac3) in [("AC-1", false), ("AC-3", true)] {
        group.bench_function(label, |b| {
            let (variables, constraints) = australia();
            let solver = MacSolver::new(variables, constraints, use_ac3).unwrap();
            b.iter(|| {
                let (outcome, _stats) = black_box(&solver).solve().unwrap();
                assert!(outcome.is_satisfiable());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, solver_variant_benchmarks, propagation_mode_benchmarks);
criterion_main!(benches);
