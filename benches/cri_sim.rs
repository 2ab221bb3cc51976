use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::{StdRand, Wyrand};
use tinyrand_alloc::Mock;

use matchcast::domain::{Outcome, Scenario};
use matchcast::sim;
use matchcast::sim::GoalRates;

fn criterion_benchmark(c: &mut Criterion) {
    let goal_rates = GoalRates {
        home: 1.6 / 90.,
        away: 1.1 / 90.,
    };
    let kickoff = Scenario::kickoff();

    // sanity check
    let outcome = sim::simulate(&goal_rates, &Scenario::new(90, 2, 1), &mut StdRand::default());
    assert_eq!(Outcome::Home, outcome);

    c.bench_function("cri_sim_wyrand", |b| {
        let mut rand = Wyrand::default();
        b.iter(|| sim::simulate(&goal_rates, &kickoff, &mut rand));
    });

    c.bench_function("cri_sim_mock", |b| {
        let mut rand = Mock::default();
        b.iter(|| sim::simulate(&goal_rates, &kickoff, &mut rand));
    });

    c.bench_function("cri_sim_second_half", |b| {
        let scenario = Scenario::new(45, 1, 0);
        let mut rand = Wyrand::default();
        b.iter(|| sim::simulate(&goal_rates, &scenario, &mut rand));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
