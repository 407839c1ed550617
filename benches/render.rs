use std::hint::black_box;

use chrono::DateTime;
use criterion::{criterion_group, criterion_main, Criterion};
use icbm3000::{
    domain::log::ConsoleLog, infrastructure::config::Config, presentation::components::Components,
    AppState,
};
use ratatui::{backend::TestBackend, Terminal};

fn console_state(log_entries: usize) -> AppState {
    let config = Config::defaults().expect("embedded config parses");
    let mut state = AppState::new_at(config, DateTime::UNIX_EPOCH);
    let mut log = ConsoleLog::new();
    for i in 0..log_entries {
        log.info(DateTime::UNIX_EPOCH, format!("T-MINUS {i}"));
    }
    state.console.log = log;
    state
}

fn benchmark(c: &mut Criterion) {
    let components = Components::new();
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test backend");

    let empty = console_state(0);
    c.bench_function("render-empty-log", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| components.render(frame, black_box(&empty)))
                .map(|_| ())
        })
    });

    let busy = console_state(500);
    c.bench_function("render-busy-log", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| components.render(frame, black_box(&busy)))
                .map(|_| ())
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
