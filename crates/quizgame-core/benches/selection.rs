use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizgame_core::model::{categories, filter_questions, Question};
use quizgame_core::selection::{parse_selection, parse_yes_no};

fn make_questions(n: usize) -> Vec<Question> {
    let labels = ["Geography", "Science", "Math", "History", "Art"];
    (0..n)
        .map(|i| {
            Question::new(
                &format!("Question {i}?"),
                &["alpha", "beta", "gamma", "delta"],
                i % 4,
                labels[i % labels.len()],
            )
        })
        .collect()
}

fn bench_parse_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_selection");

    group.bench_function("valid", |b| {
        b.iter(|| parse_selection(black_box(" 3 "), black_box(4)))
    });

    group.bench_function("not_a_number", |b| {
        b.iter(|| parse_selection(black_box("three"), black_box(4)))
    });

    group.bench_function("overflow", |b| {
        b.iter(|| parse_selection(black_box("123456789012345678901234567890"), black_box(4)))
    });

    group.bench_function("yes_no", |b| b.iter(|| parse_yes_no(black_box("YES"))));

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    let questions = make_questions(1000);

    group.bench_function("categories/1000", |b| {
        b.iter(|| categories(black_box(&questions)))
    });

    group.bench_function("filter/1000", |b| {
        b.iter(|| filter_questions(black_box(&questions), black_box(Some("Science"))))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_selection, bench_filtering);
criterion_main!(benches);
