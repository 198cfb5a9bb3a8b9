use criterion::{black_box, criterion_group, criterion_main, Criterion};

use radquiz_core::bank;
use radquiz_core::feedback::FeedbackBand;
use radquiz_core::model::{Question, QuestionKind, Topic};
use radquiz_core::session::QuizSession;

fn make_topic(n: usize) -> Topic {
    Topic {
        id: "bench".into(),
        name: "Bench Topic".into(),
        description: String::new(),
        questions: (0..n)
            .map(|i| Question {
                id: format!("q{i}"),
                text: format!("Bench prompt {i}"),
                kind: QuestionKind::MultipleChoice,
                options: vec!["one".into(), "two".into(), "three".into(), "four".into()],
                correct_answer: "B".into(),
                explanation: "Bench explanation".into(),
            })
            .collect(),
    }
}

fn make_bank_toml(n: usize) -> String {
    let mut toml = String::from(
        "[topic]\nid = \"bench\"\nname = \"Bench Topic\"\ndescription = \"generated\"\n",
    );
    for i in 0..n {
        toml.push_str(&format!(
            "\n[[questions]]\nid = \"q{i}\"\ntext = \"Bench prompt {i}\"\nkind = \"mcq\"\noptions = [\"one\", \"two\", \"three\", \"four\"]\ncorrect_answer = \"B\"\nexplanation = \"Bench explanation\"\n"
        ));
    }
    toml
}

fn bench_session_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_sweep");

    for n in [10usize, 50, 200] {
        let topic = make_topic(n);
        group.bench_function(format!("{n}_questions"), |b| {
            b.iter(|| {
                let mut session = QuizSession::start(black_box(topic.clone())).unwrap();
                while let Some(question) = session.current_question().cloned() {
                    session.select_answer(&question.options[1]).unwrap();
                    session.advance().unwrap();
                }
                session.report().unwrap()
            })
        });
    }

    group.finish();
}

fn bench_band_lookup(c: &mut Criterion) {
    c.bench_function("band_lookup", |b| {
        b.iter(|| {
            for pct in 0..=100u32 {
                black_box(FeedbackBand::for_percentage(black_box(pct)));
            }
        })
    });
}

fn bench_bank_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank_parsing");

    for n in [10usize, 100] {
        let toml = make_bank_toml(n);
        group.bench_function(format!("{n}_questions"), |b| {
            b.iter(|| {
                bank::parse_topic_str(black_box(&toml), "bench.toml".as_ref()).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_session_sweep, bench_band_lookup, bench_bank_parsing);
criterion_main!(benches);
