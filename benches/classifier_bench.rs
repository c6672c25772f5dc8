use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geweb_sqllog_report::{Classifier, ExplanationRules, convert_text, detect_command_type};

const PREFIX: &str = "a1b2c3d4-0000-0000-0000-000000000000|123456:geweb|2024-05-10 10:00:00|";

/// Benchmark: 单个条目分类
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = Classifier::default();

    let test_cases = vec![
        ("schema_rule", "SELECT * FROM sch_geweb.movimentacao_funcionario WHERE id = 1"),
        ("keyword_rule", "DELETE FROM foo WHERE id = 1"),
        ("fallback", "COMMIT"),
    ];

    for (name, sql) in test_cases {
        let text = format!("{PREFIX}{sql}");
        group.bench_with_input(BenchmarkId::new("classify_text", name), &text, |b, text| {
            b.iter(|| classifier.classify_text(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("detect_command_type", name), &sql, |b, &sql| {
            b.iter(|| detect_command_type(black_box(sql)))
        });
    }

    group.finish();
}

/// Benchmark: 完整文本转换
fn bench_convert_text(c: &mut Criterion) {
    let log = format!("{PREFIX}SELECT *\n  FROM sch_geweb.turma_disciplina\n  WHERE id = 1\n").repeat(1000);
    let rules = ExplanationRules::geweb_default();

    c.bench_function("convert_text_1000_entries", |b| {
        b.iter(|| convert_text(black_box(&log), &rules))
    });
}

criterion_group!(benches, bench_classify, bench_convert_text);
criterion_main!(benches);
