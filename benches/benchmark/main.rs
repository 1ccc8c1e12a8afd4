use criterion::criterion_main;


criterion_main!(decorate::annotate_benches, decorate::log_benches);
