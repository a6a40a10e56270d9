use criterion::{criterion_group, criterion_main, Criterion};
use jsonval::lexer::{Lexer, Token};
use pprof::criterion::{Output, PProfProfiler};
use std::fs;

macro_rules! build_lex_benchmark {
    ($func : tt, $filename : expr) => {
        fn $func(c: &mut Criterion) {
            let bytes = fs::read(format!("fixtures/json/valid/{}.json", $filename)).unwrap();
            c.bench_function(concat!("lex of ", $filename), |b| {
                b.iter(|| {
                    let mut lexer = Lexer::new(&bytes);
                    loop {
                        match lexer.consume() {
                            Ok((Token::EndOfInput, _)) => break,
                            Ok(_) => (),
                            Err(err) => {
                                println!("error occurred: {:?}", err);
                                break;
                            }
                        }
                    }
                })
            });
        }
    };
}

build_lex_benchmark!(blog_entries, "blog_entries");
build_lex_benchmark!(simple_structure, "simple_structure");
build_lex_benchmark!(events, "events");
build_lex_benchmark!(unicode, "unicode");

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = blog_entries, simple_structure, events, unicode
}
criterion_main!(benches);
