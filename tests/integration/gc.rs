//! Garbage collection observed from whole programs

use cool_lang::backends::interpreter::Interpreter;
use cool_lang::backends::{ExecutionOutcome, ExecutorConfig};
use cool_lang::frontend::Compiler;

const CHURN: &str = r#"
class Cell {
    value : Int;
    link : Cell;
    set(v : Int, l : Cell) : Cell { { value <- v; link <- l; self; } };
    get_value() : Int { value };
    get_link() : Cell { link };
};
class Main inherits IO {
    kept : Cell;
    main() : Object { {
        let i : Int <- 0 in
            while i < 200 loop {
                if i - (i / 10) * 10 = 0 then kept <- (new Cell).set(i, kept) else (new Cell).set(i, kept) fi;
                i <- i + 1;
            } pool;
        let c : Cell <- kept, total : Int in {
            while not isvoid c loop { total <- total + c.get_value(); c <- c.get_link(); } pool;
            out_int(total);
        };
    } };
};
"#;

struct Stats {
    outcome: ExecutionOutcome,
    output: String,
    collections: usize,
    freed: usize,
    live: usize,
}

fn run_with_threshold(threshold: usize) -> Stats {
    let compiled = Compiler::new().compile(CHURN).unwrap();
    let config = ExecutorConfig {
        gc_threshold: threshold,
        ..ExecutorConfig::default()
    };
    let mut output = Vec::new();
    let (outcome, collections, freed, live) = {
        let mut interpreter = Interpreter::with_io(&compiled, config, "".as_bytes(), &mut output);
        let outcome = interpreter.run().unwrap();
        (
            outcome,
            interpreter.collector().collections(),
            interpreter.collector().total_freed(),
            interpreter.heap().size(),
        )
    };
    Stats {
        outcome,
        output: String::from_utf8(output).unwrap(),
        collections,
        freed,
        live,
    }
}

#[test]
fn test_collection_preserves_program_result() {
    let collected = run_with_threshold(8);
    let uncollected = run_with_threshold(usize::MAX);

    assert_eq!(collected.outcome, ExecutionOutcome::Finished);
    assert_eq!(collected.output, "1900");
    assert_eq!(collected.output, uncollected.output);

    assert!(collected.collections > 0);
    assert!(collected.freed > 0);
    assert_eq!(uncollected.collections, 0);
    assert_eq!(uncollected.freed, 0);
}

#[test]
fn test_heap_stays_bounded() {
    let collected = run_with_threshold(32);
    let uncollected = run_with_threshold(usize::MAX);
    assert!(collected.live < uncollected.live);
    assert_eq!(collected.live + collected.freed, uncollected.live);
}
