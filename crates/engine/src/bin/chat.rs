use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use engine::loader;
use engine::weights::{Dims, EMBEDDING_DIM, LSTM_UNITS};
use engine::{Engine, ModelWeights, Vocab, DEFAULT_MAX_WORDS};

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.len() < 2 {
        eprintln!("usage: chat <weights.bin> <vocab.txt> [seed words...]");
        std::process::exit(2);
    }

    let floats = match loader::load_f32_file(&args[0]) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("cannot read weights {}: {e}", args[0]);
            std::process::exit(1);
        }
    };
    let words = match loader::load_vocab_file(&args[1]) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("cannot read vocab {}: {e}", args[1]);
            std::process::exit(1);
        }
    };

    let dims = Dims { vocab: words.len(), embed: EMBEDDING_DIM, hidden: LSTM_UNITS };
    let weights = match ModelWeights::from_blob(dims, &floats) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("bad weight blob: {e}");
            std::process::exit(1);
        }
    };

    // wall-clock seed; pass identical inputs twice to see it vary
    let rng_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED);
    let mut engine = match Engine::new(weights, Vocab::new(words), rng_seed) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("engine init failed: {e}");
            std::process::exit(1);
        }
    };

    // single-shot mode when a seed phrase is on the command line
    if args.len() > 2 {
        let prompt = args[2..].join(" ");
        println!("> {}", prompt);
        println!("{}", engine.generate(&prompt, DEFAULT_MAX_WORDS));
        return;
    }

    // Interactive REPL
    println!("Interactive chat — 'quit' or Ctrl-D to exit");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        match line {
            Ok(s) => {
                let s = s.trim();
                if s.is_empty() {
                    continue;
                }
                if s.eq_ignore_ascii_case("quit") || s.eq_ignore_ascii_case("exit") {
                    println!("Bye");
                    break;
                }
                println!("AI: {}", engine.generate(s, DEFAULT_MAX_WORDS));
                // flush to keep REPL responsive
                let _ = stdout.flush();
            }
            Err(_) => break,
        }
    }
}
