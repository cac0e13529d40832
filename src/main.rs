//! tapcalc binary - one-shot evaluation or an interactive calculator REPL

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tapcalc::{lex, Calculator, Expression, Token};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        // One-shot mode: evaluate the joined arguments and exit
        let input = args.join(" ");
        match tapcalc::eval(&input) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = repl() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let calc = Calculator::new();

    println!("tapcalc v{} - type an expression, \"ac\" to clear, Ctrl-D to exit", VERSION);
    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match line {
                    "ac" | "AC" => {
                        calc.all_clear();
                        continue;
                    }
                    "exit" | "quit" => break,
                    _ => {}
                }

                let mut tokens = match lex(line) {
                    Ok(tokens) => tokens,
                    Err(e) => {
                        eprintln!("error: {}", e);
                        continue;
                    }
                };

                // A line starting with an operator continues from the
                // previous result: "+2" after a result of 14 means "14+2"
                if let (Some(prev), Some(Token::Op(_))) = (calc.last_result(), tokens.first()) {
                    tokens.insert(0, Token::from(prev));
                }

                calc.set_expression(tokens.into_iter().collect::<Expression>());
                match calc.evaluate() {
                    Ok(value) => println!("{}", value),
                    Err(e) => eprintln!("error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
