mod repl {
    use rpncalc::RpnEvaluator;

    pub fn is_exit(input: &str) -> bool {
        let input = input.trim();
        input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
    }

    // evaluate one expression from the command line, true on success
    pub fn evalexpr(input: &str) -> bool {
        match rpncalc::calculate(input) {
            Err(e) => {
                eprintln!("Error: {}", e);
                false
            }
            Ok(result) => {
                println!("{} = {}", input.trim(), result);
                true
            }
        }
    }

    pub fn parse_statement(rpn: &mut RpnEvaluator, input: &str) {
        match rpn.calculate(input) {
            Err(e) => println!("Error: {}", e),
            Ok(result) => println!("{}", result),
        }
    }
}

fn main() {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        if !repl::evalexpr(&input[..]) {
            std::process::exit(1);
        }
        return;
    }

    let mut rl = match rustyline::DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("rpn: failed to start line editor: {}", e);
            std::process::exit(1);
        }
    };
    let histpath = dirs::home_dir().map(|h| h.join(".rpn_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }

    let mut rpn = rpncalc::RpnEvaluator::new();
    // Ctrl-C and Ctrl-D come back as errors, both end the session
    while let Ok(input) = rl.readline("rpn> ") {
        if input.trim().is_empty() {
            continue;
        }
        if repl::is_exit(&input) {
            break;
        }
        let _ = rl.add_history_entry(input.as_str());
        repl::parse_statement(&mut rpn, &input[..]);
    }

    if let Some(ref path) = histpath {
        if let Err(e) = rl.save_history(path) {
            eprintln!("rpn: failed to save history: {}", e);
        }
    }
}
