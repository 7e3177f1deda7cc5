use dexsearch::{CommandHandler, Dex, Reply, SampleRng};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    let data_path = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());

    let dex = match Dex::load(Path::new(&data_path)) {
        Ok(dex) => dex,
        Err(e) => {
            println!("Error loading dex data: {}", e);
            return;
        }
    };
    println!(
        "Loaded {} species and {} moves from {}",
        dex.species_count(),
        dex.move_count(),
        data_path
    );
    println!("Commands: /dexsearch (/ds), /learn, /learnall, /weakness (/weak). 'quit' exits.");

    let handler = CommandHandler::new(dex);
    let mut rng = SampleRng::new_random();
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match handler.handle(line, false, &mut rng) {
            Reply::Text(text) => println!("{}", text),
            Reply::Suppressed => {
                println!("Unrecognized input. Try /dexsearch, /learn, or /weakness.")
            }
        }
    }
}
