//! quickorder — voice food-order extraction at the counter.
//!
//! Reads transcripts (typed or transcribed from WAV files) on stdin,
//! turns them into priced order lines against the configured menu, and
//! keeps an editable session until the operator submits.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use quickorder::config::AppConfig;
use quickorder::menu::MenuCatalog;
use quickorder::order::{OrderLine, OrderSession};
use quickorder::pipeline::OrderPipeline;
use quickorder::remote::{ApiInference, HttpTranscriber, ItemInference, Transcriber};

const HELP: &str = "\
commands:
  <transcript>   process spoken-order text and load the result
  audio <path>   transcribe a WAV file and load the result
  + <n>          increment quantity of line n (1-based)
  - <n>          decrement quantity of line n (floors at 1)
  del <n>        delete line n
  submit         submit the current order to the log
  log            show the submitted log and grand total
  menu           show the menu
  help           show this help
  quit / exit    leave";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("failed to load config ({e}); using defaults");
            AppConfig::default()
        }
    };

    let catalog = Arc::new(MenuCatalog::new(&config.menu));
    if catalog.is_empty() {
        log::error!("menu is empty; nothing can be matched or priced");
        std::process::exit(1);
    }

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };

    let transcriber: Arc<dyn Transcriber> =
        Arc::new(HttpTranscriber::from_config(&config.transcriber));
    let inference: Arc<dyn ItemInference> = Arc::new(ApiInference::from_config(&config.inference));
    let pipeline = OrderPipeline::new(Arc::clone(&catalog), transcriber, inference, &config);

    let mut session = OrderSession::new();

    log::info!("quickorder ready ({:?} mode)", config.mode);
    println!("quickorder — type an order, or `help` for commands");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                log::error!("stdin read failed: {e}");
                break;
            }
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match parse_command(input) {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Menu => print_menu(&catalog),
            Command::Log => print_log(&session),
            Command::Submit => match session.submit() {
                Ok(n) => println!("submitted {n} line(s); grand total {}", session.grand_total()),
                Err(e) => println!("cannot submit: {e}"),
            },
            Command::Increment(n) => edit(&mut session, |s| s.increment(n - 1)),
            Command::Decrement(n) => edit(&mut session, |s| s.decrement(n - 1)),
            Command::Delete(n) => edit(&mut session, |s| s.delete(n - 1)),
            Command::Audio(path) => match std::fs::read(&path) {
                Ok(wav) => match rt.block_on(pipeline.process_audio(&wav)) {
                    Ok(lines) => load_and_print(&mut session, lines),
                    Err(e) => println!("order attempt failed: {e}"),
                },
                Err(e) => println!("cannot read {path}: {e}"),
            },
            Command::Transcript(text) => match rt.block_on(pipeline.process_transcript(&text)) {
                Ok(lines) => load_and_print(&mut session, lines),
                Err(e) => println!("order attempt failed: {e}"),
            },
        }
    }

    log::info!("bye");
}

// ---------------------------------------------------------------------------
// Command parsing
// ---------------------------------------------------------------------------

enum Command {
    Transcript(String),
    Audio(String),
    Increment(usize),
    Decrement(usize),
    Delete(usize),
    Submit,
    Log,
    Menu,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Command {
    let (head, rest) = match input.split_once(char::is_whitespace) {
        Some((h, r)) => (h, r.trim()),
        None => (input, ""),
    };

    // A leading digit means a spoken order ("2 chicken burger"), not a
    // line-edit command, so only `+`/`-`/`del` take a line number.
    match head {
        "quit" | "exit" => Command::Quit,
        "help" => Command::Help,
        "menu" if rest.is_empty() => Command::Menu,
        "log" if rest.is_empty() => Command::Log,
        "submit" if rest.is_empty() => Command::Submit,
        "audio" if !rest.is_empty() => Command::Audio(rest.to_string()),
        "+" | "-" | "del" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => match head {
                "+" => Command::Increment(n),
                "-" => Command::Decrement(n),
                _ => Command::Delete(n),
            },
            _ => Command::Transcript(input.to_string()),
        },
        _ => Command::Transcript(input.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Output helpers
// ---------------------------------------------------------------------------

fn edit(
    session: &mut OrderSession,
    op: impl FnOnce(&mut OrderSession) -> Result<(), quickorder::order::SessionError>,
) {
    match op(session) {
        Ok(()) => print_current(session),
        Err(e) => println!("{e}"),
    }
}

fn load_and_print(session: &mut OrderSession, lines: Vec<OrderLine>) {
    if lines.is_empty() {
        println!("no recognizable items in that order");
        return;
    }
    session.load(lines);
    print_current(session);
}

fn print_current(session: &OrderSession) {
    if session.current_lines().is_empty() {
        println!("(current order is empty)");
        return;
    }
    println!("{:>3}  {:<24} {:>4} {:>10} {:>8}", "#", "item", "qty", "unit", "total");
    for (i, line) in session.current_lines().iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:>4} {:>10} {:>8}",
            i + 1,
            line.item,
            line.quantity,
            line.unit_price,
            line.total
        );
    }
    println!("current total: {}", session.current_total());
}

fn print_log(session: &OrderSession) {
    if session.submitted_log().is_empty() {
        println!("(log is empty)");
        return;
    }
    for entry in session.submitted_log() {
        println!(
            "{}  {:<24} {:>4} x {:>5} = {:>8}",
            entry.submitted_at.format("%a %I:%M %p"),
            entry.line.item,
            entry.line.quantity,
            entry.line.unit_price,
            entry.line.total
        );
    }
    println!("grand total: {}", session.grand_total());
}

fn print_menu(catalog: &MenuCatalog) {
    for name in catalog.all_names() {
        println!("{:<24} {:>5}", name, catalog.lookup_price(name));
    }
}
