//! SimpleBrowser: a minimal browser shell.
//!
//! Entry point: a line-oriented console front end. Each command is routed
//! through the same `handle_method` dispatcher the RPC server uses.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use log::error;
use serde_json::{json, Value};

use simplebrowser::app::App;
use simplebrowser::rpc_handler::handle_method;

const HELP: &str = "\
Commands:
  open <url>            load a page
  back | forward        move through history
  refresh               reload the current address
  home | sethome        load / set the home page
  fav <title>           add the current address to favorites
  unfav <url> <title>   remove a favorite
  favs                  list favorites
  history               list visited pages
  suggest <text>        history URLs containing <text>
  bulk <file>           fetch every URL listed in <file>
  quit";

/// Maps a console line onto an RPC method and params.
fn parse_command(line: &str) -> Option<(&'static str, Value)> {
    let (cmd, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };
    let call = match cmd {
        "open" => ("page.load", json!({"url": rest})),
        "back" => ("nav.back", json!({})),
        "forward" => ("nav.forward", json!({})),
        "refresh" => ("page.refresh", json!({})),
        "home" => ("home.go", json!({})),
        "sethome" => ("home.set", json!({})),
        "fav" => ("favorites.add", json!({"title": rest})),
        "unfav" => {
            let (url, title) = rest.split_once(' ')?;
            ("favorites.remove", json!({"url": url, "title": title.trim()}))
        }
        "favs" => ("favorites.list", json!({})),
        "history" => ("history.list", json!({})),
        "suggest" => ("history.suggest", json!({"query": rest})),
        "bulk" => ("bulk.download", json!({"path": rest})),
        _ => return None,
    };
    Some(call)
}

fn print_page(page: &Value) {
    println!("{}", page["content"].as_str().unwrap_or_default());
    println!("[{}]", page["status_text"].as_str().unwrap_or_default());
}

fn render(method: &str, result: &Value) {
    match method {
        "page.load" | "page.refresh" | "home.go" => print_page(result),
        "nav.back" | "nav.forward" => match result.get("page") {
            Some(page) if !page.is_null() => print_page(page),
            _ => println!("(no {} entry)", if method == "nav.back" { "previous" } else { "next" }),
        },
        "bulk.download" => print!("{}", result["report"].as_str().unwrap_or_default()),
        "favorites.list" => {
            for item in result["items"].as_array().into_iter().flatten() {
                println!(
                    "{}  {}",
                    item["title"].as_str().unwrap_or_default(),
                    item["url"].as_str().unwrap_or_default()
                );
            }
        }
        "history.list" => {
            for item in result["items"].as_array().into_iter().flatten() {
                println!(
                    "{}  {}",
                    item["timestamp"].as_str().unwrap_or_default(),
                    item["url"].as_str().unwrap_or_default()
                );
            }
        }
        "history.suggest" => {
            for url in result["items"].as_array().into_iter().flatten() {
                println!("{}", url.as_str().unwrap_or_default());
            }
        }
        _ => println!("{}", result),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = std::env::var_os("SIMPLEBROWSER_CONFIG").map(PathBuf::from);
    let app = match App::new(settings_path) {
        Ok(app) => Mutex::new(app),
        Err(e) => {
            error!("Failed to initialize SimpleBrowser: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("SimpleBrowser v{}, type 'help' for commands", env!("CARGO_PKG_VERSION"));
    match handle_method(&app, "home.go", &json!({})) {
        Ok(result) => render("home.go", &result),
        Err(e) => println!("error: {}", e),
    }

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
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            _ => {}
        }

        match parse_command(line) {
            Some((method, params)) => match handle_method(&app, method, &params) {
                Ok(result) => render(method, &result),
                Err(e) => println!("error: {}", e),
            },
            None => println!("unknown command; type 'help'"),
        }
    }

    ExitCode::SUCCESS
}
