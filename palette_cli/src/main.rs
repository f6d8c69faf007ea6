use anyhow::Context;
use std::env;
use std::io::{self, Write};

use palette_core::{DEFAULT_SLOT, PaletteTable, argb};

fn print_help() {
    let version = palette_core::version();
    println!(
        r#"PaletteTable CLI (core {version})

            Commands:
            demo              (build a 4-entry table, set R/G/B, print them)
            repl [capacity]   (interactive table session, default capacity 16)

            Examples:
            cargo run -p palette_cli -- demo
            cargo run -p palette_cli -- repl 8
        "#
    );
}

/// The original demonstration: a 4-entry table with red, green and blue
/// at indices 0..=2, printed back as hex.
fn demo() -> anyhow::Result<()> {
    let mut table = PaletteTable::new(4)?;

    table.set_color_at(0, 0xFF0000)?;
    table.set_color_at(1, 0x00FF00)?;
    table.set_color_at(2, 0x0000FF)?;

    for index in 0..3 {
        let color = table.color_at(index)?;
        println!("Color at index {}: {}", index, argb::format(color));
    }

    Ok(())
}

fn print_table(table: &PaletteTable) {
    for (index, &color) in table.slots().iter().enumerate() {
        let marker = if color == DEFAULT_SLOT { " (default)" } else { "" };
        println!("  [{:>4}] {}{}", index, argb::format(color), marker);
    }
}

fn repl(capacity: usize) -> anyhow::Result<()> {
    let mut table = PaletteTable::new(capacity)?;

    println!("Palette table with {} slots.", table.number_of_colors());
    println!("Type 'help' for commands. 'quit' to exit.");

    loop {
        print!("pal> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // EOF (Ctrl+D)
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "help" => {
                println!(
                    r#"Commands:
                        new <capacity>        (replace the table)
                        set <index> <color>   (color as hex, e.g. #FF00FF00)
                        get <index>
                        add <color>           (first empty slot; full table ignores it)
                        list
                        count
                        help
                        quit
                        "#
                );
            }
            "quit" | "exit" => break,

            "new" => match parts.get(1).and_then(|s| s.parse::<usize>().ok()) {
                Some(capacity) => match PaletteTable::new(capacity) {
                    Ok(fresh) => {
                        table = fresh;
                        println!("New table with {} slots.", table.number_of_colors());
                    }
                    Err(e) => println!("error: {e}"),
                },
                None => println!("usage: new <capacity>"),
            },

            "set" => {
                let index = parts.get(1).and_then(|s| s.parse::<usize>().ok());
                let color = parts.get(2).and_then(|s| argb::parse(s));
                match (index, color) {
                    (Some(index), Some(color)) => match table.set_color_at(index, color) {
                        Ok(()) => println!("[{}] = {}", index, argb::format(color)),
                        Err(e) => println!("error: {e}"),
                    },
                    _ => println!("usage: set <index> <hex color>"),
                }
            }

            "get" => match parts.get(1).and_then(|s| s.parse::<usize>().ok()) {
                Some(index) => match table.color_at(index) {
                    Ok(color) => println!("[{}] = {}", index, argb::format(color)),
                    Err(e) => println!("error: {e}"),
                },
                None => println!("usage: get <index>"),
            },

            "add" => match parts.get(1).and_then(|s| argb::parse(s)) {
                Some(color) => {
                    let before = table.slots().to_vec();
                    table.add(color);
                    if table.slots() == before.as_slice() {
                        println!("table full, color not stored");
                    } else {
                        println!("added {}", argb::format(color));
                    }
                }
                None => println!("usage: add <hex color>"),
            },

            "list" => print_table(&table),

            "count" => println!("{} slots", table.number_of_colors()),

            _ => println!("Unknown command: {} (try 'help')", cmd),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    match args[1].as_str() {
        "demo" => demo()?,
        "repl" => {
            let capacity = match args.get(2) {
                Some(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("capacity must be a number, got '{raw}'"))?,
                None => 16,
            };
            repl(capacity)?;
        }
        _ => print_help(),
    }

    Ok(())
}
