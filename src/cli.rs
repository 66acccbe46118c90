use std::io::{self, Write};
use neardb::{Vector, VectorStore};

pub enum Command {
    Insert { id: String, vec: Vec<f64> },
    Query { vec: Vec<f64> },
    Get { id: String },
    List,
    Count,
}

/// Parse a command from a provided argument vector
/// This is used for REPL input
pub fn parse_command_from_args(args: &[String]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("No command provided. Use: insert, query, get, list, count".to_string());
    }

    let command = &args[1];

    match command.as_str() {
        "insert" => parse_insert(args),
        "query" => parse_query(args),
        "get" => parse_get(args),
        "list" => parse_list(args),
        "count" => parse_count(args),
        _ => Err(format!("Unknown command: {}. Available: insert, query, get, list, count", command)),
    }
}

/// Parse the 'insert' command
/// Usage: insert <id> <vector>
fn parse_insert(args: &[String]) -> Result<Command, String> {
    // args[0] = program name
    // args[1] = "insert"
    // args[2] = id (required)
    // args[3..] = vector (required, at least 1)
    if args.len() < 4 {
        return Err("'insert' command requires an ID and a vector. Usage: insert <id> <v1> <v2> ...".to_string());
    }

    let id = args[2].clone();
    let vec: Result<Vec<f64>, _> = args[3..].iter()
        .map(|s| s.parse::<f64>())
        .collect();

    match vec {
        Ok(v) => Ok(Command::Insert { id, vec: v }),
        Err(_) => Err("Failed to parse vector components as numbers".to_string()),
    }
}

/// Parse the 'query' command
/// Usage: query <v1> <v2> ...
fn parse_query(args: &[String]) -> Result<Command, String> {
    // args[0] = program name
    // args[1] = "query"
    // args[2..] = vector components
    if args.len() < 3 {
        return Err("'query' command requires at least one vector component. Usage: query <v1> <v2> ...".to_string());
    }

    let vec: Result<Vec<f64>, _> = args[2..].iter()
        .map(|s| s.parse::<f64>())
        .collect();

    match vec {
        Ok(v) => Ok(Command::Query { vec: v }),
        Err(_) => Err("Failed to parse vector components as numbers".to_string()),
    }
}

/// Parse the 'get' command
/// Usage: get <id>
fn parse_get(args: &[String]) -> Result<Command, String> {
    if args.len() < 3 {
        return Err("'get' command requires an ID. Usage: get <id>".to_string());
    }

    let id = args[2].clone();

    Ok(Command::Get { id })
}

/// Parse the 'list' command
/// Usage: list
fn parse_list(args: &[String]) -> Result<Command, String> {
    // List takes no arguments
    if args.len() > 2 {
        eprintln!("Warning: 'list' command takes no arguments, ignoring extras");
    }

    Ok(Command::List)
}

/// Parse the 'count' command
/// Usage: count
fn parse_count(args: &[String]) -> Result<Command, String> {
    // Count takes no arguments
    if args.len() > 2 {
        eprintln!("Warning: 'count' command takes no arguments, ignoring extras");
    }

    Ok(Command::Count)
}

/// REPL mode - interactive session over a store that lives for the session
pub fn run_repl(store: &mut VectorStore) {
    println!("NearDB - Nearest-Neighbor Vector Store");
    println!("Type 'help' for commands, 'exit' or 'quit' to quit\n");

    loop {
        print!("neardb> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => {}
            Err(error) => {
                eprintln!("Error reading input: {}", error);
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if input == "exit" || input == "quit" {
            println!("Goodbye!");
            break;
        }

        if input == "help" {
            print_help();
            continue;
        }

        let mut args: Vec<String> = vec!["neardb".to_string()];
        args.extend(input.split_whitespace().map(|s| s.to_string()));

        let command = match parse_command_from_args(&args) {
            Ok(cmd) => cmd,
            Err(error) => {
                eprintln!("Error: {}", error);
                continue;
            }
        };

        execute_command(store, command);
    }
}

fn execute_command(store: &mut VectorStore, command: Command) {
    match command {
        Command::Insert { id, vec } => {
            store.insert(Vector::new(id.clone(), vec));
            println!("Inserted vector with id: {}", id);
        }

        Command::Query { vec } => {
            match store.find_nearest(&vec) {
                Ok(nearest) => {
                    // Empty-store sentinel: infinite distance, no error
                    if nearest.distance.is_infinite() {
                        println!("Store is empty, no nearest vector");
                    } else {
                        println!("{}", serde_json::to_string_pretty(&nearest).unwrap());
                    }
                }
                Err(error) => eprintln!("Error: {}", error),
            }
        }

        Command::Get { id } => {
            match store.get(&id) {
                Some(vector) => println!("Vector '{}': {:?}", id, vector.values),
                None => eprintln!("Error: Vector '{}' not found", id),
            }
        }

        Command::List => {
            let vectors = store.list();
            if vectors.is_empty() {
                println!("Store is empty");
            } else {
                println!("Stored vectors:");
                for v in vectors {
                    println!("  {}: {:?}", v.id, v.values);
                }
                println!("Total: {} vectors", store.len());
            }
        }

        Command::Count => println!("{}", store.len()),
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  insert <id> <v1> <v2> ...  - Insert a vector");
    println!("  query <v1> <v2> ...        - Find the nearest stored vector");
    println!("  get <id>                   - Retrieve a vector by ID");
    println!("  list                       - List all vectors");
    println!("  count                      - Show vector count");
    println!("  help                       - Show this help");
    println!("  exit, quit                 - Exit the program");
}
