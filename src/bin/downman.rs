//! Downloads Manager (downman) - Main binary entry point

use downman::cli::args::{
    CliArgs, Command, IconArgs, ListArgs, LogsArgs, StatsArgs, SummaryArgs, parse_args,
};
use downman::cli::output;
use downman::services::{downloads, ops, stats};
use downman::{Error, LogConfig, LogStore};
use std::path::Path;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug downman list
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let config = match &cli_args.log_dir {
        Some(dir) => LogConfig::with_dir(dir),
        None => LogConfig::default(),
    };
    let store = LogStore::new(config);

    // One-time bootstrap: the write paths never create the log files themselves.
    if let Err(e) = store.init() {
        eprintln!("Error: failed to initialize log files: {e}");
        process::exit(4);
    }

    let exit_code = dispatch(&store, &cli_args);
    process::exit(exit_code);
}

fn dispatch(store: &LogStore, cli_args: &CliArgs) -> i32 {
    match &cli_args.command {
        Command::List(args) => handle_list(store, args),
        Command::Summary(args) => handle_summary(store, args),
        Command::Stats(args) => handle_stats(store, args),
        Command::Mkdir(args) => {
            match ops::create_directory(store, Path::new(&args.parent), &args.name) {
                Ok(path) => {
                    println!("Created '{}'", path.display());
                    0
                }
                Err(e) => report(&e),
            }
        }
        Command::Rename(args) => {
            match ops::rename_directory(store, Path::new(&args.path), &args.new_name) {
                Ok(path) => {
                    println!("Now at '{}'", path.display());
                    0
                }
                Err(e) => report(&e),
            }
        }
        Command::Move(args) => {
            match ops::move_directory(store, Path::new(&args.path), Path::new(&args.dest)) {
                Ok(()) => {
                    println!("Moved '{}' to '{}'", args.path, args.dest);
                    0
                }
                Err(e) => report(&e),
            }
        }
        Command::Remove(args) => match ops::remove_directory(store, Path::new(&args.path)) {
            Ok(()) => {
                println!("Removed '{}'", args.path);
                0
            }
            Err(e) => report(&e),
        },
        Command::Purge(args) => match ops::remove_directory_all(store, Path::new(&args.path)) {
            Ok(()) => {
                println!("Removed '{}' and all its contents", args.path);
                0
            }
            Err(e) => report(&e),
        },
        Command::Trash(args) => match ops::move_directory_to_trash(store, Path::new(&args.path)) {
            Ok(()) => {
                println!("Trashed '{}'", args.path);
                0
            }
            Err(e) => report(&e),
        },
        Command::Icon(args) => handle_icon(store, args),
        Command::Logs(args) => handle_logs(store, args),
    }
}

fn handle_list(store: &LogStore, args: &ListArgs) -> i32 {
    let dir = match downloads::downloads_directory() {
        Ok(dir) => dir,
        Err(e) => return report(&e),
    };

    match downloads::file_entries(store, &dir) {
        Ok(entries) => {
            let root = dir.display().to_string();
            if args.json {
                println!("{}", output::entries_json(&root, &entries));
            } else {
                output::print_entries(&root, &entries);
            }
            0
        }
        Err(e) => report(&e),
    }
}

fn handle_summary(store: &LogStore, args: &SummaryArgs) -> i32 {
    let dir = match downloads::downloads_directory() {
        Ok(dir) => dir,
        Err(e) => return report(&e),
    };

    match downloads::downloads_summary(store, &dir) {
        Ok(Some(summary)) => {
            if args.json {
                println!("{}", output::summary_json(&summary));
            } else {
                output::print_summary(&summary);
            }
            0
        }
        Ok(None) => {
            println!("Downloads folder is empty.");
            0
        }
        Err(e) => report(&e),
    }
}

fn handle_stats(store: &LogStore, args: &StatsArgs) -> i32 {
    match stats::directory_stats(store, Path::new(&args.path)) {
        Ok(stats) => {
            if args.json {
                println!("{}", output::stats_json(&stats));
            } else {
                output::print_stats(&stats);
            }
            0
        }
        Err(e) => report(&e),
    }
}

fn handle_icon(store: &LogStore, args: &IconArgs) -> i32 {
    let dir = Path::new(&args.path);

    let result = if args.reset {
        ops::reset_folder_icon(store, dir)
    } else {
        // the parser guarantees an icon path when --reset is absent
        let icon = args.icon.as_deref().unwrap_or_default();
        ops::set_folder_icon(store, dir, Path::new(icon))
    };

    match result {
        Ok(()) => {
            if args.reset {
                println!("Default icon restored for '{}'", args.path);
            } else {
                println!("Icon set for '{}'", args.path);
            }
            0
        }
        Err(e) => report(&e),
    }
}

fn handle_logs(store: &LogStore, args: &LogsArgs) -> i32 {
    if args.clear {
        return match store.clear() {
            Ok(()) => {
                println!("Log files cleared.");
                0
            }
            Err(e) => {
                eprintln!("Error: failed to clear log files: {e}");
                4
            }
        };
    }

    let contents = if args.debug {
        store.read_debug()
    } else {
        store.read_log()
    };

    match contents {
        Ok(text) => {
            print!("{text}");
            0
        }
        Err(e) => {
            eprintln!("Error: failed to read log file: {e}");
            4
        }
    }
}

/// Print the error and map it to the exit-code policy: 2 invalid input,
/// 3 refused, 4 I/O or system failure.
fn report(error: &Error) -> i32 {
    eprintln!("Error: {error}");
    match error {
        Error::InvalidInput(_) => 2,
        Error::NotFound(_) | Error::NotEmpty(_) | Error::AlreadyExists(_) => 3,
        Error::Io(_) | Error::System(_) => 4,
    }
}

fn print_help() {
    println!("Downloads Manager (downman) - Organize the platform Downloads folder");
    println!();
    println!("USAGE:");
    println!("    downman <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    list                       List visible Downloads entries");
    println!("    summary                    Per-suffix counts and sizes for Downloads");
    println!("    stats <PATH>               Recursive statistics for one directory");
    println!("    mkdir <PARENT> <NAME>      Create a directory (with parents)");
    println!("    rename <PATH> <NEW_NAME>   Rename a directory within its parent");
    println!("    move <PATH> <DEST>         Move a directory (never overwrites)");
    println!("    remove <PATH>              Remove an empty directory");
    println!("    purge <PATH>               Recursively delete a directory");
    println!("    trash <PATH>               Move an empty directory to the trash");
    println!("    icon <PATH> <ICO_FILE>     Assign a folder icon via desktop.ini");
    println!("    icon <PATH> --reset        Restore the default folder icon");
    println!("    logs [--debug] [--clear]   Show or clear the audit logs");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!("    --log-dir <DIR>            Log directory (default: logs_files)");
    println!();
    println!("OUTPUT OPTIONS:");
    println!("    --json                     Machine-readable output (list, summary, stats)");
    println!();
    println!("NOTES:");
    println!("    remove and trash refuse non-empty directories; purge is the");
    println!("    explicit opt-in for recursive deletion. Every operation is");
    println!("    recorded newest-first in the audit log (see 'downman logs').");
    println!();
    println!("EXAMPLES:");
    println!("    downman list --json");
    println!("    downman stats ~/Downloads/archives");
    println!("    downman mkdir ~/Downloads invoices");
    println!("    downman logs --clear");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("downman {VERSION}");
    println!("Commit: {GIT_HASH}");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
