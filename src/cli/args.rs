//! CLI argument parsing

#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Override for the log directory (`--log-dir`), accepted anywhere on the
    /// command line
    pub log_dir: Option<String>,
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    List(ListArgs),
    Summary(SummaryArgs),
    Stats(StatsArgs),
    Mkdir(MkdirArgs),
    Rename(RenameArgs),
    Move(MoveArgs),
    Remove(RemoveArgs),
    Purge(PurgeArgs),
    Trash(TrashArgs),
    Icon(IconArgs),
    Logs(LogsArgs),
}

#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub json: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SummaryArgs {
    pub json: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StatsArgs {
    pub path: String,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct MkdirArgs {
    pub parent: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct RenameArgs {
    pub path: String,
    pub new_name: String,
}

#[derive(Debug, Clone)]
pub struct MoveArgs {
    pub path: String,
    pub dest: String,
}

#[derive(Debug, Clone)]
pub struct RemoveArgs {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct PurgeArgs {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct TrashArgs {
    pub path: String,
}

#[derive(Debug, Clone, Default)]
pub struct IconArgs {
    pub path: String,
    pub icon: Option<String>,
    pub reset: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LogsArgs {
    pub debug: bool,
    pub clear: bool,
}

/// Parse command line arguments (`args[0]` is the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    let (log_dir, rest) = extract_log_dir(&args[1..])?;
    if rest.is_empty() {
        return Err("No command specified".to_string());
    }

    let command = match rest[0].as_str() {
        "list" => Command::List(parse_list_args(&rest[1..])?),
        "summary" => Command::Summary(parse_summary_args(&rest[1..])?),
        "stats" => Command::Stats(parse_stats_args(&rest[1..])?),
        "mkdir" => Command::Mkdir(parse_mkdir_args(&rest[1..])?),
        "rename" => Command::Rename(parse_rename_args(&rest[1..])?),
        "move" => Command::Move(parse_move_args(&rest[1..])?),
        "remove" => Command::Remove(RemoveArgs {
            path: single_path(&rest[1..], "remove")?,
        }),
        "purge" => Command::Purge(PurgeArgs {
            path: single_path(&rest[1..], "purge")?,
        }),
        "trash" => Command::Trash(TrashArgs {
            path: single_path(&rest[1..], "trash")?,
        }),
        "icon" => Command::Icon(parse_icon_args(&rest[1..])?),
        "logs" => Command::Logs(parse_logs_args(&rest[1..])?),
        other => return Err(format!("Unknown command: {other}")),
    };

    Ok(CliArgs { log_dir, command })
}

/// Pull `--log-dir <DIR>` out of the argument list, leaving the rest intact.
fn extract_log_dir(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut log_dir = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut i = 0;

    while i < args.len() {
        if args[i] == "--log-dir" {
            i += 1;
            if i >= args.len() {
                return Err("--log-dir requires a directory".to_string());
            }
            log_dir = Some(args[i].clone());
        } else {
            rest.push(args[i].clone());
        }
        i += 1;
    }

    Ok((log_dir, rest))
}

fn parse_list_args(args: &[String]) -> Result<ListArgs, String> {
    let mut list_args = ListArgs::default();
    for arg in args {
        match arg.as_str() {
            "--json" => list_args.json = true,
            other => return Err(format!("Unknown option: {other}")),
        }
    }
    Ok(list_args)
}

fn parse_summary_args(args: &[String]) -> Result<SummaryArgs, String> {
    let mut summary_args = SummaryArgs::default();
    for arg in args {
        match arg.as_str() {
            "--json" => summary_args.json = true,
            other => return Err(format!("Unknown option: {other}")),
        }
    }
    Ok(summary_args)
}

fn parse_stats_args(args: &[String]) -> Result<StatsArgs, String> {
    let mut stats_args = StatsArgs::default();

    for arg in args {
        match arg.as_str() {
            "--json" => stats_args.json = true,
            a if !a.starts_with("--") => {
                if stats_args.path.is_empty() {
                    stats_args.path = a.to_string();
                } else {
                    return Err(format!("Unexpected argument: {a}"));
                }
            }
            other => return Err(format!("Unknown option: {other}")),
        }
    }

    if stats_args.path.is_empty() {
        return Err("Missing required argument: PATH".to_string());
    }

    Ok(stats_args)
}

fn parse_mkdir_args(args: &[String]) -> Result<MkdirArgs, String> {
    let (parent, name) = two_positionals(args, "mkdir", "PARENT", "NAME")?;
    Ok(MkdirArgs { parent, name })
}

fn parse_rename_args(args: &[String]) -> Result<RenameArgs, String> {
    let (path, new_name) = two_positionals(args, "rename", "PATH", "NEW_NAME")?;
    Ok(RenameArgs { path, new_name })
}

fn parse_move_args(args: &[String]) -> Result<MoveArgs, String> {
    let (path, dest) = two_positionals(args, "move", "PATH", "DEST")?;
    Ok(MoveArgs { path, dest })
}

fn parse_icon_args(args: &[String]) -> Result<IconArgs, String> {
    let mut icon_args = IconArgs::default();

    for arg in args {
        match arg.as_str() {
            "--reset" => icon_args.reset = true,
            a if !a.starts_with("--") => {
                if icon_args.path.is_empty() {
                    icon_args.path = a.to_string();
                } else if icon_args.icon.is_none() {
                    icon_args.icon = Some(a.to_string());
                } else {
                    return Err(format!("Unexpected argument: {a}"));
                }
            }
            other => return Err(format!("Unknown option: {other}")),
        }
    }

    if icon_args.path.is_empty() {
        return Err("Missing required argument: PATH".to_string());
    }
    if icon_args.reset && icon_args.icon.is_some() {
        return Err("--reset does not take an icon file".to_string());
    }
    if !icon_args.reset && icon_args.icon.is_none() {
        return Err("icon requires an ICO_FILE or --reset".to_string());
    }

    Ok(icon_args)
}

fn parse_logs_args(args: &[String]) -> Result<LogsArgs, String> {
    let mut logs_args = LogsArgs::default();
    for arg in args {
        match arg.as_str() {
            "--debug" => logs_args.debug = true,
            "--clear" => logs_args.clear = true,
            other => return Err(format!("Unknown option: {other}")),
        }
    }
    if logs_args.debug && logs_args.clear {
        return Err("--clear clears both logs; it does not combine with --debug".to_string());
    }
    Ok(logs_args)
}

fn single_path(args: &[String], command: &str) -> Result<String, String> {
    match args {
        [path] if !path.starts_with("--") => Ok(path.clone()),
        [] => Err(format!("{command} requires a PATH argument")),
        _ => Err(format!("{command} takes exactly one PATH argument")),
    }
}

fn two_positionals(
    args: &[String],
    command: &str,
    first: &str,
    second: &str,
) -> Result<(String, String), String> {
    match args {
        [a, b] if !a.starts_with("--") && !b.starts_with("--") => Ok((a.clone(), b.clone())),
        _ => Err(format!("{command} requires {first} and {second} arguments")),
    }
}
