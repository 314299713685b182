use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use colored::Colorize;

use coffer_docstore::{StoreConfig, DEFAULT_DATABASE};

use crate::cli::{Cli, Command, SetupArgs, ShowConfigArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Setup(args) => cmd_setup(args),
        Command::ShowConfig(args) => cmd_show_config(args),
    }
}

fn cmd_setup(args: SetupArgs) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let host = prompt(&mut lines, "Host address")?;
    let port = prompt(&mut lines, "Host port")?;
    let username = prompt(&mut lines, "Login username (empty for unauthenticated)")?;
    let password = if username.is_empty() {
        String::new()
    } else {
        print!("Login password: ");
        io::stdout().flush()?;
        rpassword::read_password()?
    };
    let database = prompt(
        &mut lines,
        &format!("Database name (empty for {DEFAULT_DATABASE})"),
    )?;

    let config = build_config(&host, &port, &username, &password, &database)?;
    let rendered = toml::to_string_pretty(&config)?;
    fs::write(&args.output, rendered)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "{} Wrote {}",
        "✓".green().bold(),
        args.output.display().to_string().bold()
    );
    Ok(())
}

fn cmd_show_config(args: ShowConfigArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("reading {}", args.config.display()))?;
    let config: StoreConfig = toml::from_str(&raw)?;

    println!("Host:     {}", config.host.bold());
    println!("Port:     {}", config.port.to_string().bold());
    match &config.username {
        Some(user) => {
            println!("Username: {}", user.bold());
            println!("Password: {}", "<redacted>".dimmed());
        }
        None => println!("Auth:     {}", "unauthenticated".yellow()),
    }
    println!("Database: {}", config.database.bold());
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> anyhow::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let line = lines.next().unwrap_or_else(|| Ok(String::new()))?;
    Ok(line.trim().to_string())
}

/// Build a [`StoreConfig`] from raw prompt answers.
///
/// An empty username drops both credentials (a password alone is
/// useless); an empty database name selects the default.
fn build_config(
    host: &str,
    port: &str,
    username: &str,
    password: &str,
    database: &str,
) -> anyhow::Result<StoreConfig> {
    let port: u16 = port
        .parse()
        .with_context(|| format!("invalid port `{port}`"))?;
    let (username, password) = if username.is_empty() {
        (None, None)
    } else {
        (Some(username.to_string()), Some(password.to_string()))
    };
    let database = if database.is_empty() {
        DEFAULT_DATABASE.to_string()
    } else {
        database.to_string()
    };
    Ok(StoreConfig {
        host: host.to_string(),
        port,
        username,
        password,
        database,
    })
}
