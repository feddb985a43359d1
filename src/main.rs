#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_client::{
    cli::{parse_command, CliInput, View, HELP},
    config::{DEFAULT_SERVER_ADDR, DEFAULT_TICK},
    init_logging, Client, ClientConfig, FirstTurnEncoding,
};

#[cfg(feature = "std")]
use std::sync::atomic::Ordering;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::sync::mpsc;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Terminal client for the battleship match server", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value = DEFAULT_SERVER_ADDR)]
    connect: String,
    #[arg(long, default_value_t = DEFAULT_TICK.as_millis() as u64, help = "UI tick in milliseconds")]
    tick_ms: u64,
    #[arg(long, help = "Log level (error, warn, info, debug, trace); overrides BATTLESHIP_LOG")]
    log_level: Option<LevelFilter>,
    #[arg(long, value_enum, default_value_t = FirstTurnEncoding::UserId)]
    queue_turn_encoding: FirstTurnEncoding,
    #[arg(long, value_enum, default_value_t = FirstTurnEncoding::UserId)]
    lobby_turn_encoding: FirstTurnEncoding,
    #[arg(long, help = "Fix RNG seed for reproducible auto placement (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = ClientConfig {
        server_addr: cli.connect,
        tick: Duration::from_millis(cli.tick_ms.max(1)),
        queue_turn_encoding: cli.queue_turn_encoding,
        lobby_turn_encoding: cli.lobby_turn_encoding,
        seed: cli.seed,
        ..ClientConfig::default()
    };
    let tick = config.tick;

    println!("Connecting to {}...", config.server_addr);
    let mut client = Client::connect(config).await?;
    let running = client.running_flag();
    println!("Connected. Type 'help' for commands.");

    let (line_tx, mut lines) = mpsc::unbounded_channel::<String>();
    tokio::spawn(async move {
        let mut stdin = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = stdin.next_line().await {
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut ticker = tokio::time::interval(tick);
    let mut last_view = None;
    while running.load(Ordering::SeqCst) {
        ticker.tick().await;
        client.pump();

        while let Ok(line) = lines.try_recv() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(CliInput::Command(command)) => {
                    client.command(command);
                }
                Ok(CliInput::Help) => println!("{}", HELP),
                Ok(CliInput::Quit) => running.store(false, Ordering::SeqCst),
                Err(e) => println!("{}", e),
            }
        }

        for notice in client.take_notifications() {
            println!("* {}", notice);
        }
        let snapshot = client.snapshot();
        if last_view.as_ref() != Some(&snapshot) {
            print!("{}", View(&snapshot));
            last_view = Some(snapshot);
        }
    }

    client.shutdown();
    println!("Goodbye.");
    Ok(())
}
