//! lifequest-client CLI entry point.

use std::io::Read;
use std::path::Path;

use clap::Parser;
use lifequest_client::cli::volumes::VolumesAction;
use lifequest_client::cli::workouts::WorkoutsAction;
use lifequest_client::cli::{Cli, Commands, OutputFormat};
use lifequest_client::output::{format_output, pretty};
use lifequest_client::LifequestClient;
use lifequest_core::volume::{export_volumes, parse_greentext, CreateVolumeRequest, Volume};
use lifequest_core::workout::{BulkImportRequest, CreateWorkoutRequest};

/// Reads a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut client = LifequestClient::new(&cli.base_url);
    if let Some(token) = &cli.token {
        client = client.with_token(token);
    }

    match cli.command {
        Commands::Login(login) => {
            let response = client.login(&login.email, &login.password).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        eprintln!("Export it with: export LIFEQUEST_TOKEN=<token>");
                    }
                    println!("{}", response.token);
                }
            }
        }
        Commands::Health(_) => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => {
                    let version = health.version.as_deref().unwrap_or("unknown");
                    println!("{} ({}, v{})", health.status, health.backend, version);
                }
            }
        }
        Commands::Volumes(volumes_cmd) => match volumes_cmd.action {
            VolumesAction::Parse { file } => {
                let parsed = parse_greentext(&read_input(&file)?);
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&parsed, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_parsed(&parsed)),
                }
            }
            VolumesAction::Export { input } => {
                let text = match input {
                    Some(path) => {
                        let volumes: Vec<Volume> = serde_json::from_str(&read_input(&path)?)?;
                        export_volumes(&volumes)
                    }
                    None => client.export_volumes().await?,
                };
                print!("{}", text);
            }
            VolumesAction::List => {
                let volumes = client.list_volumes().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&volumes, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_volumes(&volumes)),
                }
            }
            VolumesAction::Create { file, status } => {
                let request = CreateVolumeRequest::new(read_input(&file)?).with_status(status);
                let volume = client.create_volume(&request).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&volume, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Created:\n{}", pretty::format_volume(&volume))
                    }
                }
            }
            VolumesAction::Search { query } => {
                let results = client.search_volumes(&query).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&results, cli.format)),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_search_results(&results))
                    }
                }
            }
            VolumesAction::Catalogue => {
                let entries = client.catalogue().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&entries, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_catalogue(&entries)),
                }
            }
        },
        Commands::Workouts(workouts_cmd) => {
            let workouts = match workouts_cmd.action {
                WorkoutsAction::List => client.list_workouts().await?,
                WorkoutsAction::Import { file } => {
                    let logs: Vec<CreateWorkoutRequest> =
                        serde_json::from_str(&read_input(&file)?)?;
                    let imported = client.import_workouts(&BulkImportRequest { logs }).await?;
                    if !cli.quiet {
                        eprintln!("Imported {} workout logs", imported.len());
                    }
                    imported
                }
            };
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&workouts, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_workouts(&workouts)),
            }
        }
    }

    Ok(())
}
