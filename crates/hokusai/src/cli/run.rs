//! CLI command handlers.

use super::{Cli, Commands};
use hokusai::{
    compile_note_prompts, generator_from_env, mark_note_used, publish_note, render_note_images,
    run_workflow, select_next_note, BackendKind, ConfigError, FeishuClient, NoteId,
    PipelinePaths, PipelinePathsBuilder,
};
use std::str::FromStr;

fn pipeline_paths(cli: &Cli) -> Result<PipelinePaths, Box<dyn std::error::Error>> {
    Ok(PipelinePathsBuilder::default()
        .notes_dir(cli.notes_dir.clone())
        .ledger_path(cli.ledger.clone())
        .output_dir(cli.output.clone())
        .build()?)
}

fn parse_backend(raw: &str) -> Result<BackendKind, ConfigError> {
    BackendKind::from_str(raw)
        .map_err(|_| ConfigError::new(format!("Unknown image backend '{}'", raw)))
}

/// Execute the requested command.
pub async fn handle_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let paths = pipeline_paths(&cli)?;

    match &cli.command {
        Commands::Select => match select_next_note(&paths)? {
            Some(id) => println!("{}", id),
            None => {
                eprintln!("ERROR: no unused notes remaining");
                std::process::exit(1);
            }
        },

        Commands::Prompts { note_id } => {
            let id: NoteId = note_id.parse()?;
            let (records, manifest_path) = compile_note_prompts(&paths, &id)?;
            println!(
                "Generated {} prompts -> {}",
                records.len(),
                manifest_path.display()
            );
        }

        Commands::Images { note_id, backend } => {
            let id: NoteId = note_id.parse()?;
            let generator = generator_from_env(parse_backend(backend)?)?;
            let written = render_note_images(&paths, &id, generator.as_ref()).await?;
            println!("Generated {} images for note {}", written.len(), id);
        }

        Commands::Publish { note_id } => {
            let id: NoteId = note_id.parse()?;
            let publisher = FeishuClient::from_env()?;
            let receipt = publish_note(&paths, &id, &publisher).await?;
            let action = if *receipt.created() { "Created" } else { "Updated" };
            println!(
                "{} record for note {} with {} attachments",
                action,
                id,
                receipt.attachment_count()
            );
        }

        Commands::Mark { note_id } => {
            let id: NoteId = note_id.parse()?;
            let ledger = mark_note_used(&paths, &id)?;
            println!(
                "Marked note {} as used ({}/{})",
                id,
                ledger.used_count(),
                ledger.total_available()
            );
        }

        Commands::Run {
            backend,
            skip_publish,
        } => {
            let generator = generator_from_env(parse_backend(backend)?)?;
            let publisher = if *skip_publish {
                None
            } else {
                Some(FeishuClient::from_env()?)
            };
            let publisher_ref = publisher
                .as_ref()
                .map(|p| p as &dyn hokusai::RecordPublisher);

            match run_workflow(&paths, generator.as_ref(), publisher_ref).await? {
                Some(id) => println!("Completed note {}", id),
                None => println!("Nothing to do: every note is already used"),
            }
        }
    }

    Ok(())
}
