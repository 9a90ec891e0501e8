mod config;
mod logging;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use config::AppConfig;
use love_letter_adapters::{
    present_gallery, present_receipt, present_record, DownloadFolderSink, ImageCrateTransformer,
    SqlitePhotoStore, SystemClock, ThreadedUploadPipeline,
};
use love_letter_application::{
    ApplicationService, BootstrapStoreCommand, DeletePhotoCommand, OpenGalleryCommand,
    RestoreSlotCommand, UploadPhotoCommand,
};
use love_letter_domain::{SlotId, TransformOptions};

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::default();

    let service = build_application_service(&config);
    if let Err(error) = service.bootstrap_store(BootstrapStoreCommand) {
        eprintln!("failed to bootstrap love-letter: {error}");
        return ExitCode::from(1);
    }

    let command = parse_command(&args);
    match run_command(command, service, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig) -> ApplicationService {
    ApplicationService::new(
        Box::new(SqlitePhotoStore::new(config.store_path.clone())),
        Box::new(ImageCrateTransformer),
        Box::new(ThreadedUploadPipeline::new()),
        Box::new(DownloadFolderSink::new(config.downloads_dir.clone())),
        Box::new(SystemClock),
        config::default_galleries(),
    )
}

#[derive(Debug, Clone)]
enum Command {
    Ui,
    Upload { slot: String, file: String },
    Show { slot: String },
    Delete { slot: String },
    Gallery { title: String },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui);
    }

    match args[1].as_str() {
        "ui" => Ok(Command::Ui),
        "upload" => {
            if args.len() < 4 {
                return Err(CommandError::Usage(
                    "missing slot id or file path".to_string(),
                ));
            }
            Ok(Command::Upload {
                slot: args[2].clone(),
                file: args[3].clone(),
            })
        }
        "show" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing slot id".to_string()));
            }
            Ok(Command::Show {
                slot: args[2].clone(),
            })
        }
        "delete" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing slot id".to_string()));
            }
            Ok(Command::Delete {
                slot: args[2].clone(),
            })
        }
        "gallery" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing gallery title".to_string()));
            }
            Ok(Command::Gallery {
                title: args[2..].join(" "),
            })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    service: ApplicationService,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Ui => ui::launch_window(service, config.clone()).map_err(CommandError::Runtime),
        Command::Upload { slot, file } => {
            let slot_id = parse_slot(&slot)?;
            let file_name = Path::new(&file)
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| CommandError::Usage(format!("invalid file path: {file}")))?
                .to_string();
            let source_bytes = std::fs::read(&file)
                .map_err(|error| CommandError::Runtime(format!("cannot read {file}: {error}")))?;

            let receipt = service
                .upload_photo(UploadPhotoCommand {
                    slot_id: slot_id.clone(),
                    file_name,
                    source_bytes,
                    options: TransformOptions::default(),
                })
                .map_err(|error| CommandError::Runtime(format!("upload failed: {error}")))?;
            println!("{}", present_receipt(&slot_id, &receipt));
            Ok(())
        }
        Command::Show { slot } => {
            let slot_id = parse_slot(&slot)?;
            let record = service
                .restore_slot(RestoreSlotCommand {
                    slot_id: slot_id.clone(),
                })
                .map_err(|error| CommandError::Runtime(format!("show failed: {error}")))?;
            match record {
                Some(record) => println!("{}", present_record(&slot_id, &record)),
                None => println!("slot {slot_id} is empty"),
            }
            Ok(())
        }
        Command::Delete { slot } => {
            let slot_id = parse_slot(&slot)?;
            service
                .delete_photo(DeletePhotoCommand {
                    slot_id: slot_id.clone(),
                })
                .map_err(|error| CommandError::Runtime(format!("delete failed: {error}")))?;
            println!("removed slot {slot_id}");
            Ok(())
        }
        Command::Gallery { title } => {
            let view = service
                .open_gallery(OpenGalleryCommand {
                    title,
                    subtitle: String::new(),
                })
                .map_err(|error| CommandError::Runtime(format!("gallery failed: {error}")))?;
            println!("{}", present_gallery(&view));
            Ok(())
        }
    }
}

fn parse_slot(value: &str) -> Result<SlotId, CommandError> {
    SlotId::new(value).map_err(|error| CommandError::Usage(format!("invalid slot id: {error}")))
}

fn print_usage() {
    println!("usage:");
    println!("  love-letter ui");
    println!("  love-letter upload <slot> <file>");
    println!("  love-letter show <slot>");
    println!("  love-letter delete <slot>");
    println!("  love-letter gallery <title>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_defaults_to_ui() {
        let args = vec!["love-letter".to_string()];
        let command = parse_command(&args).expect("default should parse");
        assert!(matches!(command, Command::Ui));
    }

    #[test]
    fn parse_upload_command() {
        let args = vec![
            "love-letter".to_string(),
            "upload".to_string(),
            "photo-1".to_string(),
            "beach.png".to_string(),
        ];
        let command = parse_command(&args).expect("upload should parse");
        assert!(matches!(command, Command::Upload { .. }));
    }

    #[test]
    fn parse_upload_requires_both_arguments() {
        let args = vec![
            "love-letter".to_string(),
            "upload".to_string(),
            "photo-1".to_string(),
        ];
        assert!(matches!(parse_command(&args), Err(CommandError::Usage(_))));
    }

    #[test]
    fn parse_gallery_joins_title_words() {
        let args = vec![
            "love-letter".to_string(),
            "gallery".to_string(),
            "Our".to_string(),
            "Adventures".to_string(),
        ];
        let command = parse_command(&args).expect("gallery should parse");
        match command {
            Command::Gallery { title } => assert_eq!(title, "Our Adventures"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_command_is_a_usage_error() {
        let args = vec!["love-letter".to_string(), "frobnicate".to_string()];
        assert!(matches!(parse_command(&args), Err(CommandError::Usage(_))));
    }
}
