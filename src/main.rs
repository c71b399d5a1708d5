use clap::Parser;
use todofile::application::{check_file, init, ConfigService, InitOptions, TodoService};
use todofile::cli::{format_check_summary, format_record, format_record_list, Cli, Commands};
use todofile::domain::{ListQuery, NewRecord, RecordPatch};
use todofile::error::{Result, TodoError};
use todofile::infrastructure::logging::init_logging;
use todofile::infrastructure::{JsonFileStore, ListRoot, RecordStore};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_service() -> Result<TodoService<JsonFileStore>> {
    let root = ListRoot::discover()?;
    Ok(TodoService::new(root.open_store()?))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init {
            path,
            data_dir,
            filename,
        } => {
            let config = init(&path, InitOptions { data_dir, filename })?;
            println!("Initialized todofile list at {}", path.display());
            println!("Data file: {}", config.data_dir.join(&config.filename).display());
            Ok(())
        }
        Commands::Add {
            text,
            category,
            done,
        } => {
            let mut new = NewRecord::new(text).completed(done);
            new.category = category;
            let record = open_service()?.create(new)?;
            println!("Added {}", format_record(&record).trim_start());
            Ok(())
        }
        Commands::List {
            skip,
            limit,
            category,
            done,
            pending,
        } => {
            let completed = match (done, pending) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let query = ListQuery {
                skip,
                limit,
                category,
                completed,
            };
            let records = open_service()?.list(&query)?;
            println!("{}", format_record_list(&records).trim_end());
            Ok(())
        }
        Commands::Show { id } => {
            let record = open_service()?.get(id)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Commands::Edit {
            id,
            text,
            category,
            clear_category,
        } => {
            let category = if clear_category {
                Some(None)
            } else {
                category.map(Some)
            };
            let patch = RecordPatch {
                text,
                completed: None,
                category,
            };
            let record = open_service()?.update(id, patch)?;
            println!("Updated {}", format_record(&record).trim_start());
            Ok(())
        }
        Commands::Done { id } => {
            let record = open_service()?.set_completed(id, true)?;
            println!("{}", format_record(&record).trim_start());
            Ok(())
        }
        Commands::Undo { id } => {
            let record = open_service()?.set_completed(id, false)?;
            println!("{}", format_record(&record).trim_start());
            Ok(())
        }
        Commands::Toggle { id } => {
            let record = open_service()?.toggle(id)?;
            println!("{}", format_record(&record).trim_start());
            Ok(())
        }
        Commands::Rm { id } => {
            let record = open_service()?.delete(id)?;
            println!("Removed {}", format_record(&record).trim_start());
            Ok(())
        }
        Commands::Clear => {
            let removed = open_service()?.clear_completed()?;
            println!("Removed {} completed record(s)", removed);
            Ok(())
        }
        Commands::Check { file } => {
            let path = match file {
                Some(path) => path,
                None => open_service()?.store().path().to_path_buf(),
            };
            let summary = check_file(&path)?;
            println!("{}", format_check_summary(&summary));
            if summary.is_valid() {
                Ok(())
            } else {
                Err(TodoError::CheckFailed {
                    invalid: summary.invalid.len(),
                    total: summary.total,
                })
            }
        }
        Commands::Config { key, value, list } => {
            let root = ListRoot::discover()?;
            let service = ConfigService::new(root);

            if list {
                let config = service.list()?;
                println!("data_dir = {}", config.data_dir.display());
                println!("filename = {}", config.filename);
                println!("load_policy = {}", config.load_policy);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: todofile config [--list | <key> [<value>]]");
                println!("Valid keys: data_dir, filename, load_policy");
                Ok(())
            }
        }
    }
}
