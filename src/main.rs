use clap::Parser;
use lessentabellen::app::export::export_table;
use lessentabellen::app::render::{menu_document, render_detail, render_menu};
use lessentabellen::core::deeplink::parse_fragment;
use lessentabellen::core::normalize::slugify;
use lessentabellen::core::{ConfigProvider, Storage};
use lessentabellen::utils::error::ErrorSeverity;
use lessentabellen::utils::{logger, validation::Validate};
use lessentabellen::{
    CliConfig, Command, DatasetCache, DatasetLoader, Grade, HttpSource, LessenError,
    LocalStorage, MemoryStorage, Result, Session, SystemClock, TomlConfig,
};

type CliSession<S> = Session<S, HttpSource, SystemClock>;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting lessentabellen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => run(&config, &cli).await,
                Err(e) => Err(e),
            }
        }
        None => run(&cli, &cli).await,
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C, cli: &CliConfig) -> Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }

    let source = HttpSource::new(config.dataset_url());
    if config.cache_enabled() {
        tracing::debug!("Cache directory: {}", config.cache_dir());
        execute(session(LocalStorage::new(config.cache_dir()), source, config), cli).await
    } else {
        execute(session(MemoryStorage::new(), source, config), cli).await
    }
}

fn session<S: Storage, C: ConfigProvider>(storage: S, source: HttpSource, config: &C) -> CliSession<S> {
    let cache = DatasetCache::new(storage, SystemClock, config.cache_expiry());
    Session::new(DatasetLoader::new(source, cache), config.palette())
}

async fn execute<S: Storage>(mut session: CliSession<S>, cli: &CliConfig) -> Result<()> {
    if let Err(e) = session.start().await {
        if !(cli.retry && e.is_retryable()) {
            return Err(e);
        }
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("🔄 Opnieuw proberen...");
        session.retry().await?;
    }

    match &cli.command {
        Command::Menu { json } => {
            let catalog = session.catalog().ok_or(LessenError::NotLoadedError)?;
            if *json {
                let doc = menu_document(catalog, session.palette());
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                print!("{}", render_menu(catalog));
            }
        }
        Command::Show {
            fragment,
            grade,
            program,
            json,
        } => {
            let (grade, slug) = selected_program(fragment.as_deref(), grade.as_deref(), program.as_deref())?;
            let view = session.open_program(grade, &slug)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render_detail(&view));
            }
        }
        Command::Export {
            fragment,
            format,
            output,
        } => {
            let (grade, slug) = parse_fragment(fragment).ok_or_else(|| no_match(fragment))?;
            let view = session.open_program(grade, &slug)?;
            let table = view.table.table().ok_or_else(|| no_match(fragment))?;
            let content = export_table(table, *format)?;
            tokio::fs::write(output, content).await?;
            tracing::info!("📁 Output saved to: {}", output);
            println!("📁 Output saved to: {}", output);
        }
    }

    Ok(())
}

fn selected_program(fragment: Option<&str>, grade: Option<&str>, program: Option<&str>) -> Result<(Grade, String)> {
    if let Some(fragment) = fragment {
        return parse_fragment(fragment).ok_or_else(|| no_match(fragment));
    }

    match (grade, program) {
        (Some(grade), Some(program)) => {
            let grade = Grade::from_slug(grade).ok_or_else(|| LessenError::InvalidConfigValueError {
                field: "grade".to_string(),
                value: grade.to_string(),
                reason: "Expected tweede-graad or derde-graad".to_string(),
            })?;
            Ok((grade, slugify(program)))
        }
        _ => Err(LessenError::MissingConfigError {
            field: "fragment (or --grade with --program)".to_string(),
        }),
    }
}

fn no_match(fragment: &str) -> LessenError {
    match parse_fragment(fragment) {
        Some((grade, slug)) => LessenError::NoMatchError {
            grade: grade.label().to_string(),
            slug,
        },
        None => LessenError::NoMatchError {
            grade: String::new(),
            slug: fragment.to_string(),
        },
    }
}
