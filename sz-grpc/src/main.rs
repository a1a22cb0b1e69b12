//! # szgrpc CLI Entry Point
//!
//! The main executable for operating a Senzing server over gRPC. This file drives the
//! application lifecycle:
//!
//! 1. **Initialization**: Parses command-line arguments using [`cli::Cli`] and installs logging.
//! 2. **Connection**: Opens the transport via `sz_grpc_core` with the merged settings.
//! 3. **Execution**: Initializes the subsystem wrapper the command needs and runs it.
//! 4. **Presentation**: Prints results as pretty JSON, errors to standard error with exit code 1.

mod cli;
mod formatter;

use anyhow::bail;
use clap::Parser;
use cli::{
    Cli, Commands, ConfigCommands, DataSourceCommands, DiagnosticCommands, EntityCommands,
    EntityRef, ExportCommands, RecordCommands,
};
use formatter::{FormattedString, JsonResult, Labeled};
use futures_util::TryStreamExt;
use std::{io::Write, process};
use sz_grpc_core::{
    ConfigHandle, InitOptions, Scoped, SzConfig, SzConfigManager, SzConnection, SzDiagnostic,
    SzEngine, SzError, SzFlags, SzLifecycle, SzProduct, json,
};
use tracing_subscriber::EnvFilter;

const INSTANCE_NAME: &str = "szgrpc";

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args).await {
        eprintln!("{}", FormattedString::from(err));
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Everything a command needs: the open connection and how to initialize wrappers.
struct Context {
    connection: SzConnection,
    options: InitOptions,
    flags: Option<SzFlags>,
}

impl Context {
    /// The flags named with `--flag`, or `default` when none were given.
    fn flags_or(&self, default: SzFlags) -> SzFlags {
        self.flags.unwrap_or(default)
    }

    fn scoped<W: SzLifecycle>(&self, wrapper: W) -> anyhow::Result<Scoped<W>> {
        Ok(Scoped::new(wrapper, self.options.clone())?)
    }
}

async fn run(args: Cli) -> anyhow::Result<()> {
    let settings = args.connection_settings()?;
    let flags = if args.flags.is_empty() {
        None
    } else {
        Some(SzFlags::from_names(&args.flags)?)
    };

    let connection = SzConnection::connect(&settings).await?;
    let ctx = Context {
        connection,
        options: InitOptions::new(INSTANCE_NAME).with_verbose_logging(args.verbose),
        flags,
    };

    match args.command {
        Commands::Version => {
            let product = ctx.scoped(ctx.connection.product())?;
            print_json(product.get_version().await?);
        }
        Commands::License => {
            let product = ctx.scoped(ctx.connection.product())?;
            print_json(product.get_license().await?);
        }
        Commands::Configs { sub } => configs(&ctx, sub).await?,
        Commands::DataSources { sub } => data_sources(&ctx, sub).await?,
        Commands::Record { sub } => record(&ctx, sub).await?,
        Commands::Entity { sub } => entity(&ctx, sub).await?,
        Commands::Export { sub } => export(&ctx, sub).await?,
        Commands::Diagnostic { sub } => diagnostic(&ctx, sub).await?,
    }

    Ok(())
}

fn print_json(raw: String) {
    println!("{}", FormattedString::from(JsonResult(raw)));
}

async fn configs(ctx: &Context, sub: ConfigCommands) -> anyhow::Result<()> {
    let manager = ctx.scoped(ctx.connection.config_manager())?;

    match sub {
        ConfigCommands::List => print_json(manager.get_configs().await?),
        ConfigCommands::Get { config_id } => print_json(manager.get_config(config_id).await?),
        ConfigCommands::Default => {
            let id = manager.get_default_config_id().await?;
            println!("{}", FormattedString::from(Labeled("Default config id:", id)));
        }
        ConfigCommands::SetDefault { config_id } => {
            manager.set_default_config_id(config_id).await?;
            println!("{}", FormattedString::from(Labeled("Default config id:", config_id)));
        }
        ConfigCommands::ReplaceDefault { current, new } => {
            manager.replace_default_config_id(current, new).await?;
            println!("{}", FormattedString::from(Labeled("Default config id:", new)));
        }
    }

    Ok(())
}

async fn data_sources(ctx: &Context, sub: DataSourceCommands) -> anyhow::Result<()> {
    let manager = ctx.scoped(ctx.connection.config_manager())?;
    let config = ctx.scoped(ctx.connection.config())?;

    let current_id = manager.get_default_config_id().await?;
    if current_id == 0 {
        bail!("the repository has no default configuration");
    }
    let definition = manager.get_config(current_id).await?;
    let handle = config.import_config(definition.into()).await?;

    match sub {
        DataSourceCommands::List => {
            let listed = config.get_data_sources(&handle).await;
            config.close_config(handle).await?;
            print_json(listed?);
        }
        DataSourceCommands::Add { code } => {
            let outcome = add_and_export(&*config, &handle, &code).await;
            config.close_config(handle).await?;
            let (added, exported) = outcome?;
            let added = json::parse_result("add_data_source", &added)?;

            let new_id = manager
                .register_config(exported.into(), &format!("Add data source {code}"))
                .await?;
            manager.replace_default_config_id(current_id, new_id).await?;
            tracing::info!(data_source = %code, config_id = new_id, "default configuration replaced");

            println!(
                "{}",
                FormattedString::from(serde_json::json!({
                    "DSRC_ID": added["DSRC_ID"],
                    "CONFIG_ID": new_id,
                }))
            );
        }
    }

    Ok(())
}

/// Adds `code` to the open configuration and exports the result.
async fn add_and_export(
    config: &impl SzConfig,
    handle: &ConfigHandle,
    code: &str,
) -> Result<(String, String), SzError> {
    let added = config
        .add_data_source(handle, json::data_source_definition(code))
        .await?;
    let exported = config.export_config(handle).await?;
    Ok((added, exported))
}

async fn record(ctx: &Context, sub: RecordCommands) -> anyhow::Result<()> {
    let engine = ctx.scoped(ctx.connection.engine())?;

    let result = match sub {
        RecordCommands::Add {
            data_source,
            record_id,
            definition,
        } => {
            engine
                .add_record(
                    &data_source,
                    &record_id,
                    definition.into(),
                    ctx.flags_or(SzFlags::ADD_RECORD_DEFAULT_FLAGS),
                )
                .await?
        }
        RecordCommands::Get {
            data_source,
            record_id,
        } => {
            engine
                .get_record(
                    &data_source,
                    &record_id,
                    ctx.flags_or(SzFlags::RECORD_DEFAULT_FLAGS),
                )
                .await?
        }
        RecordCommands::Delete {
            data_source,
            record_id,
        } => {
            engine
                .delete_record(
                    &data_source,
                    &record_id,
                    ctx.flags_or(SzFlags::DELETE_RECORD_DEFAULT_FLAGS),
                )
                .await?
        }
    };

    print_json(result);
    Ok(())
}

async fn entity(ctx: &Context, sub: EntityCommands) -> anyhow::Result<()> {
    let engine = ctx.scoped(ctx.connection.engine())?;

    let result = match sub {
        EntityCommands::Get { entity } => {
            let flags = ctx.flags_or(SzFlags::ENTITY_DEFAULT_FLAGS);
            match entity {
                EntityRef::Id(id) => engine.get_entity_by_entity_id(id, flags).await?,
                EntityRef::Record(key) => {
                    engine
                        .get_entity_by_record_id(&key.data_source_code, &key.record_id, flags)
                        .await?
                }
            }
        }
        EntityCommands::Search {
            attributes,
            profile,
        } => {
            engine
                .search_by_attributes(
                    attributes.into(),
                    &profile,
                    ctx.flags_or(SzFlags::SEARCH_BY_ATTRIBUTES_DEFAULT_FLAGS),
                )
                .await?
        }
        EntityCommands::Why { first, second } => match (first, second) {
            (EntityRef::Id(first), EntityRef::Id(second)) => {
                engine
                    .why_entities(first, second, ctx.flags_or(SzFlags::WHY_ENTITIES_DEFAULT_FLAGS))
                    .await?
            }
            (EntityRef::Record(first), EntityRef::Record(second)) => {
                engine
                    .why_records(&first, &second, ctx.flags_or(SzFlags::WHY_RECORDS_DEFAULT_FLAGS))
                    .await?
            }
            _ => bail!("'entity why' needs two entity ids or two DATA_SOURCE:RECORD_ID keys"),
        },
    };

    print_json(result);
    Ok(())
}

async fn export(ctx: &Context, sub: ExportCommands) -> anyhow::Result<()> {
    let engine = ctx.scoped(ctx.connection.engine())?;
    let flags = ctx.flags_or(SzFlags::EXPORT_DEFAULT_FLAGS);

    let report = match sub {
        ExportCommands::Json => engine.json_entity_report(flags).await?,
        ExportCommands::Csv { columns } => engine.csv_entity_report(&columns, flags).await?,
    };

    let mut chunks = std::pin::pin!(report.into_stream());
    let mut stdout = std::io::stdout().lock();
    while let Some(chunk) = chunks.try_next().await? {
        stdout.write_all(chunk.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

async fn diagnostic(ctx: &Context, sub: DiagnosticCommands) -> anyhow::Result<()> {
    let diagnostic = ctx.scoped(ctx.connection.diagnostic())?;

    let result = match sub {
        DiagnosticCommands::Info => diagnostic.get_datastore_info().await?,
        DiagnosticCommands::Performance { seconds } => {
            diagnostic.check_datastore_performance(seconds).await?
        }
        DiagnosticCommands::Feature { feature_id } => diagnostic.get_feature(feature_id).await?,
    };

    print_json(result);
    Ok(())
}
