use std::path::PathBuf;

use anyhow::Result;
use chrono::FixedOffset;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod api;
mod cache;
mod config;
mod fetch;
mod helpers;
mod loader;
mod transform;

use api::ApiClient;
use cache::MemoryCache;
use config::{local_utc_offset, parse_utc_offset, ApiConfig};
use helpers::read_input;
use transform::{DtoKind, EntityKind, FormKind};

#[derive(Parser)]
struct Transformer {
    /// Local zone for form dates and times, as `+HH:MM`. Defaults to the
    /// machine's current offset.
    #[clap(
        long,
        env = "LMS_UTC_OFFSET",
        value_parser = parse_utc_offset,
        value_name = "OFFSET",
        global = true,
        allow_hyphen_values = true
    )]
    utc_offset: Option<FixedOffset>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Raw API record to domain entity.
    Entity {
        #[clap(short, long, value_enum)]
        kind: EntityKind,

        #[clap(short, long, value_parser, value_name = "PATH")]
        input: Option<PathBuf>,
    },
    /// Raw API record to editor form.
    Form {
        #[clap(short, long, value_enum)]
        kind: FormKind,

        #[clap(short, long, value_parser, value_name = "PATH")]
        input: Option<PathBuf>,
    },
    /// Editor form to create/update payload.
    Dto {
        #[clap(short, long, value_enum)]
        kind: DtoKind,

        #[clap(short, long, value_parser, value_name = "PATH")]
        input: Option<PathBuf>,
    },
    /// Load a record from the API.
    Fetch {
        #[clap(flatten)]
        api: ApiConfig,

        #[clap(subcommand)]
        query: fetch::Query,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    #[cfg(feature = "env-file")]
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lms_transform=info,lms_transform_bin=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let transformer = Transformer::parse();
    let tz = transformer.utc_offset.unwrap_or_else(local_utc_offset);

    match transformer.command {
        Command::Entity { kind, input } => transform::entity(kind, &read_input(input)?),
        Command::Form { kind, input } => transform::form(kind, &read_input(input)?, &tz),
        Command::Dto { kind, input } => transform::dto(kind, &read_input(input)?, &tz),
        Command::Fetch { api, query } => {
            let api = ApiClient::from_config(api);
            let cache = MemoryCache::new();

            fetch::fetch(&api, &cache, query, &tz).await
        }
    }
}
