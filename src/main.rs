use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use content_publisher_lib::{
    application::services::SubmitMode,
    domain::constants::SUGGESTED_TAGS,
    init_logging,
    presentation::{
        cover::encode_cover_file,
        dto::{
            content_dto::{FeedRequest, ViewContentRequest},
            draft_dto::SubmitDraftRequest,
            ActionOutcome, ApiResponse,
        },
        render,
    },
    AppConfig, AppError, AppState,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "content-publisher")]
#[command(about = "Draft, approve and publish regional content", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Content API base URL
    #[arg(long, env = "CONTENT_PUBLISHER_API_BASE")]
    api_base: Option<String>,

    /// Directory holding the local draft store
    #[arg(long, env = "CONTENT_PUBLISHER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", env = "LOG_LEVEL")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the workspaces and local draft counts
    Dashboard,
    /// List published content for a region and language
    Feed {
        #[arg(long, default_value = "US")]
        region: String,
        #[arg(long, default_value = "en")]
        lang: String,
        /// Case-insensitive title filter
        #[arg(long)]
        query: Option<String>,
    },
    /// Show one content item in any status
    View {
        id: String,
        #[arg(long, default_value = "en")]
        lang: String,
    },
    /// Draft studio
    Drafts {
        #[command(subcommand)]
        command: DraftsCommand,
    },
    /// Approval queue
    Approvals {
        #[command(subcommand)]
        command: ApprovalsCommand,
    },
}

#[derive(Subcommand)]
enum DraftsCommand {
    /// List drafts from the local store
    List {
        /// Fetch each draft's current server status
        #[arg(long)]
        reconcile: bool,
    },
    /// Save as draft
    Save(DraftArgs),
    /// Save and submit for approval
    Submit(DraftArgs),
    /// Remove a draft from the local store (the server record stays)
    Delete { id: String },
}

#[derive(Subcommand)]
enum ApprovalsCommand {
    /// List drafts awaiting approval
    List,
    /// Approve and publish a content id
    Approve { id: String },
}

#[derive(Args)]
struct DraftArgs {
    /// Update the variant of an existing draft instead of creating content
    #[arg(long = "edit", value_name = "ID")]
    edit: Option<String>,
    #[arg(long)]
    title: Option<String>,
    /// HTML body
    #[arg(long)]
    body: Option<String>,
    #[arg(long)]
    content_type: Option<String>,
    #[arg(long)]
    region: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    priority: Option<String>,
    /// Comma-separated tags, replacing the current ones
    #[arg(long)]
    tags: Option<String>,
    /// Append a suggested tag (repeatable); free-form tags go in --tags
    #[arg(
        long = "add-tag",
        value_name = "TAG",
        value_parser = clap::builder::PossibleValuesParser::new(SUGGESTED_TAGS)
    )]
    add_tag: Vec<String>,
    #[arg(long)]
    language: Option<String>,
    /// Mark as internal (`--internal false` clears it)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    internal: Option<bool>,
    /// External cover image URL (kept locally only)
    #[arg(long, conflicts_with = "cover_file")]
    cover_image: Option<String>,
    /// Local image file, stored as a data URL
    #[arg(long)]
    cover_file: Option<PathBuf>,
    /// Scheduled publish time (RFC 3339)
    #[arg(long = "publish-at", value_name = "RFC3339")]
    publish_at: Option<String>,
}

impl DraftArgs {
    fn into_request(self) -> Result<SubmitDraftRequest, AppError> {
        let cover_image = match self.cover_file {
            Some(path) => Some(encode_cover_file(&path)?),
            None => self.cover_image,
        };
        Ok(SubmitDraftRequest {
            edit_id: self.edit,
            title: self.title,
            body: self.body,
            content_type: self.content_type,
            region: self.region,
            category: self.category,
            priority: self.priority,
            tags: self.tags,
            add_tags: self.add_tag,
            language: self.language,
            internal: self.internal,
            cover_image,
            scheduled_publish_at: self.publish_at,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.json_logs)?;

    let mut config = AppConfig::from_env();
    if let Some(api_base) = cli.api_base {
        config.api.base_url = api_base.trim().trim_end_matches('/').to_string();
    }
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    debug!("Configuration: {:?}", config);

    let state = AppState::new(config)?;
    if !run(&state, cli.command, cli.json).await? {
        std::process::exit(1);
    }
    Ok(())
}

async fn run(state: &AppState, command: Commands, json: bool) -> Result<bool> {
    match command {
        Commands::Dashboard => {
            let overview = state.dashboard_handler().overview().await;
            emit(Ok(overview), json, render::render_dashboard)
        }
        Commands::Feed {
            region,
            lang,
            query,
        } => {
            let result = state
                .feed_handler()
                .published(FeedRequest {
                    region,
                    lang,
                    query,
                })
                .await;
            emit(result, json, render::render_feed)
        }
        Commands::View { id, lang } => {
            let result = state
                .content_handler()
                .view(ViewContentRequest { id, lang })
                .await;
            emit(result, json, render::render_content)
        }
        Commands::Drafts { command } => run_drafts(state, command, json).await,
        Commands::Approvals { command } => match command {
            ApprovalsCommand::List => {
                let pending = state.approvals_handler().list_pending().await;
                emit(Ok(pending), json, |rows| render::render_pending(rows))
            }
            ApprovalsCommand::Approve { id } => {
                let result = state.approvals_handler().approve(&id).await;
                emit(result, json, render_outcome)
            }
        },
    }
}

async fn run_drafts(state: &AppState, command: DraftsCommand, json: bool) -> Result<bool> {
    let studio = state.studio_handler();
    match command {
        DraftsCommand::List { reconcile } => {
            let result = studio.list_drafts(reconcile).await;
            emit(result, json, |rows| render::render_drafts(rows))
        }
        DraftsCommand::Save(args) => {
            let result = submit(&studio, args, SubmitMode::Draft).await;
            emit(result, json, render_outcome)
        }
        DraftsCommand::Submit(args) => {
            let result = submit(&studio, args, SubmitMode::Review).await;
            emit(result, json, render_outcome)
        }
        DraftsCommand::Delete { id } => {
            let result = studio.delete_draft(&id).await;
            emit(result, json, render_outcome)
        }
    }
}

async fn submit(
    studio: &content_publisher_lib::presentation::handlers::StudioHandler,
    args: DraftArgs,
    mode: SubmitMode,
) -> Result<ActionOutcome, AppError> {
    let request = args.into_request()?;
    studio.submit_draft(request, mode).await
}

fn render_outcome(outcome: &ActionOutcome) -> String {
    format!("{}\n", outcome.message)
}

/// Prints the result and reports whether the command succeeded.
fn emit<T: Serialize>(
    result: Result<T, AppError>,
    json: bool,
    render: impl FnOnce(&T) -> String,
) -> Result<bool> {
    if json {
        let succeeded = result.is_ok();
        let response = ApiResponse::from_result(result);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(succeeded);
    }
    match result {
        Ok(data) => {
            print!("{}", render(&data));
            Ok(true)
        }
        Err(err) => {
            error!(code = err.code(), "{err}");
            eprintln!("{}", err.user_message());
            Ok(false)
        }
    }
}
