use clap::{Parser, Subcommand, ValueEnum};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("api request failed: HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "modqueue-cli", about = "ModQueue moderation API CLI")]
struct Cli {
    /// Moderation API base URL, including any mount prefix.
    #[arg(long, env = "MODQUEUE_API_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "MODQUEUE_API_KEY")]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    api_key: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the API root and print `ok` if it responds.
    Ping,
    /// List the review queue.
    Queue,
    /// Show one queued content item.
    Content { content_id: String },
    /// Submit a review decision for a content item.
    Review {
        content_id: String,
        #[arg(value_enum)]
        decision: DecisionArg,
    },
    /// List flagged content.
    Flagged,
    /// List user accounts.
    Users,
    /// Print the analytics overview document.
    Overview,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DecisionArg {
    Approve,
    Reject,
}

impl DecisionArg {
    fn as_action(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        api_key: cli.api_key,
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Queue => run_queue(&ctx).await,
        Command::Content { content_id } => run_content(&ctx, &content_id).await,
        Command::Review {
            content_id,
            decision,
        } => run_review(&ctx, &content_id, decision).await,
        Command::Flagged => run_flagged(&ctx).await,
        Command::Users => run_users(&ctx).await,
        Command::Overview => run_overview(&ctx).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/", cli.base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Api {
            status: status.as_u16(),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_queue(cli: &CliContext) -> Result<(), CliError> {
    let json = api_request(cli, reqwest::Method::GET, "/admin/content", None).await?;
    print_json(&json)?;
    Ok(())
}

async fn run_content(cli: &CliContext, content_id: &str) -> Result<(), CliError> {
    let path = format!("/admin/content/{content_id}");
    let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
    print_json(&json)?;
    Ok(())
}

async fn run_review(
    cli: &CliContext,
    content_id: &str,
    decision: DecisionArg,
) -> Result<(), CliError> {
    let path = format!("/admin/review/{content_id}");
    let json = api_request(
        cli,
        reqwest::Method::POST,
        &path,
        Some(serde_json::json!({ "action": decision.as_action() })),
    )
    .await?;
    print_json(&json)?;
    Ok(())
}

async fn run_flagged(cli: &CliContext) -> Result<(), CliError> {
    let json = api_request(cli, reqwest::Method::GET, "/admin/flagged", None).await?;
    print_json(&json)?;
    Ok(())
}

async fn run_users(cli: &CliContext) -> Result<(), CliError> {
    let json = api_request(cli, reqwest::Method::GET, "/admin/users", None).await?;
    print_json(&json)?;
    Ok(())
}

async fn run_overview(cli: &CliContext) -> Result<(), CliError> {
    let json = api_request(cli, reqwest::Method::GET, "/analytics/overview", None).await?;
    print_json(&json)?;
    Ok(())
}

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let mut headers = HeaderMap::new();
    if let Some(api_key) = &cli.api_key {
        headers.insert(HeaderName::from_static("x-api-key"), HeaderValue::from_str(api_key)?);
    }

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;
    let url = format!("{}{}", cli.base_url.trim_end_matches('/'), path);

    let request = client.request(method, &url);
    let request = if let Some(json) = body {
        request.json(&json)
    } else {
        request
    };

    let response = request.send().await?;
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        return Err(CliError::Api {
            status: status.as_u16(),
            message: value.to_string(),
        });
    }

    Ok(value)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
