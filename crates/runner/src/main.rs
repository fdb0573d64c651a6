use auth::ApiCredentials;
use clap::{Parser, ValueEnum};
use common::TaurosEnvironment;
use serde_json::Value;
use tauros_rest::{ApiResponse, TaurosClient};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Send a single request to the Tauros REST API.
///
/// Credentials are read from TAUROS_API_KEY and TAUROS_API_SECRET (or a .env file).
#[derive(Debug, Parser)]
#[command(name = "tauros", version)]
struct Args {
    /// HTTP method.
    #[arg(value_enum)]
    method: Verb,

    /// Request path, e.g. /api/v1/trading/markets/
    path: String,

    /// Query parameter as key=value (GET only, repeatable, order kept).
    #[arg(short, long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// JSON request body (POST, PUT, PATCH).
    #[arg(short, long, value_parser = parse_body)]
    body: Option<Value>,

    /// Call the endpoint without authentication.
    #[arg(long)]
    public: bool,

    /// Target the staging environment (overrides TAUROS_ENVIRONMENT).
    #[arg(long)]
    staging: bool,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn parse_body(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON body: {}", e))
}

#[tokio::main]
async fn main() {
    common::init_logging();

    let args = Args::parse();

    let environment = if args.staging {
        TaurosEnvironment::Staging
    } else {
        TaurosEnvironment::from_env()
    };

    let client = match TaurosClient::new(ApiCredentials::from_env(), environment) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create client");
            std::process::exit(1);
        }
    };

    info!(
        environment = %client.environment(),
        method = ?args.method,
        path = %args.path,
        public = args.public,
        "Sending request"
    );

    let params: Vec<(&str, &str)> = args
        .params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let params = (!params.is_empty()).then_some(params.as_slice());
    let body = args.body.as_ref();

    let result = match args.method {
        Verb::Get => client.get(&args.path, params, args.public).await,
        Verb::Post => client.post(&args.path, body, args.public).await,
        Verb::Put => client.put(&args.path, body, args.public).await,
        Verb::Patch => client.patch(&args.path, body, args.public).await,
        Verb::Delete => client.delete(&args.path, args.public).await,
    };

    match result {
        Ok(response) => {
            if let ApiResponse::HttpError { status_code, .. } = &response {
                info!(status_code = status_code, "Request returned an HTTP error");
            }
            match serde_json::to_string_pretty(&response) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    error!(error = %e, "Failed to render response");
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            error!(error = %e, "Request failed");
            std::process::exit(1);
        }
    }
}
