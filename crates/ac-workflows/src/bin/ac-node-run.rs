//! Run the ActiveCampaign node once from the command line.

use ac_api::ActiveCampaignClient;
use ac_workflows::builtin::activecampaign::node_description;
use ac_workflows::{ActiveCampaignNode, ExecutionContext, WorkflowNode};
use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ac-node-run")]
#[command(about = "Execute one ActiveCampaign resource/operation against the v3 API")]
struct Args {
    /// Resource (contact, deal, connection, ecommerceOrder, ...)
    #[arg(short, long)]
    resource: Option<String>,

    /// Operation (create, get, getAll, update, delete, ...)
    #[arg(short, long)]
    operation: Option<String>,

    /// Node parameters as a JSON object
    #[arg(short, long, conflicts_with = "params_file")]
    params: Option<String>,

    /// File holding node parameters as a JSON object
    #[arg(long)]
    params_file: Option<PathBuf>,

    /// File holding input items as a JSON array
    #[arg(long)]
    items_file: Option<PathBuf>,

    /// Print the node description and exit
    #[arg(long)]
    describe: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    ac_core::config::load_environment();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ac_workflows=info".parse()?)
                .add_directive("ac_api=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.describe {
        println!("{}", serde_json::to_string_pretty(&node_description())?);
        return Ok(());
    }

    let mut parameters = match (&args.params, &args.params_file) {
        (Some(inline), _) => serde_json::from_str(inline).context("--params is not valid JSON")?,
        (None, Some(path)) => read_json(path)?,
        (None, None) => Value::Object(Default::default()),
    };
    let obj = parameters
        .as_object_mut()
        .context("Node parameters must be a JSON object")?;
    if let Some(resource) = args.resource {
        obj.insert("resource".to_string(), Value::String(resource));
    }
    if let Some(operation) = args.operation {
        obj.insert("operation".to_string(), Value::String(operation));
    }

    let mut ctx = ExecutionContext::new("ac-node-run").with_parameters(parameters);
    if let Some(path) = &args.items_file {
        let items = match read_json(path)? {
            Value::Array(items) => items,
            _ => anyhow::bail!("{} must contain a JSON array of items", path.display()),
        };
        ctx = ctx.with_items(items);
    }

    let client = ActiveCampaignClient::from_env().context("Failed to configure ActiveCampaign client")?;
    let mut node = ActiveCampaignNode::new("activeCampaign", Arc::new(client));

    let result = node.execute(&ctx).await?;
    info!(
        items = result.items.len(),
        duration_ms = result.duration_ms,
        "Execution finished"
    );
    println!("{}", serde_json::to_string_pretty(&result.items)?);
    Ok(())
}

fn read_json(path: &PathBuf) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}
