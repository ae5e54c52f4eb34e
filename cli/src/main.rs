mod transport;


use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use posts::config::DEFAULT_API_URL;
use posts::{ApiConfig, DraftPost, PostTransport, SubmitError, post_detail_path, submit_draft};
use tracing_subscriber::EnvFilter;

use crate::transport::HttpTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing bearer token; pass --token or set FORUMHUB_TOKEN")]
    MissingToken,
    #[error("failed to read content from {path}: {source}")]
    ReadContent {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{message}")]
    Submit {
        message: String,
        #[source]
        source: SubmitError,
    },
}

impl From<SubmitError> for CliError {
    fn from(source: SubmitError) -> Self {
        Self::Submit { message: source.user_message(), source }
    }
}

#[derive(Parser, Debug)]
#[command(name = "forumhub", about = "ForumHub posts CLI")]
struct Cli {
    #[arg(long, env = "FORUMHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "FORUMHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Post(PostCommand),
}

#[derive(Args, Debug)]
struct PostCommand {
    #[command(subcommand)]
    command: PostSubcommand,
}

#[derive(Subcommand, Debug)]
enum PostSubcommand {
    Create(PostCreateArgs),
}

#[derive(Args, Debug)]
struct PostCreateArgs {
    #[arg(long)]
    title: String,

    #[arg(long)]
    category_id: String,

    #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
    content: Option<String>,

    #[arg(long, help = "Read content from a file, or - for stdin")]
    content_file: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::from_value(Some(&cli.api_url));

    let result = match cli.command {
        Command::Post(post) => match post.command {
            PostSubcommand::Create(args) => {
                run_post_create(&HttpTransport::new(), &config, cli.token.as_deref(), args).await
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_post_create<T: PostTransport>(
    transport: &T,
    config: &ApiConfig,
    token: Option<&str>,
    args: PostCreateArgs,
) -> Result<(), CliError> {
    let token = token.filter(|t| !t.is_empty()).ok_or(CliError::MissingToken)?;
    let draft = DraftPost {
        title: args.title,
        content: read_content(args.content, args.content_file.as_deref())?,
        category_id: args.category_id,
    };

    tracing::info!(url = %config.posts_url(), category_id = %draft.category_id, "creating post");
    match submit_draft(transport, config, token, &draft).await {
        Ok(id) => {
            tracing::info!(%id, "post created");
            println!("{id}\t{}", post_detail_path(&id));
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "create post failed");
            Err(e.into())
        }
    }
}

fn read_content(inline: Option<String>, file: Option<&str>) -> Result<String, CliError> {
    let read_err = |path: &str| {
        let path = path.to_owned();
        move |source| CliError::ReadContent { path, source }
    };
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some("-")) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(read_err("stdin"))?;
            Ok(text)
        }
        (None, Some(path)) => std::fs::read_to_string(path).map_err(read_err(path)),
        (None, None) => Ok(String::new()),
    }
}
