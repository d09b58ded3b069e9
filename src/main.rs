//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::new::NewPost;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Portfolio and blog content engine", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, featured posts or tags
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, featured, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a single post by slug
    Show {
        /// Slug of the post (its filename without .md)
        slug: String,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Short description
        #[arg(long, default_value = "")]
        description: String,

        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Mark the post as featured
        #[arg(short, long)]
        featured: bool,
    },

    /// Start the JSON API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Summarize the portfolio document
    Portfolio,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&site, &r#type).await?;
        }

        Commands::Show { slug } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&site, &slug).await?;
        }

        Commands::New {
            title,
            description,
            tags,
            featured,
        } => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let tags: Vec<String> = tags.iter().map(|t| t.trim().to_string()).collect();
            folio::commands::new::run(
                &site,
                &NewPost {
                    title: &title,
                    description: &description,
                    tags: &tags,
                    featured,
                },
            )?;
        }

        Commands::Serve { port, ip, open } => {
            let site = folio::Folio::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);

            tracing::info!("Serving posts from {:?}", site.blog_dir);
            folio::server::start(&site, &ip, port, open).await?;
        }

        Commands::Portfolio => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::portfolio::run(&site)?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
