//! Build-step CLI for flashui.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use flashui_core::EmbedConfig;
use flashui_embedder::Embedder;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flashui")]
#[command(about = "Embed a built web UI into C headers for firmware")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, env = "FLASHUI_CONFIG", default_value = "flashui.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress the bundle and generate headers
    Embed {
        /// Build output directory to embed
        #[arg(long)]
        dist: Option<PathBuf>,
        /// Destination directory for generated headers
        #[arg(long)]
        out: Option<PathBuf>,
        /// File-name prefix for generated headers
        #[arg(long)]
        prefix: Option<String>,
        /// Extension=MIME content-type override (repeatable)
        #[arg(long = "content-type", value_name = "EXT=MIME")]
        content_types: Vec<String>,
        /// Delete generated headers no longer present in the bundle
        #[arg(long, default_value_t = false)]
        prune: bool,
    },
}

/// CLI-level overrides applied on top of the file/env configuration.
struct EmbedOverrides {
    dist: Option<PathBuf>,
    out: Option<PathBuf>,
    prefix: Option<String>,
    content_types: Vec<String>,
    prune: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Embed {
            dist,
            out,
            prefix,
            content_types,
            prune,
        } => {
            let config = load_config(
                &cli.config,
                EmbedOverrides {
                    dist,
                    out,
                    prefix,
                    content_types,
                    prune,
                },
            )?;
            run_embed(config).await
        }
    }
}

/// Load configuration: defaults, then TOML file, then `FLASHUI_` env
/// vars, then CLI flags.
fn load_config(config_path: &str, overrides: EmbedOverrides) -> Result<EmbedConfig> {
    let mut figment = Figment::from(Serialized::defaults(EmbedConfig::default()));

    if std::path::Path::new(config_path).exists() {
        tracing::info!(config_path, "loading configuration from file");
        figment = figment.merge(Toml::file(config_path));
    } else {
        tracing::debug!(config_path, "no config file found");
    }

    let mut config: EmbedConfig = figment
        .merge(Env::prefixed("FLASHUI_").split("__"))
        .extract()
        .context("failed to load configuration")?;

    if let Some(dist) = overrides.dist {
        config.dist_dir = dist;
    }
    if let Some(out) = overrides.out {
        config.out_dir = Some(out);
    }
    if let Some(prefix) = overrides.prefix {
        config.header_prefix = prefix;
    }
    for pair in overrides.content_types {
        let (ext, mime) = pair
            .split_once('=')
            .with_context(|| format!("invalid --content-type {pair:?}, expected EXT=MIME"))?;
        config
            .content_types
            .insert(ext.trim_start_matches('.').to_string(), mime.to_string());
    }
    if overrides.prune {
        config.prune = true;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

async fn run_embed(config: EmbedConfig) -> Result<()> {
    tracing::info!("flashui v{}", env!("CARGO_PKG_VERSION"));

    let dist = config.dist_dir.clone();
    let embedder = Embedder::new(config);
    let reports = embedder
        .run()
        .await
        .with_context(|| format!("failed to embed bundle at {}", dist.display()))?;

    let total: usize = reports.iter().map(|r| r.compressed_len).sum();
    tracing::info!(
        headers = reports.len(),
        compressed_bytes = total,
        "embedding complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overrides() -> EmbedOverrides {
        EmbedOverrides {
            dist: None,
            out: None,
            prefix: None,
            content_types: Vec::new(),
            prune: false,
        }
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let config = load_config("/nonexistent/flashui.toml", no_overrides()).unwrap();
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.header_prefix, "ui_");
    }

    #[test]
    fn config_file_is_loaded() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("flashui.toml");
        std::fs::write(
            &path,
            r#"
dist_dir = "web/dist"
header_prefix = "web_"
prune = true

[content_types]
webmanifest = "application/manifest+json"
"#,
        )
        .unwrap();

        let config = load_config(path.to_str().unwrap(), no_overrides()).unwrap();
        assert_eq!(config.dist_dir, PathBuf::from("web/dist"));
        assert_eq!(config.header_prefix, "web_");
        assert!(config.prune);
        assert_eq!(
            config.content_types.get("webmanifest").map(String::as_str),
            Some("application/manifest+json")
        );
    }

    #[test]
    fn cli_flags_override_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("flashui.toml");
        std::fs::write(&path, "dist_dir = \"web/dist\"\n").unwrap();

        let overrides = EmbedOverrides {
            dist: Some(PathBuf::from("other/dist")),
            out: Some(PathBuf::from("firmware/src")),
            prefix: Some("page_".to_string()),
            content_types: vec![".webmanifest=application/manifest+json".to_string()],
            prune: true,
        };
        let config = load_config(path.to_str().unwrap(), overrides).unwrap();

        assert_eq!(config.dist_dir, PathBuf::from("other/dist"));
        assert_eq!(config.out_dir, Some(PathBuf::from("firmware/src")));
        assert_eq!(config.header_prefix, "page_");
        assert!(config.prune);
        assert_eq!(
            config.content_types.get("webmanifest").map(String::as_str),
            Some("application/manifest+json")
        );
    }

    #[test]
    fn malformed_content_type_override_is_rejected() {
        let overrides = EmbedOverrides {
            content_types: vec!["no-equals-sign".to_string()],
            ..no_overrides()
        };
        assert!(load_config("/nonexistent/flashui.toml", overrides).is_err());
    }

    #[test]
    fn invalid_prefix_is_rejected() {
        let overrides = EmbedOverrides {
            prefix: Some("../ui_".to_string()),
            ..no_overrides()
        };
        assert!(load_config("/nonexistent/flashui.toml", overrides).is_err());
    }
}
