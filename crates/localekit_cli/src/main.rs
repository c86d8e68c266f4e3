//! localekit developer CLI
//!
//! Inspect the locale catalog, resolve arbitrary locale tags, and simulate a
//! full configuration arrival (detection, supported-set restriction, default
//! locale) without a running host application.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use localekit::detect::{self, FixedLocale, SystemLocaleSource};
use localekit::{
    normalize_locale, ConfigWatcher, FilePreferenceStore, I18nState, MemoryStore, PreferenceStore,
    ServerConfig, FALLBACK_LOCALE, LOCALES,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Locale runtime developer tool
#[derive(Parser, Debug)]
#[command(name = "localekit")]
#[command(about = "Inspect the locale catalog and simulate server configurations")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the locale catalog
    Locales {
        /// Show only the supported set this config file would leave
        #[arg(long, value_name = "FILE")]
        supported_by: Option<PathBuf>,
    },
    /// Resolve locale tags against the catalog
    Resolve {
        /// Tags to resolve (e.g. "de", "pt_BR", "sr_LATN_RS")
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Simulate a configuration arrival end to end
    Plan {
        /// Server config file (.toml or .json)
        #[arg(long, value_name = "FILE")]
        config: PathBuf,
        /// Preference file to read the user's stored choice from
        #[arg(long, value_name = "FILE")]
        prefs: Option<PathBuf>,
        /// Pretend the system reports this locale
        #[arg(long, value_name = "TAG")]
        system: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match args.command {
        Command::Locales { supported_by } => locales(supported_by),
        Command::Resolve { tags } => {
            resolve(&tags);
            Ok(())
        }
        Command::Plan {
            config,
            prefs,
            system,
        } => plan(&config, prefs, system),
    }
}

fn load_config(path: &PathBuf) -> Result<ServerConfig> {
    debug!("loading config from {}", path.display());
    ServerConfig::load_from_path(path)
        .with_context(|| format!("could not load config {}", path.display()))
}

fn locales(supported_by: Option<PathBuf>) -> Result<()> {
    let supported: Option<Vec<&str>> = match supported_by {
        Some(path) => {
            let config = load_config(&path)?;
            let mut state = I18nState::default();
            state.restrict(config.languages.as_deref());
            Some(state.supported_locales().to_vec())
        }
        None => None,
    };

    for entry in LOCALES {
        if let Some(ref supported) = supported {
            if !supported.contains(&entry.code) {
                continue;
            }
        }
        let fallback = if entry.code == FALLBACK_LOCALE {
            "  (fallback)"
        } else {
            ""
        };
        println!(
            "{:<12} {:<4} {}{}",
            entry.code,
            entry.direction.as_attr(),
            entry.display_name,
            fallback
        );
    }
    Ok(())
}

fn resolve(tags: &[String]) {
    for tag in tags {
        let code = normalize_locale(tag);
        let status = if localekit::is_catalog_code(&code) {
            "catalog"
        } else {
            "unsupported"
        };
        println!("{tag} -> {code}  [{status}]");
    }
}

fn plan(config_path: &PathBuf, prefs: Option<PathBuf>, system: Option<String>) -> Result<()> {
    let config = Arc::new(load_config(config_path)?);

    let store: Box<dyn PreferenceStore> = match prefs {
        Some(path) => Box::new(FilePreferenceStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };
    let system: Box<dyn SystemLocaleSource> = match system {
        Some(tag) => Box::new(FixedLocale(Some(tag))),
        None => Box::new(detect::SystemLocale),
    };

    let initial = detect::initial_locale(store.as_ref(), system.as_ref());
    println!("initial locale:  {initial}");

    let mut state = I18nState::with_initial_locale(store, &initial);
    let mut watcher = ConfigWatcher::new();
    watcher.observe(&mut state, Some(&config), false);

    println!("active locale:   {}", state.active_locale());
    println!("direction:       {}", state.active_direction().as_attr());
    println!("supported set:   {}", state.supported_locales().join(", "));
    if !state.is_supported(state.active_locale()) {
        println!("note: active locale is outside the supported set (server default override)");
    }
    Ok(())
}
