mod modules;

include_modules!();

use std::sync::Arc;

use clap::Parser;
use env_logger::Builder;
use log::{error, info, warn, LevelFilter};

use crate::model::{Config, Healthcheck};
use crate::utils::file::{config_reader, file_utils};
use crate::utils::network::request::set_sanitize_sensitive_info;

#[derive(Parser)]
#[command(name = "tunescout")]
#[command(version, about = "Playlist server for remote pages and local media folders", long_about = None)]
struct Args {
    /// The config directory
    #[arg(short = 'p', long = "config-path")]
    config_path: Option<String>,

    /// The config file
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// Log level, overrides config and RUST_LOG, e.g. `debug` or `tunescout=trace,info`
    #[arg(short = 'l', long = "log-level")]
    log_level: Option<String>,

    /// Listen address, overrides config
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides config
    #[arg(long)]
    port: Option<u16>,

    /// Queries the healthcheck endpoint of a running instance and exits
    #[arg(long, default_value_t = false)]
    healthcheck: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config_path = args.config_path.unwrap_or_else(file_utils::get_default_config_path);
    let config_file = args.config_file.unwrap_or_else(|| file_utils::get_default_config_file_path(&config_path));

    let mut cfg = match config_reader::read_config(&config_path, &config_file) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    if let Some(host) = args.host {
        cfg.api.host = host;
    }
    if let Some(port) = args.port {
        cfg.api.port = port;
    }

    init_logger(args.log_level.as_deref(), cfg.log_level());
    set_sanitize_sensitive_info(cfg.sanitize_sensitive_info());

    if args.healthcheck {
        healthcheck(&cfg).await;
    }

    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    if let Some(build_time) = option_env!("VERGEN_BUILD_TIMESTAMP") {
        info!("Build time: {build_time}");
    }
    if file_utils::path_exists(&std::path::PathBuf::from(&config_file)) {
        info!("Config file: {config_file}");
    } else {
        warn!("Config file not found: {config_file}, using defaults");
    }
    info!("Working dir: {}", cfg.working_dir);

    if let Err(err) = api::main_api::start_server(Arc::new(cfg)).await {
        exit!("cant start server: {err}");
    }
}

fn init_logger(user_log_level: Option<&str>, config_log_level: Option<&str>) {
    // cli argument > RUST_LOG > config > info
    let log_level = user_log_level.map(String::from)
        .or_else(|| std::env::var("RUST_LOG").ok())
        .or_else(|| config_log_level.map(String::from))
        .unwrap_or_else(|| String::from("info"));

    let mut log_builder = Builder::new();
    log_builder.filter_level(LevelFilter::Info);
    log_builder.parse_filters(&log_level);
    log_builder.init();
    info!("Log level {log_level}");
}

async fn healthcheck(cfg: &Config) -> ! {
    let host = if cfg.api.host == "0.0.0.0" { "127.0.0.1" } else { cfg.api.host.as_str() };
    let url = format!("http://{host}:{}/healthcheck", cfg.api.port);
    match reqwest::get(&url).await {
        Ok(response) if response.status().is_success() => {
            match response.json::<Healthcheck>().await {
                Ok(check) if check.status == "ok" => std::process::exit(0),
                Ok(check) => error!("healthcheck status {}", check.status),
                Err(err) => error!("cant read healthcheck response: {err}"),
            }
        }
        Ok(response) => error!("healthcheck failed with status {}", response.status()),
        Err(err) => error!("healthcheck failed: {err}"),
    }
    std::process::exit(1);
}
