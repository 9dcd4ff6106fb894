use city_router::web::server::{start_server, ServerConfig};
use city_router::EngineConfig;
use log::info;
use std::env;

/// Environment variable naming an optional engine config JSON file
const CONFIG_ENV: &str = "CITY_ROUTER_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = if args.len() > 1 {
        args[1].parse().unwrap_or(3005)
    } else {
        3005
    };

    let engine = match env::var(CONFIG_ENV) {
        Ok(path) => {
            info!("Loading engine configuration from {}", path);
            EngineConfig::from_json_file(&path)?
        }
        Err(_) => EngineConfig::default(),
    };

    let config = ServerConfig {
        port,
        engine,
        ..Default::default()
    };

    info!("Starting city router web server");
    info!("  Port: {}", config.port);
    info!("  Static files: {}", config.static_dir);
    info!("  CORS enabled: {}", config.enable_cors);
    info!("  Preset network: {}", config.load_preset);
    info!("  Engine: {:?}", config.engine);

    start_server(config).await?;

    Ok(())
}
