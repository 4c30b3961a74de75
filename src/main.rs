//! Sidecar Boot Launcher
//!
//! Entry point for the bundled browser-agent sidecar. Applies the startup
//! patch before anything else runs, then reports on it or hands off to the
//! host process.

use anyhow::Result;
use clap::Parser;

use sidecar_boot::bootstrap::Bootstrap;
use sidecar_boot::config;
use sidecar_boot::logging;
use sidecar_boot::proxy::http::apply_proxy_policy;

const VERSION: &str = "0.1.0";

/// Sidecar Boot -- startup patch for the bundled sidecar
#[derive(Parser, Debug)]
#[command(
    name = "sidecar-boot",
    version = VERSION,
    about = "Startup patch for the bundled browser-agent sidecar",
    long_about = "Applies the startup patch (proxy discovery off, bundled asset \
                  redirect) before any application code runs."
)]
struct Cli {
    /// Apply the patch and start the sidecar host process
    #[arg(long)]
    run: bool,

    /// Show what the patch did and exit
    #[arg(long)]
    status: bool,

    /// Resolve a dotted package name and print its asset directory
    #[arg(long, value_name = "PACKAGE")]
    resolve: Option<String>,
}

// ---- Status Command ---------------------------------------------------------

/// Print the boot report as JSON.
fn show_status(boot: &Bootstrap) {
    let proxy_policy = if boot.proxies.proxies().is_empty() {
        "none"
    } else {
        "configured"
    };

    println!(
        "{}",
        serde_json::json!({
            "version": VERSION,
            "frozen": boot.bundle.frozen,
            "extractDir": boot.bundle.extract_dir.as_ref().map(|d| d.to_string_lossy()),
            "scrubbed": boot.scrubbed,
            "capturedProxyEnv": boot.captured,
            "proxyPolicy": proxy_policy,
            "configPath": config::get_config_path().to_string_lossy(),
        })
    );
}

// ---- Main Run ---------------------------------------------------------------

/// Hand off to the host process: construct the shared HTTP client through
/// the boot proxy policy, then yield control.
fn run(boot: &Bootstrap) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    println!("[{}] sidecar-boot v{} starting...", now, VERSION);

    if boot.bundle.frozen {
        let extract = boot
            .bundle
            .extract_dir
            .as_ref()
            .map(|d| d.to_string_lossy().to_string())
            .unwrap_or_else(|| "(unknown)".to_string());
        println!("[{}] Bundled build, extraction dir: {}", now, extract);
    }
    if !boot.scrubbed.is_empty() {
        println!(
            "[{}] Removed proxy variables: {}",
            now,
            boot.scrubbed.join(", ")
        );
    }

    // The host's shared client is built here, before anything else can touch
    // the network, so the no-proxy policy is what gets cached.
    let builder = apply_proxy_policy(reqwest::Client::builder(), boot.proxies.as_ref())?;
    let _client = builder.build()?;

    let now = chrono::Utc::now().to_rfc3339();
    println!("[{}] Startup patch applied, handing off to host.", now);
    Ok(())
}

// ---- Entry Point -----------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    // The patch precedes everything else, logging included: subscribers are
    // free to read the environment, so it has to be clean first.
    let boot = Bootstrap::apply(config::load_config());
    logging::init_logging(&boot.config.log_level);

    if cli.status {
        show_status(&boot);
        return;
    }

    if let Some(package) = cli.resolve {
        match boot.resources.resolve(&package) {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.run {
        if let Err(e) = run(&boot) {
            eprintln!("Fatal: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // Default: show usage hints
    println!("Run \"sidecar-boot --status\" to inspect the startup patch.");
    println!("Run \"sidecar-boot --run\" to start the sidecar.");
}
