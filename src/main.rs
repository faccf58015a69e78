use actix_ssl::config::structs::ssl_config_file::SslConfigFile;
use actix_ssl::logging::setup_logging;
use actix_ssl::plugin::structs::ssl_plugin::SslPlugin;
use actix_ssl::ssl::ssl::generate_self_signed;
use actix_ssl::structs::Cli;
use actix_web::{web, App, HttpRequest, HttpServer};
use clap::Parser;
use log::{error, info, LevelFilter};
use std::fs;
use std::io;
use std::process::exit;
use std::sync::Arc;
use std::thread::available_parallelism;
use tokio::runtime::Builder;

async fn hello(request: HttpRequest) -> String {
    format!("Hello from {} over {}\n", env!("CARGO_PKG_NAME"), request.connection_info().scheme())
}

fn cert_gen(args: &Cli) -> io::Result<()> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if args.selfsigned_domain != "localhost" {
        subject_alt_names.push(args.selfsigned_domain.clone());
    }
    let generated = generate_self_signed(subject_alt_names).map_err(io::Error::other)?;

    if let Err(error) = fs::write(&args.selfsigned_keyfile, &generated.private_key_pem) {
        error!("[CERTGEN] The key file {} could not be generated!", args.selfsigned_keyfile);
        return Err(error);
    }
    info!("[CERTGEN] The key file {} has been generated", args.selfsigned_keyfile);
    if let Err(error) = fs::write(&args.selfsigned_certfile, &generated.certificate_pem) {
        error!("[CERTGEN] The cert file {} could not be generated!", args.selfsigned_certfile);
        return Err(error);
    }
    info!("[CERTGEN] The cert file {} has been generated", args.selfsigned_certfile);

    info!("[CERTGEN] The files {} and {} has been generated, use them only for development reasons", args.selfsigned_keyfile, args.selfsigned_certfile);
    Ok(())
}

#[cfg(unix)]
async fn reload_on_hangup(plugin: Arc<SslPlugin>, path: String) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(error) => {
            error!("[RELOAD] Unable to listen for SIGHUP: {}", error);
            return;
        }
    };
    while hangup.recv().await.is_some() {
        info!("[RELOAD] SIGHUP received, reloading the identity from {}", path);
        let result = SslConfigFile::load_file(&path)
            .map_err(|e| e.to_string())
            .and_then(|file| file.to_ssl_config().map_err(|e| e.to_string()))
            .and_then(|config| plugin.reload_with(config).map_err(|e| e.to_string()));
        if let Err(error) = result {
            error!("[RELOAD] Keeping the current identity: {}", error);
        }
    }
}

#[tracing::instrument(level = "debug")]
fn main() -> io::Result<()>
{
    let args = Cli::parse();

    if args.create_selfsigned {
        setup_logging(LevelFilter::Info).map_err(io::Error::other)?;
        return cert_gen(&args);
    }

    let config = match SslConfigFile::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    let level = config.log_level_filter().map_err(io::Error::other)?;
    setup_logging(level).map_err(io::Error::other)?;

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let ssl_config = match config.to_ssl_config() {
        Ok(ssl_config) => ssl_config,
        Err(error) => {
            error!("[CONFIG] {}", error);
            exit(1)
        }
    };
    let plugin = Arc::new(SslPlugin::new(ssl_config));
    let workers = config
        .workers
        .unwrap_or_else(|| available_parallelism().map(|n| n.get()).unwrap_or(1));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            let guard = plugin.guard();
            let server = HttpServer::new(move || {
                App::new()
                    .wrap(guard.clone())
                    .route("/", web::get().to(hello))
            })
                .workers(workers);

            let server = match plugin.apply(server) {
                Ok(server) => server.run(),
                Err(error) => {
                    error!("[CONNECTOR] {}", error);
                    exit(1)
                }
            };

            #[cfg(unix)]
            tokio::spawn(reload_on_hangup(plugin.clone(), args.config.clone()));

            server.await
        })
}
