use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use jeevansathi::advice::AdviceService;
use jeevansathi::api::middleware::ApiKeyAuth;
use jeevansathi::api::{routes, AppState};
use jeevansathi::backend::gemini::GeminiBackend;
use jeevansathi::chat::{ConversationController, MemoryStore};
use jeevansathi::cli::{commands::Cli, commands::Commands, run_cli};
use jeevansathi::config::AppConfig;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"status": "healthy"}))
}

async fn index() -> impl Responder {
    let html = include_str!("../static/index.html");
    HttpResponse::Ok().content_type("text/html").body(html)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Serve) {
        run_cli(cli.command, cli.config).await;
        return Ok(());
    }

    info!("Starting JeevanSathi server...");

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let backend = Arc::new(GeminiBackend::from_config(&config.gemini));
    let advice = Arc::new(AdviceService::new(
        backend,
        &config.gemini,
        &config.advice,
    ));

    let state = web::Data::new(AppState {
        controller: Mutex::new(ConversationController::new(
            Arc::clone(&advice),
            Box::new(MemoryStore::new()),
        )),
        advice: Arc::clone(&advice),
    });

    let host = config.server.host.clone();
    let port = config.server.port;
    let config_data = web::Data::new(config);

    info!("Listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config_data.clone())
            .wrap(ApiKeyAuth)
            .route("/", web::get().to(index))
            .route("/health", web::get().to(health))
            .service(
                web::scope("/api")
                    .service(routes::list_languages)
                    .service(routes::start_chat)
                    .service(routes::send_message)
                    .service(routes::get_messages)
                    .service(routes::clear_chat)
                    .service(routes::list_history)
                    .service(routes::view_history)
                    .service(routes::restore_history)
                    .service(routes::translate)
                    .service(routes::set_location)
                    .service(routes::vaccine_schedule)
                    .service(routes::alerts)
                    .service(routes::localized_strings)
                    .service(routes::helplines),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
