pub mod commands;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::advice::AdviceService;
use crate::backend::gemini::GeminiBackend;
use crate::chat::{ConversationController, MemoryStore, Role};
use crate::cli::commands::Commands;
use crate::config::AppConfig;
use crate::data::{ui_strings, AgeInfo, Language};
use crate::input::image::read_image;

pub async fn run_cli(command: Commands, config_path: String) {
    let config = AppConfig::load(&config_path).expect("Failed to load config");

    match command {
        Commands::Serve => {
            panic!("Serve command should be intercepted by main.rs to boot actix-web");
        }
        Commands::Chat { language } => {
            let language: Language = match language.parse() {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("{e}");
                    return;
                }
            };
            run_repl(language, config).await;
        }
        Commands::Schedule {
            language,
            birth_date,
        } => {
            let language: Language = match language.parse() {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("{e}");
                    return;
                }
            };
            let age = birth_date.and_then(|raw| {
                let birth = raw.parse::<chrono::NaiveDate>().ok()?;
                AgeInfo::from_birth_date(birth, chrono::Utc::now().date_naive())
            });
            print_schedule(language, age.as_ref());
        }
        Commands::Translate { language, text } => {
            let language: Language = match language.parse() {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("{e}");
                    return;
                }
            };
            let service = build_service(&config);
            println!("{}", service.translate(&text, language).await);
        }
    }
}

fn build_service(config: &AppConfig) -> Arc<AdviceService> {
    let backend = Arc::new(GeminiBackend::from_config(&config.gemini));
    Arc::new(AdviceService::new(backend, &config.gemini, &config.advice))
}

fn print_schedule(language: Language, age: Option<&AgeInfo>) {
    let strings = ui_strings(language);
    println!("{:<16} | {:<42} | Due", "Age", "Vaccines");
    println!("{:-<16}-+-{:-<42}-+----", "", "");
    for entry in strings.vaccine_schedule {
        let due = if entry.is_due(age) { "  *" } else { "" };
        println!("{:<16} | {:<42} |{}", entry.age, entry.vaccines, due);
        println!("{:<16} |   {}", "", entry.info);
    }
    if let Some(age) = age {
        println!(
            "\nAge: {} weeks / {} months / {} years. Rows marked * are due now.",
            age.weeks, age.months, age.years
        );
    }
}

async fn run_repl(language: Language, config: AppConfig) {
    let service = build_service(&config);
    let mut controller =
        ConversationController::new(Arc::clone(&service), Box::new(MemoryStore::new()));
    controller.start(language);

    println!("--- JeevanSathi Chat ({}) ---", language.native_name());
    println!("Commands: /exit /clear /lang <code> /history <code> /image <path> /translate <text>");
    println!("Try asking:");
    for question in ui_strings(language).quick_questions {
        println!("  - {question}");
    }
    println!("------------------------------");
    print_last_message(&controller);

    loop {
        print!("\nYou> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            break;
        }
        let text = input.trim().to_string();

        if text.is_empty() && !controller.has_pending_image() {
            continue;
        }
        if text == "/exit" || text == "/quit" {
            break;
        }
        if text == "/clear" {
            controller.clear();
            print_last_message(&controller);
            continue;
        }
        if let Some(code) = text.strip_prefix("/lang ") {
            match code.trim().parse::<Language>() {
                Ok(l) => {
                    controller.start(l);
                    println!("Switched to {}.", l.native_name());
                    print_last_message(&controller);
                }
                Err(e) => eprintln!("{e}"),
            }
            continue;
        }
        if let Some(code) = text.strip_prefix("/history ") {
            match code.trim().parse::<Language>() {
                Ok(l) => {
                    let history = controller.switch_history(l);
                    if history.is_empty() {
                        println!("No saved history for {}.", l.native_name());
                    } else {
                        for msg in &history {
                            let who = match msg.role {
                                Role::User => "You",
                                _ => "JeevanSathi",
                            };
                            println!("[{who}] {}", msg.content);
                        }
                    }
                    controller.exit_history_view();
                }
                Err(e) => eprintln!("{e}"),
            }
            continue;
        }
        if let Some(path) = text.strip_prefix("/image ") {
            match read_image(Path::new(path.trim())) {
                Ok(image) => {
                    controller.attach_image(image, None);
                    println!("Image attached. It will go with your next message.");
                }
                Err(e) => eprintln!("{e}"),
            }
            continue;
        }
        if let Some(raw) = text.strip_prefix("/translate ") {
            let translated = service.translate(raw.trim(), controller.language()).await;
            println!("{translated}");
            continue;
        }

        if controller.send(&text, false).await {
            print_last_message(&controller);
        }
    }
}

fn print_last_message(controller: &ConversationController) {
    if let Some(msg) = controller.messages().last() {
        println!("\nJeevanSathi> {}", msg.content);
        for link in &msg.grounding_links {
            println!("  [map] {}: {}", link.title, link.uri);
        }
        if msg.is_error && msg.retry_prompt.is_some() {
            println!("  (send the same message again to retry)");
        }
    }
}
