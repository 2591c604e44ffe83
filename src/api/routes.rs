use actix_web::{get, post, web, HttpResponse, Result as WebResult};
use chrono::NaiveDate;

use crate::api::models::{
    HelplineInfo, HistoryEntry, LanguageInfo, SendRequest, StartRequest, TranslateRequest,
    TranslateResponse, UiInfo, VaccineQuery,
};
use crate::api::AppState;
use crate::data::{ui_strings, AgeInfo, Language, AMBULANCE_NUMBER, HEALTH_HELPLINE_NUMBER};
use crate::input::location::UserLocation;

#[get("/languages")]
pub async fn list_languages() -> WebResult<HttpResponse> {
    let languages: Vec<LanguageInfo> = Language::ALL
        .into_iter()
        .map(|l| LanguageInfo {
            code: l.code(),
            name: l.display_name(),
            native_name: l.native_name(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(languages))
}

// --- Chat ---

#[post("/chat/start")]
pub async fn start_chat(
    state: web::Data<AppState>,
    req: web::Json<StartRequest>,
) -> WebResult<HttpResponse> {
    let mut controller = state.controller.lock().await;
    controller.start(req.language);
    Ok(HttpResponse::Ok().json(controller.messages()))
}

#[post("/chat/send")]
pub async fn send_message(
    state: web::Data<AppState>,
    req: web::Json<SendRequest>,
) -> WebResult<HttpResponse> {
    let req = req.into_inner();
    let mut controller = state.controller.lock().await;

    if let Some(image) = req.image {
        controller.attach_image(image, req.image_preview);
    }

    let sent = controller.send(&req.text, req.is_retry).await;
    if !sent {
        return Ok(HttpResponse::BadRequest().body("nothing to send"));
    }
    Ok(HttpResponse::Ok().json(controller.messages()))
}

#[get("/chat/messages")]
pub async fn get_messages(state: web::Data<AppState>) -> WebResult<HttpResponse> {
    let controller = state.controller.lock().await;
    Ok(HttpResponse::Ok().json(controller.messages()))
}

#[post("/chat/clear")]
pub async fn clear_chat(state: web::Data<AppState>) -> WebResult<HttpResponse> {
    let mut controller = state.controller.lock().await;
    controller.clear();
    Ok(HttpResponse::Ok().json(controller.messages()))
}

// --- History ---

#[get("/history")]
pub async fn list_history(state: web::Data<AppState>) -> WebResult<HttpResponse> {
    let controller = state.controller.lock().await;
    let entries: Vec<HistoryEntry> = controller
        .history_overview()
        .into_iter()
        .map(|(language, message_count)| HistoryEntry {
            language,
            message_count,
        })
        .collect();
    Ok(HttpResponse::Ok().json(entries))
}

#[get("/history/{language}")]
pub async fn view_history(
    state: web::Data<AppState>,
    language: web::Path<Language>,
) -> WebResult<HttpResponse> {
    let mut controller = state.controller.lock().await;
    let messages = controller.switch_history(language.into_inner());
    Ok(HttpResponse::Ok().json(messages))
}

#[post("/history/{language}/restore")]
pub async fn restore_history(
    state: web::Data<AppState>,
    language: web::Path<Language>,
) -> WebResult<HttpResponse> {
    let mut controller = state.controller.lock().await;
    if !controller.restore_history(language.into_inner()) {
        return Ok(HttpResponse::NotFound().body("no history for language"));
    }
    Ok(HttpResponse::Ok().json(controller.messages()))
}

// --- Translation, location ---

#[post("/translate")]
pub async fn translate(
    state: web::Data<AppState>,
    req: web::Json<TranslateRequest>,
) -> WebResult<HttpResponse> {
    let text = state.advice.translate(&req.text, req.language).await;
    Ok(HttpResponse::Ok().json(TranslateResponse { text }))
}

#[post("/location")]
pub async fn set_location(
    state: web::Data<AppState>,
    req: web::Json<UserLocation>,
) -> WebResult<HttpResponse> {
    let mut controller = state.controller.lock().await;
    controller.set_location(req.into_inner());
    Ok(HttpResponse::NoContent().finish())
}

// --- Reference data ---

#[get("/vaccines/{language}")]
pub async fn vaccine_schedule(
    language: web::Path<Language>,
    query: web::Query<VaccineQuery>,
) -> WebResult<HttpResponse> {
    let age = match &query.birth_date {
        Some(raw) => match raw.parse::<NaiveDate>() {
            Ok(birth) => AgeInfo::from_birth_date(birth, chrono::Utc::now().date_naive()),
            Err(_) => return Ok(HttpResponse::BadRequest().body("invalid birth_date")),
        },
        None => None,
    };

    let rows: Vec<_> = ui_strings(language.into_inner())
        .vaccine_schedule
        .iter()
        .map(|entry| entry.to_row(age.as_ref()))
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}

#[get("/alerts/{language}")]
pub async fn alerts(language: web::Path<Language>) -> WebResult<HttpResponse> {
    let rows: Vec<_> = ui_strings(language.into_inner())
        .alerts
        .iter()
        .map(|alert| alert.to_row())
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}

#[get("/strings/{language}")]
pub async fn localized_strings(language: web::Path<Language>) -> WebResult<HttpResponse> {
    let strings = ui_strings(language.into_inner());
    Ok(HttpResponse::Ok().json(UiInfo {
        welcome: strings.welcome,
        disclaimer: strings.disclaimer,
        report_analysis: strings.report_analysis,
        quick_questions: strings.quick_questions,
        vax_detail_prompt: strings.vax_detail_prompt,
        alert_detail_prompt: strings.alert_detail_prompt,
    }))
}

#[get("/helplines")]
pub async fn helplines() -> WebResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HelplineInfo {
        ambulance: AMBULANCE_NUMBER,
        health_helpline: HEALTH_HELPLINE_NUMBER,
    }))
}
