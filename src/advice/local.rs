use crate::data::{ui_strings, Language};

/// Static knowledge lookup answering from the bundled reference tables
/// without a network call. Substring containment against the normalized
/// prompt; first match wins, vaccines before alerts.
pub fn local_knowledge_response(prompt: &str, language: Language) -> Option<String> {
    let strings = ui_strings(language);
    let prompt_lower = prompt.to_lowercase().trim().to_string();

    for entry in strings.vaccine_schedule {
        if prompt_lower.contains(&entry.vaccines.to_lowercase())
            || prompt_lower.contains(&entry.age.to_lowercase())
        {
            return Some(format!(
                "[Offline Info] {} ({}): {}\n\n{}",
                entry.vaccines, entry.age, entry.info, strings.disclaimer
            ));
        }
    }

    for alert in strings.alerts {
        let title_match = prompt_lower.contains(&alert.title.to_lowercase());
        let keyword_match = alert
            .keywords
            .iter()
            .any(|k| prompt_lower.contains(&k.to_lowercase()));
        if title_match || keyword_match {
            let precautions = alert
                .precautions
                .iter()
                .map(|p| format!("• {p}"))
                .collect::<Vec<_>>()
                .join("\n");
            return Some(format!(
                "[Offline Alert] {}: {}\n\nPrecautions:\n{}\n\n{}",
                alert.title, alert.desc, precautions, strings.disclaimer
            ));
        }
    }

    None
}
