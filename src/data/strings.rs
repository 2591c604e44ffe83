use crate::data::alerts::{AlertEntry, ALERTS_BN, ALERTS_EN, ALERTS_HI, ALERTS_MR, ALERTS_TE};
use crate::data::languages::Language;
use crate::data::vaccines::{
    VaccineEntry, SCHEDULE_BN, SCHEDULE_EN, SCHEDULE_HI, SCHEDULE_MR, SCHEDULE_TE,
};

/// Localized string table plus the locale's reference data. One static
/// instance per supported language.
pub struct UiStrings {
    pub welcome: &'static str,
    pub disclaimer: &'static str,
    /// Label substituted as the prompt when the user sends only an image.
    pub report_analysis: &'static str,
    pub quick_questions: &'static [&'static str],
    pub vax_detail_prompt: &'static str,
    pub alert_detail_prompt: &'static str,
    pub vaccine_schedule: &'static [VaccineEntry],
    pub alerts: &'static [AlertEntry],
}

static STRINGS_EN: UiStrings = UiStrings {
    welcome: "Namaste! I am JeevanSathi, your health companion. Ask me about vaccines, fever, pregnancy care or any health worry.",
    disclaimer: "Consult a doctor for health issues.",
    report_analysis: "Report Analysis",
    quick_questions: &[
        "Which vaccines does my baby need?",
        "How to prevent dengue?",
        "What to eat during pregnancy?",
        "How to treat fever at home?",
    ],
    vax_detail_prompt: "Tell me more about these vaccines:",
    alert_detail_prompt: "Tell me more about this health alert:",
    vaccine_schedule: SCHEDULE_EN,
    alerts: ALERTS_EN,
};

static STRINGS_HI: UiStrings = UiStrings {
    welcome: "नमस्ते! मैं जीवनसाथी हूं, आपका स्वास्थ्य साथी। टीके, बुखार, गर्भावस्था या किसी भी स्वास्थ्य चिंता के बारे में पूछें।",
    disclaimer: "स्वास्थ्य समस्याओं के लिए डॉक्टर से सलाह लें।",
    report_analysis: "रिपोर्ट विश्लेषण",
    quick_questions: &[
        "मेरे बच्चे को कौन से टीके चाहिए?",
        "डेंगू से कैसे बचें?",
        "गर्भावस्था में क्या खाएं?",
        "घर पर बुखार का इलाज कैसे करें?",
    ],
    vax_detail_prompt: "इन टीकों के बारे में और बताएं:",
    alert_detail_prompt: "इस स्वास्थ्य चेतावनी के बारे में और बताएं:",
    vaccine_schedule: SCHEDULE_HI,
    alerts: ALERTS_HI,
};

static STRINGS_MR: UiStrings = UiStrings {
    welcome: "नमस्कार! मी जीवनसाथी, तुमचा आरोग्य सोबती. लसी, ताप, गरोदरपण किंवा कोणत्याही आरोग्य शंकेबद्दल विचारा.",
    disclaimer: "आरोग्य समस्यांसाठी डॉक्टरांचा सल्ला घ्या.",
    report_analysis: "रिपोर्ट विश्लेषण",
    quick_questions: &[
        "माझ्या बाळाला कोणत्या लसी हव्यात?",
        "डेंग्यूपासून कसे वाचावे?",
        "गरोदरपणात काय खावे?",
        "घरी तापावर उपचार कसे करावे?",
    ],
    vax_detail_prompt: "या लसींबद्दल अधिक सांगा:",
    alert_detail_prompt: "या आरोग्य सूचनेबद्दल अधिक सांगा:",
    vaccine_schedule: SCHEDULE_MR,
    alerts: ALERTS_MR,
};

static STRINGS_BN: UiStrings = UiStrings {
    welcome: "নমস্কার! আমি জীবনসাথী, আপনার স্বাস্থ্যসঙ্গী। টিকা, জ্বর, গর্ভাবস্থা বা যেকোনো স্বাস্থ্য চিন্তা নিয়ে জিজ্ঞাসা করুন।",
    disclaimer: "স্বাস্থ্য সমস্যায় ডাক্তারের পরামর্শ নিন।",
    report_analysis: "রিপোর্ট বিশ্লেষণ",
    quick_questions: &[
        "আমার শিশুর কোন টিকাগুলো দরকার?",
        "ডেঙ্গু থেকে কীভাবে বাঁচব?",
        "গর্ভাবস্থায় কী খাব?",
        "বাড়িতে জ্বরের চিকিৎসা কীভাবে করব?",
    ],
    vax_detail_prompt: "এই টিকাগুলো সম্পর্কে আরও বলুন:",
    alert_detail_prompt: "এই স্বাস্থ্য সতর্কতা সম্পর্কে আরও বলুন:",
    vaccine_schedule: SCHEDULE_BN,
    alerts: ALERTS_BN,
};

static STRINGS_TE: UiStrings = UiStrings {
    welcome: "నమస్తే! నేను జీవన్‌సాథి, మీ ఆరోగ్య తోడు. టీకాలు, జ్వరం, గర్భధారణ లేదా ఏ ఆరోగ్య సందేహం గురించైనా అడగండి.",
    disclaimer: "ఆరోగ్య సమస్యలకు వైద్యుడిని సంప్రదించండి.",
    report_analysis: "రిపోర్ట్ విశ్లేషణ",
    quick_questions: &[
        "నా బిడ్డకు ఏ టీకాలు అవసరం?",
        "డెంగ్యూ నుండి ఎలా తప్పించుకోవాలి?",
        "గర్భధారణలో ఏమి తినాలి?",
        "ఇంట్లో జ్వరానికి చికిత్స ఎలా?",
    ],
    vax_detail_prompt: "ఈ టీకాల గురించి మరింత చెప్పండి:",
    alert_detail_prompt: "ఈ ఆరోగ్య హెచ్చరిక గురించి మరింత చెప్పండి:",
    vaccine_schedule: SCHEDULE_TE,
    alerts: ALERTS_TE,
};

pub fn ui_strings(language: Language) -> &'static UiStrings {
    match language {
        Language::En => &STRINGS_EN,
        Language::Hi => &STRINGS_HI,
        Language::Mr => &STRINGS_MR,
        Language::Bn => &STRINGS_BN,
        Language::Te => &STRINGS_TE,
    }
}
