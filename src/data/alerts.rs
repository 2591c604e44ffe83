use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Moderate,
}

/// A regional health alert. `keywords` drives the offline lookup: any
/// keyword appearing in a user prompt resolves to this alert, in addition
/// to a plain title match.
pub struct AlertEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub severity: Severity,
    pub precautions: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

/// Serializable projection for the HTTP surface.
#[derive(Debug, Serialize)]
pub struct AlertRow {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub severity: Severity,
    pub precautions: &'static [&'static str],
}

impl AlertEntry {
    pub fn to_row(&self) -> AlertRow {
        AlertRow {
            id: self.id,
            title: self.title,
            desc: self.desc,
            severity: self.severity,
            precautions: self.precautions,
        }
    }
}

pub static ALERTS_EN: &[AlertEntry] = &[
    AlertEntry {
        id: "dengue",
        title: "Dengue Outbreak Alert",
        desc: "Dengue cases are rising in the district. Fever with body pain after mosquito bites needs attention.",
        severity: Severity::High,
        precautions: &[
            "Do not let water collect in pots, coolers or tyres",
            "Use mosquito nets while sleeping, also during the day",
            "Wear full-sleeve clothes in the evening",
            "Go to the health centre if high fever lasts more than 2 days",
        ],
        keywords: &["dengue", "mosquito", "machar", "platelet"],
    },
    AlertEntry {
        id: "heatwave",
        title: "Heat Wave Advisory",
        desc: "Day temperatures are unusually high. Children, elders and outdoor workers are most at risk.",
        severity: Severity::High,
        precautions: &[
            "Drink water often, even without thirst",
            "Avoid going out between 12 pm and 4 pm",
            "Cover the head with a cloth or cap outdoors",
            "Give ORS if someone feels weak or dizzy",
        ],
        keywords: &["heat", "garmi", "loo", "dehydration"],
    },
    AlertEntry {
        id: "malaria",
        title: "Seasonal Malaria Watch",
        desc: "Malaria spreads after rains. Chills and fever that come and go should be tested early.",
        severity: Severity::Moderate,
        precautions: &[
            "Sleep under insecticide-treated nets",
            "Clear stagnant water around the house",
            "Get a blood test for any fever with shivering",
            "Complete the full medicine course if diagnosed",
        ],
        keywords: &["malaria", "thandi", "bukhaar"],
    },
];

pub static ALERTS_HI: &[AlertEntry] = &[
    AlertEntry {
        id: "dengue",
        title: "Dengue Outbreak Alert",
        desc: "जिले में डेंगू के मामले बढ़ रहे हैं। मच्छर काटने के बाद बदन दर्द के साथ बुखार पर ध्यान दें।",
        severity: Severity::High,
        precautions: &[
            "गमलों, कूलर और टायरों में पानी जमा न होने दें",
            "सोते समय मच्छरदानी लगाएं, दिन में भी",
            "शाम को पूरी बांह के कपड़े पहनें",
            "2 दिन से ज्यादा तेज बुखार रहे तो स्वास्थ्य केंद्र जाएं",
        ],
        keywords: &["dengue", "mosquito", "machar", "platelet", "डेंगू", "मच्छर"],
    },
    AlertEntry {
        id: "heatwave",
        title: "Heat Wave Advisory",
        desc: "दिन का तापमान बहुत अधिक है। बच्चों, बुजुर्गों और बाहर काम करने वालों को सबसे ज्यादा खतरा है।",
        severity: Severity::High,
        precautions: &[
            "प्यास न लगे तब भी बार-बार पानी पिएं",
            "दोपहर 12 से 4 बजे तक बाहर जाने से बचें",
            "बाहर सिर को कपड़े या टोपी से ढकें",
            "कमजोरी या चक्कर आने पर ओआरएस दें",
        ],
        keywords: &["heat", "garmi", "loo", "dehydration", "गर्मी", "लू"],
    },
    AlertEntry {
        id: "malaria",
        title: "Seasonal Malaria Watch",
        desc: "बारिश के बाद मलेरिया फैलता है। बार-बार आने वाली ठंड और बुखार की जल्दी जांच कराएं।",
        severity: Severity::Moderate,
        precautions: &[
            "दवा लगी मच्छरदानी में सोएं",
            "घर के आसपास रुका पानी हटाएं",
            "कंपकंपी वाले हर बुखार की खून जांच कराएं",
            "मलेरिया निकले तो दवा का पूरा कोर्स लें",
        ],
        keywords: &["malaria", "thandi", "bukhaar", "मलेरिया", "बुखार"],
    },
];

pub static ALERTS_MR: &[AlertEntry] = &[
    AlertEntry {
        id: "dengue",
        title: "Dengue Outbreak Alert",
        desc: "जिल्ह्यात डेंग्यूचे रुग्ण वाढत आहेत. डास चावल्यानंतर अंगदुखीसह ताप आल्यास लक्ष द्या.",
        severity: Severity::High,
        precautions: &[
            "कुंड्या, कूलर व टायरमध्ये पाणी साचू देऊ नका",
            "झोपताना मच्छरदाणी वापरा, दिवसाही",
            "संध्याकाळी पूर्ण बाह्यांचे कपडे घाला",
            "2 दिवसांपेक्षा जास्त ताप राहिल्यास आरोग्य केंद्रात जा",
        ],
        keywords: &["dengue", "mosquito", "machar", "platelet", "डेंग्यू", "डास"],
    },
    AlertEntry {
        id: "heatwave",
        title: "Heat Wave Advisory",
        desc: "दिवसाचे तापमान खूप जास्त आहे. लहान मुले, वृद्ध व बाहेर काम करणाऱ्यांना सर्वाधिक धोका.",
        severity: Severity::High,
        precautions: &[
            "तहान नसली तरी वारंवार पाणी प्या",
            "दुपारी 12 ते 4 बाहेर जाणे टाळा",
            "बाहेर डोके कापडाने किंवा टोपीने झाका",
            "अशक्तपणा किंवा चक्कर आल्यास ओआरएस द्या",
        ],
        keywords: &["heat", "garmi", "loo", "dehydration", "उष्णता", "ऊन"],
    },
    AlertEntry {
        id: "malaria",
        title: "Seasonal Malaria Watch",
        desc: "पावसानंतर मलेरिया पसरतो. येणारा-जाणारा थंडी-ताप लवकर तपासून घ्या.",
        severity: Severity::Moderate,
        precautions: &[
            "औषध लावलेल्या मच्छरदाणीत झोपा",
            "घराभोवतीचे साचलेले पाणी काढा",
            "थंडी वाजून येणाऱ्या तापाची रक्त तपासणी करा",
            "मलेरिया निघाल्यास औषधांचा पूर्ण कोर्स घ्या",
        ],
        keywords: &["malaria", "thandi", "bukhaar", "मलेरिया", "हिवताप"],
    },
];

pub static ALERTS_BN: &[AlertEntry] = &[
    AlertEntry {
        id: "dengue",
        title: "Dengue Outbreak Alert",
        desc: "জেলায় ডেঙ্গু বাড়ছে। মশার কামড়ের পর গা-ব্যথাসহ জ্বরে নজর দিন।",
        severity: Severity::High,
        precautions: &[
            "টব, কুলার ও টায়ারে জল জমতে দেবেন না",
            "ঘুমানোর সময় মশারি ব্যবহার করুন, দিনের বেলাতেও",
            "সন্ধ্যায় ফুলহাতা জামা পরুন",
            "২ দিনের বেশি জ্বর থাকলে স্বাস্থ্যকেন্দ্রে যান",
        ],
        keywords: &["dengue", "mosquito", "machar", "platelet", "ডেঙ্গু", "মশা"],
    },
    AlertEntry {
        id: "heatwave",
        title: "Heat Wave Advisory",
        desc: "দিনের তাপমাত্রা অস্বাভাবিক বেশি। শিশু, বয়স্ক ও বাইরে কাজ করা মানুষের ঝুঁকি সবচেয়ে বেশি।",
        severity: Severity::High,
        precautions: &[
            "তৃষ্ণা না পেলেও বারবার জল খান",
            "দুপুর ১২টা থেকে ৪টা বাইরে যাওয়া এড়িয়ে চলুন",
            "বাইরে মাথা কাপড় বা টুপিতে ঢাকুন",
            "দুর্বল বা মাথা ঘুরলে ওআরএস দিন",
        ],
        keywords: &["heat", "garmi", "loo", "dehydration", "গরম", "তাপ"],
    },
    AlertEntry {
        id: "malaria",
        title: "Seasonal Malaria Watch",
        desc: "বৃষ্টির পর ম্যালেরিয়া ছড়ায়। কাঁপুনি দিয়ে আসা-যাওয়া জ্বর তাড়াতাড়ি পরীক্ষা করান।",
        severity: Severity::Moderate,
        precautions: &[
            "ওষুধ মাখানো মশারিতে ঘুমান",
            "বাড়ির চারপাশের জমা জল সরান",
            "কাঁপুনিসহ জ্বরে রক্ত পরীক্ষা করান",
            "ম্যালেরিয়া ধরা পড়লে পুরো ওষুধের কোর্স শেষ করুন",
        ],
        keywords: &["malaria", "thandi", "bukhaar", "ম্যালেরিয়া", "জ্বর"],
    },
];

pub static ALERTS_TE: &[AlertEntry] = &[
    AlertEntry {
        id: "dengue",
        title: "Dengue Outbreak Alert",
        desc: "జిల్లాలో డెంగ్యూ కేసులు పెరుగుతున్నాయి. దోమ కాటు తర్వాత ఒళ్లు నొప్పులతో జ్వరం వస్తే గమనించండి.",
        severity: Severity::High,
        precautions: &[
            "కుండీలు, కూలర్లు, టైర్లలో నీరు నిల్వ ఉండనివ్వకండి",
            "నిద్రపోయేటప్పుడు దోమతెర వాడండి, పగటిపూట కూడా",
            "సాయంత్రం పొడవు చేతుల దుస్తులు ధరించండి",
            "2 రోజులకు మించి జ్వరం ఉంటే ఆరోగ్య కేంద్రానికి వెళ్లండి",
        ],
        keywords: &["dengue", "mosquito", "machar", "platelet", "డెంగ్యూ", "దోమ"],
    },
    AlertEntry {
        id: "heatwave",
        title: "Heat Wave Advisory",
        desc: "పగటి ఉష్ణోగ్రతలు చాలా ఎక్కువగా ఉన్నాయి. పిల్లలు, వృద్ధులు, బయట పనిచేసేవారికి ప్రమాదం ఎక్కువ.",
        severity: Severity::High,
        precautions: &[
            "దాహం లేకపోయినా తరచూ నీరు తాగండి",
            "మధ్యాహ్నం 12 నుండి 4 వరకు బయటకు వెళ్లకండి",
            "బయట తలను గుడ్డతో లేదా టోపీతో కప్పుకోండి",
            "నీరసం లేదా తల తిరిగితే ఓఆర్ఎస్ ఇవ్వండి",
        ],
        keywords: &["heat", "garmi", "loo", "dehydration", "ఎండ", "వేడి"],
    },
    AlertEntry {
        id: "malaria",
        title: "Seasonal Malaria Watch",
        desc: "వర్షాల తర్వాత మలేరియా వ్యాపిస్తుంది. వచ్చి పోయే చలి జ్వరాన్ని త్వరగా పరీక్షించుకోండి.",
        severity: Severity::Moderate,
        precautions: &[
            "మందు పూసిన దోమతెరలో నిద్రించండి",
            "ఇంటి చుట్టూ నిల్వ నీటిని తొలగించండి",
            "వణుకుతో వచ్చే ప్రతి జ్వరానికి రక్త పరీక్ష చేయించండి",
            "మలేరియా నిర్ధారణ అయితే పూర్తి మందుల కోర్సు వాడండి",
        ],
        keywords: &["malaria", "thandi", "bukhaar", "మలేరియా", "జ్వరం"],
    },
];
