use serde::Serialize;

use crate::data::age::AgeInfo;

/// One row of the immunization schedule. Each entry carries its own
/// relevance predicate so that reordering the table cannot desync the
/// age-range logic from the row it belongs to.
pub struct VaccineEntry {
    pub age: &'static str,
    pub vaccines: &'static str,
    pub info: &'static str,
    pub due: fn(&AgeInfo) -> bool,
}

impl VaccineEntry {
    pub fn is_due(&self, age: Option<&AgeInfo>) -> bool {
        match age {
            Some(age) => (self.due)(age),
            None => false,
        }
    }
}

/// Serializable projection of a schedule row for the HTTP surface.
#[derive(Debug, Serialize)]
pub struct VaccineRow {
    pub age: &'static str,
    pub vaccines: &'static str,
    pub info: &'static str,
    pub due: bool,
}

impl VaccineEntry {
    pub fn to_row(&self, age: Option<&AgeInfo>) -> VaccineRow {
        VaccineRow {
            age: self.age,
            vaccines: self.vaccines,
            info: self.info,
            due: self.is_due(age),
        }
    }
}

// Age-bracket predicates, shared by every localized table.

fn at_birth(a: &AgeInfo) -> bool {
    a.years == 0 && a.months < 1
}

fn first_week(a: &AgeInfo) -> bool {
    a.weeks < 1
}

fn six_weeks(a: &AgeInfo) -> bool {
    a.weeks >= 6 && a.weeks < 10
}

fn ten_weeks(a: &AgeInfo) -> bool {
    a.weeks >= 10 && a.weeks < 14
}

fn fourteen_weeks(a: &AgeInfo) -> bool {
    a.weeks >= 14 && a.months < 9
}

fn nine_months(a: &AgeInfo) -> bool {
    a.months >= 9 && a.months < 16
}

fn sixteen_months(a: &AgeInfo) -> bool {
    a.months >= 16 && a.years < 5
}

fn five_years(a: &AgeInfo) -> bool {
    a.years >= 5 && a.years < 10
}

fn ten_years(a: &AgeInfo) -> bool {
    a.years >= 10 && a.years < 16
}

fn sixteen_years(a: &AgeInfo) -> bool {
    a.years >= 16 && a.years < 20
}

fn never(_: &AgeInfo) -> bool {
    false
}

pub static SCHEDULE_EN: &[VaccineEntry] = &[
    VaccineEntry {
        age: "At Birth",
        vaccines: "BCG",
        info: "Protects against severe forms of childhood tuberculosis. Given once, usually before leaving the health facility.",
        due: at_birth,
    },
    VaccineEntry {
        age: "Within 1 Week",
        vaccines: "OPV-0, Hepatitis B-1",
        info: "Birth doses of oral polio vaccine and hepatitis B, most effective in the first days of life.",
        due: first_week,
    },
    VaccineEntry {
        age: "6 Weeks",
        vaccines: "Pentavalent-1, OPV-1, Rotavirus-1, PCV-1",
        info: "First round of the combined vaccine covering diphtheria, whooping cough, tetanus, hepatitis B and Hib.",
        due: six_weeks,
    },
    VaccineEntry {
        age: "10-14 Weeks",
        vaccines: "Pentavalent-2, OPV-2, Rotavirus-2",
        info: "Second round. Keep the gap of at least four weeks from the first round.",
        due: ten_weeks,
    },
    VaccineEntry {
        age: "14 Weeks",
        vaccines: "Pentavalent-3, OPV-3, Rotavirus-3, PCV-2",
        info: "Third round completes the primary series for the first year.",
        due: fourteen_weeks,
    },
    VaccineEntry {
        age: "9-12 Months",
        vaccines: "MR-1, JE-1, PCV Booster",
        info: "First measles-rubella dose plus Japanese encephalitis where endemic.",
        due: nine_months,
    },
    VaccineEntry {
        age: "16-24 Months",
        vaccines: "MR-2, DPT Booster-1, OPV Booster",
        info: "Second measles-rubella dose and the first DPT booster.",
        due: sixteen_months,
    },
    VaccineEntry {
        age: "5-6 Years",
        vaccines: "DPT Booster-2",
        info: "School-entry booster against diphtheria, whooping cough and tetanus.",
        due: five_years,
    },
    VaccineEntry {
        age: "10 Years",
        vaccines: "Td",
        info: "Tetanus and adult diphtheria dose for ten year olds.",
        due: ten_years,
    },
    VaccineEntry {
        age: "16 Years",
        vaccines: "Td Booster",
        info: "Tetanus and adult diphtheria booster for adolescents.",
        due: sixteen_years,
    },
    VaccineEntry {
        age: "Pregnancy",
        vaccines: "TD-1, TD-2",
        info: "Two tetanus-diphtheria doses during pregnancy protect mother and newborn.",
        due: never,
    },
];

pub static SCHEDULE_HI: &[VaccineEntry] = &[
    VaccineEntry {
        age: "At Birth",
        vaccines: "BCG",
        info: "बच्चों को गंभीर टीबी से बचाता है। जन्म के समय एक बार लगता है।",
        due: at_birth,
    },
    VaccineEntry {
        age: "Within 1 Week",
        vaccines: "OPV-0, Hepatitis B-1",
        info: "पोलियो और हेपेटाइटिस बी की जन्म खुराक, पहले सप्ताह में सबसे असरदार।",
        due: first_week,
    },
    VaccineEntry {
        age: "6 Weeks",
        vaccines: "Pentavalent-1, OPV-1, Rotavirus-1, PCV-1",
        info: "पांच बीमारियों से बचाने वाले संयुक्त टीके की पहली खुराक।",
        due: six_weeks,
    },
    VaccineEntry {
        age: "10-14 Weeks",
        vaccines: "Pentavalent-2, OPV-2, Rotavirus-2",
        info: "दूसरी खुराक। पहली खुराक से कम से कम चार हफ्ते का अंतर रखें।",
        due: ten_weeks,
    },
    VaccineEntry {
        age: "14 Weeks",
        vaccines: "Pentavalent-3, OPV-3, Rotavirus-3, PCV-2",
        info: "तीसरी खुराक से पहले साल की मुख्य श्रृंखला पूरी होती है।",
        due: fourteen_weeks,
    },
    VaccineEntry {
        age: "9-12 Months",
        vaccines: "MR-1, JE-1, PCV Booster",
        info: "खसरा-रूबेला की पहली खुराक।",
        due: nine_months,
    },
    VaccineEntry {
        age: "16-24 Months",
        vaccines: "MR-2, DPT Booster-1, OPV Booster",
        info: "खसरा-रूबेला की दूसरी खुराक और पहला डीपीटी बूस्टर।",
        due: sixteen_months,
    },
    VaccineEntry {
        age: "5-6 Years",
        vaccines: "DPT Booster-2",
        info: "स्कूल जाने की उम्र का बूस्टर।",
        due: five_years,
    },
    VaccineEntry {
        age: "10 Years",
        vaccines: "Td",
        info: "दस साल की उम्र में टेटनस-डिप्थीरिया की खुराक।",
        due: ten_years,
    },
    VaccineEntry {
        age: "16 Years",
        vaccines: "Td Booster",
        info: "किशोरों के लिए टेटनस-डिप्थीरिया बूस्टर।",
        due: sixteen_years,
    },
    VaccineEntry {
        age: "Pregnancy",
        vaccines: "TD-1, TD-2",
        info: "गर्भावस्था में टीडी की दो खुराकें मां और शिशु दोनों की रक्षा करती हैं।",
        due: never,
    },
];

pub static SCHEDULE_MR: &[VaccineEntry] = &[
    VaccineEntry {
        age: "At Birth",
        vaccines: "BCG",
        info: "बालकांना गंभीर क्षयरोगापासून वाचवते. जन्मावेळी एकदा दिले जाते.",
        due: at_birth,
    },
    VaccineEntry {
        age: "Within 1 Week",
        vaccines: "OPV-0, Hepatitis B-1",
        info: "पोलिओ व हिपॅटायटिस बी ची जन्म मात्रा.",
        due: first_week,
    },
    VaccineEntry {
        age: "6 Weeks",
        vaccines: "Pentavalent-1, OPV-1, Rotavirus-1, PCV-1",
        info: "संयुक्त लसीची पहिली मात्रा.",
        due: six_weeks,
    },
    VaccineEntry {
        age: "10-14 Weeks",
        vaccines: "Pentavalent-2, OPV-2, Rotavirus-2",
        info: "दुसरी मात्रा. पहिल्या मात्रेनंतर किमान चार आठवड्यांचे अंतर ठेवा.",
        due: ten_weeks,
    },
    VaccineEntry {
        age: "14 Weeks",
        vaccines: "Pentavalent-3, OPV-3, Rotavirus-3, PCV-2",
        info: "तिसऱ्या मात्रेने पहिल्या वर्षाची मुख्य मालिका पूर्ण होते.",
        due: fourteen_weeks,
    },
    VaccineEntry {
        age: "9-12 Months",
        vaccines: "MR-1, JE-1, PCV Booster",
        info: "गोवर-रुबेला ची पहिली मात्रा.",
        due: nine_months,
    },
    VaccineEntry {
        age: "16-24 Months",
        vaccines: "MR-2, DPT Booster-1, OPV Booster",
        info: "गोवर-रुबेला ची दुसरी मात्रा व पहिला डीपीटी बूस्टर.",
        due: sixteen_months,
    },
    VaccineEntry {
        age: "5-6 Years",
        vaccines: "DPT Booster-2",
        info: "शाळेत जाण्याच्या वयाचा बूस्टर.",
        due: five_years,
    },
    VaccineEntry {
        age: "10 Years",
        vaccines: "Td",
        info: "दहाव्या वर्षी टिटॅनस-घटसर्प मात्रा.",
        due: ten_years,
    },
    VaccineEntry {
        age: "16 Years",
        vaccines: "Td Booster",
        info: "किशोरवयीन मुलांसाठी टिटॅनस-घटसर्प बूस्टर.",
        due: sixteen_years,
    },
    VaccineEntry {
        age: "Pregnancy",
        vaccines: "TD-1, TD-2",
        info: "गरोदरपणात टीडी च्या दोन मात्रा आई व बाळ दोघांचे रक्षण करतात.",
        due: never,
    },
];

pub static SCHEDULE_BN: &[VaccineEntry] = &[
    VaccineEntry {
        age: "At Birth",
        vaccines: "BCG",
        info: "শিশুদের গুরুতর যক্ষ্মা থেকে রক্ষা করে। জন্মের সময় একবার দেওয়া হয়।",
        due: at_birth,
    },
    VaccineEntry {
        age: "Within 1 Week",
        vaccines: "OPV-0, Hepatitis B-1",
        info: "পোলিও ও হেপাটাইটিস বি-র জন্ম ডোজ।",
        due: first_week,
    },
    VaccineEntry {
        age: "6 Weeks",
        vaccines: "Pentavalent-1, OPV-1, Rotavirus-1, PCV-1",
        info: "সম্মিলিত টিকার প্রথম ডোজ।",
        due: six_weeks,
    },
    VaccineEntry {
        age: "10-14 Weeks",
        vaccines: "Pentavalent-2, OPV-2, Rotavirus-2",
        info: "দ্বিতীয় ডোজ। প্রথম ডোজ থেকে অন্তত চার সপ্তাহের ব্যবধান রাখুন।",
        due: ten_weeks,
    },
    VaccineEntry {
        age: "14 Weeks",
        vaccines: "Pentavalent-3, OPV-3, Rotavirus-3, PCV-2",
        info: "তৃতীয় ডোজে প্রথম বছরের মূল সিরিজ সম্পূর্ণ হয়।",
        due: fourteen_weeks,
    },
    VaccineEntry {
        age: "9-12 Months",
        vaccines: "MR-1, JE-1, PCV Booster",
        info: "হাম-রুবেলার প্রথম ডোজ।",
        due: nine_months,
    },
    VaccineEntry {
        age: "16-24 Months",
        vaccines: "MR-2, DPT Booster-1, OPV Booster",
        info: "হাম-রুবেলার দ্বিতীয় ডোজ ও প্রথম ডিপিটি বুস্টার।",
        due: sixteen_months,
    },
    VaccineEntry {
        age: "5-6 Years",
        vaccines: "DPT Booster-2",
        info: "স্কুলে ভর্তির বয়সের বুস্টার।",
        due: five_years,
    },
    VaccineEntry {
        age: "10 Years",
        vaccines: "Td",
        info: "দশ বছর বয়সে টিটেনাস-ডিপথেরিয়া ডোজ।",
        due: ten_years,
    },
    VaccineEntry {
        age: "16 Years",
        vaccines: "Td Booster",
        info: "কিশোরদের জন্য টিটেনাস-ডিপথেরিয়া বুস্টার।",
        due: sixteen_years,
    },
    VaccineEntry {
        age: "Pregnancy",
        vaccines: "TD-1, TD-2",
        info: "গর্ভাবস্থায় টিডি-র দুটি ডোজ মা ও নবজাতক দুজনকেই রক্ষা করে।",
        due: never,
    },
];

pub static SCHEDULE_TE: &[VaccineEntry] = &[
    VaccineEntry {
        age: "At Birth",
        vaccines: "BCG",
        info: "పిల్లలను తీవ్రమైన క్షయ నుండి కాపాడుతుంది. పుట్టినప్పుడు ఒకసారి ఇస్తారు.",
        due: at_birth,
    },
    VaccineEntry {
        age: "Within 1 Week",
        vaccines: "OPV-0, Hepatitis B-1",
        info: "పోలియో మరియు హెపటైటిస్ బి జన్మ మోతాదు.",
        due: first_week,
    },
    VaccineEntry {
        age: "6 Weeks",
        vaccines: "Pentavalent-1, OPV-1, Rotavirus-1, PCV-1",
        info: "సంయుక్త టీకా మొదటి మోతాదు.",
        due: six_weeks,
    },
    VaccineEntry {
        age: "10-14 Weeks",
        vaccines: "Pentavalent-2, OPV-2, Rotavirus-2",
        info: "రెండవ మోతాదు. మొదటి మోతాదు నుండి కనీసం నాలుగు వారాల గడువు ఉంచండి.",
        due: ten_weeks,
    },
    VaccineEntry {
        age: "14 Weeks",
        vaccines: "Pentavalent-3, OPV-3, Rotavirus-3, PCV-2",
        info: "మూడవ మోతాదుతో మొదటి సంవత్సరపు ప్రధాన సిరీస్ పూర్తవుతుంది.",
        due: fourteen_weeks,
    },
    VaccineEntry {
        age: "9-12 Months",
        vaccines: "MR-1, JE-1, PCV Booster",
        info: "తట్టు-రుబెల్లా మొదటి మోతాదు.",
        due: nine_months,
    },
    VaccineEntry {
        age: "16-24 Months",
        vaccines: "MR-2, DPT Booster-1, OPV Booster",
        info: "తట్టు-రుబెల్లా రెండవ మోతాదు మరియు మొదటి డిపిటి బూస్టర్.",
        due: sixteen_months,
    },
    VaccineEntry {
        age: "5-6 Years",
        vaccines: "DPT Booster-2",
        info: "బడి వయసు బూస్టర్.",
        due: five_years,
    },
    VaccineEntry {
        age: "10 Years",
        vaccines: "Td",
        info: "పది సంవత్సరాల వయసులో టెటనస్-డిఫ్తీరియా మోతాదు.",
        due: ten_years,
    },
    VaccineEntry {
        age: "16 Years",
        vaccines: "Td Booster",
        info: "కౌమారదశకు టెటనస్-డిఫ్తీరియా బూస్టర్.",
        due: sixteen_years,
    },
    VaccineEntry {
        age: "Pregnancy",
        vaccines: "TD-1, TD-2",
        info: "గర్భధారణలో రెండు టిడి మోతాదులు తల్లి మరియు శిశువు ఇద్దరినీ కాపాడతాయి.",
        due: never,
    },
];
