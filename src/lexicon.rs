//! Spanish word tables for diary text.
//!
//! Tables are plain slices; [`Lexicon`] turns them into lookup maps once,
//! when an engine is built.

use std::collections::{HashMap, HashSet};

use crate::Emotion;

const VERY_POSITIVE: &[&str] = &[
    "excelente", "maravilloso", "maravillosa", "increíble", "fantástico", "fantástica",
    "genial", "espectacular", "extraordinario", "extraordinaria", "perfecto", "perfecta",
    "feliz", "felicidad", "encantado", "encantada", "emocionado", "emocionada", "radiante",
    "eufórico", "eufórica", "magnífico", "magnífica", "estupendo", "estupenda", "plenitud",
    "dichoso", "dichosa", "amo", "adoro",
];

const POSITIVE: &[&str] = &[
    "bien", "bueno", "buena", "bonito", "bonita", "agradable", "contento", "contenta",
    "alegre", "tranquilo", "tranquila", "agradecido", "agradecida", "satisfecho",
    "satisfecha", "orgulloso", "orgullosa", "motivado", "motivada", "relajado", "relajada",
    "sonrisa", "gracias", "amor", "esperanza", "éxito", "logro", "disfrutar", "disfruté",
    "divertido", "divertida", "paz", "cariño", "risa", "mejor", "gusta", "encanta", "calma",
    "optimista", "ilusión", "alegría", "celebrar",
];

const NEGATIVE: &[&str] = &[
    "mal", "malo", "mala", "triste", "tristeza", "cansado", "cansada", "preocupado",
    "preocupada", "aburrido", "aburrida", "estrés", "estresado", "estresada", "nervioso",
    "nerviosa", "molesto", "molesta", "difícil", "problema", "problemas", "enojado",
    "enojada", "miedo", "ansiedad", "ansioso", "ansiosa", "frustrado", "frustrada", "llorar",
    "lloré", "dolor", "peor", "decepcionado", "decepcionada", "enfermo", "enferma", "agotado",
    "agotada", "soledad", "pena", "harto", "harta",
];

const VERY_NEGATIVE: &[&str] = &[
    "terrible", "horrible", "deprimido", "deprimida", "desesperado", "desesperada", "fatal",
    "odio", "furioso", "furiosa", "devastado", "devastada", "destrozado", "destrozada",
    "desastre", "pésimo", "pésima", "angustia", "insoportable", "miserable", "horroroso",
    "horrorosa", "pánico", "aterrado", "aterrada",
];

const NEGATORS: &[&str] = &[
    "no", "nunca", "jamás", "nada", "tampoco", "ni", "sin", "nadie", "ningún", "ninguna",
    "ninguno",
];

const HIGH_INTENSIFIERS: &[&str] = &[
    "muy", "mucho", "mucha", "muchísimo", "muchísima", "bastante", "demasiado", "demasiada",
    "súper", "super", "tan", "totalmente", "realmente", "increíblemente", "extremadamente",
    "sumamente", "completamente", "absolutamente",
];

const LOW_INTENSIFIERS: &[&str] = &[
    "poco", "poca", "algo", "apenas", "ligeramente", "casi", "medio", "relativamente",
];

const JOY: &[&str] = &[
    "feliz", "felicidad", "alegre", "alegría", "contento", "contenta", "genial", "excelente",
    "risa", "sonrisa", "disfrutar", "disfruté", "divertido", "divertida", "emocionado",
    "emocionada", "maravilloso", "maravillosa", "celebrar", "agradecido", "agradecida",
    "eufórico", "eufórica", "radiante",
];

const SADNESS: &[&str] = &[
    "triste", "tristeza", "llorar", "lloré", "llanto", "deprimido", "deprimida", "soledad",
    "melancolía", "nostalgia", "decepcionado", "decepcionada", "pena", "dolor", "vacío",
    "desanimado", "desanimada", "extraño", "devastado", "devastada",
];

const ANGER: &[&str] = &[
    "enojado", "enojada", "furioso", "furiosa", "rabia", "ira", "odio", "molesto", "molesta",
    "frustrado", "frustrada", "irritado", "irritada", "harto", "harta", "indignado",
    "indignada",
];

const FEAR: &[&str] = &[
    "miedo", "ansiedad", "ansioso", "ansiosa", "nervioso", "nerviosa", "preocupado",
    "preocupada", "pánico", "aterrado", "aterrada", "temor", "angustia", "inseguro",
    "insegura", "asustado", "asustada",
];

const SURPRISE: &[&str] = &[
    "sorpresa", "sorprendido", "sorprendida", "increíble", "inesperado", "inesperada",
    "asombrado", "asombrada", "impresionado", "impresionada", "wow", "guau",
];

const LOVE: &[&str] = &[
    "amor", "amo", "adoro", "quiero", "cariño", "querido", "querida", "enamorado",
    "enamorada", "abrazo", "beso", "besos", "familia", "agradecido", "agradecida", "ternura",
];

/// Sentiment intensity bucket of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    VeryPositive,
    Positive,
    Negative,
    VeryNegative,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::VeryPositive,
        Tier::Positive,
        Tier::Negative,
        Tier::VeryNegative,
    ];

    pub fn weight(self) -> f64 {
        match self {
            Tier::VeryPositive => 2.0,
            Tier::Positive => 1.0,
            Tier::Negative => -1.0,
            Tier::VeryNegative => -2.0,
        }
    }

    fn words(self) -> &'static [&'static str] {
        match self {
            Tier::VeryPositive => VERY_POSITIVE,
            Tier::Positive => POSITIVE,
            Tier::Negative => NEGATIVE,
            Tier::VeryNegative => VERY_NEGATIVE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    High,
    Low,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    tiers: HashMap<&'static str, Tier>,
    emotions: HashMap<Emotion, HashSet<&'static str>>,
    negators: HashSet<&'static str>,
    intensifiers: HashMap<&'static str, Intensity>,
}

impl Lexicon {
    pub fn spanish() -> Self {
        let mut tiers = HashMap::new();
        for tier in Tier::ALL {
            for word in tier.words() {
                tiers.entry(*word).or_insert(tier);
            }
        }

        let emotions: HashMap<Emotion, HashSet<&'static str>> = Emotion::ALL
            .into_iter()
            .map(|emotion| (emotion, emotion_words(emotion).iter().copied().collect()))
            .collect();

        let mut intensifiers = HashMap::new();
        for word in HIGH_INTENSIFIERS {
            intensifiers.insert(*word, Intensity::High);
        }
        for word in LOW_INTENSIFIERS {
            intensifiers.entry(*word).or_insert(Intensity::Low);
        }

        Self {
            tiers,
            emotions,
            negators: NEGATORS.iter().copied().collect(),
            intensifiers,
        }
    }

    pub fn tier(&self, word: &str) -> Option<Tier> {
        self.tiers.get(word).copied()
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    pub fn intensity(&self, word: &str) -> Option<Intensity> {
        self.intensifiers.get(word).copied()
    }

    pub fn has_emotion(&self, emotion: Emotion, word: &str) -> bool {
        self.emotions
            .get(&emotion)
            .map(|words| words.contains(word))
            .unwrap_or(false)
    }

    /// Words of a tier as listed in the source table, duplicates across
    /// tiers included.
    pub fn tier_words(tier: Tier) -> &'static [&'static str] {
        tier.words()
    }

    pub fn intensifier_words(intensity: Intensity) -> &'static [&'static str] {
        match intensity {
            Intensity::High => HIGH_INTENSIFIERS,
            Intensity::Low => LOW_INTENSIFIERS,
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::spanish()
    }
}

fn emotion_words(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy => JOY,
        Emotion::Sadness => SADNESS,
        Emotion::Anger => ANGER,
        Emotion::Fear => FEAR,
        Emotion::Surprise => SURPRISE,
        Emotion::Love => LOVE,
    }
}
