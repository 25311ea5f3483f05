//! Fallback table: symptom key → possible conditions.
//!
//! Used when the remote health-topics search is unreachable or returns
//! nothing. The table is built once at startup and shared read-only; the
//! built-in data can be swapped for a TOML file with the same layout:
//!
//! ```toml
//! [[entry]]
//! key = "fever"
//! conditions = ["Flu", "Typhoid Fever", "COVID-19", "Common Cold"]
//! ```

use crate::error::ConfigError;
use crate::types::{ConditionName, SymptomKey};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Built-in symptom data
const BUILTIN: &[(&str, &[&str])] = &[
    ("fever", &["Flu", "Typhoid Fever", "COVID-19", "Common Cold"]),
    ("cough", &["Bronchitis", "Asthma", "Common Cold", "Pneumonia"]),
    ("cold", &["Viral Infection", "Sinusitis", "Allergic Rhinitis"]),
    ("headache", &["Migraine", "Tension Headache", "Sinusitis"]),
    ("dizziness", &["Vertigo", "Low Blood Pressure", "Dehydration"]),
    ("nausea", &["Food Poisoning", "Gastritis", "Pregnancy"]),
    ("vomiting", &["Food Poisoning", "Gastroenteritis", "Migraine"]),
    ("diarrhea", &["Cholera", "Food Poisoning", "Gastroenteritis"]),
    ("constipation", &["IBS", "Low Fiber Diet", "Dehydration"]),
    ("fatigue", &["Anemia", "Thyroid Issues", "Chronic Fatigue Syndrome"]),
    ("weakness", &["Vitamin Deficiency", "Anemia", "Infection"]),
    ("chest_pain", &["Heart Attack", "Angina", "GERD"]),
    ("shortness_of_breath", &["Asthma", "Anxiety", "COPD"]),
    ("sore_throat", &["Tonsillitis", "Pharyngitis", "Viral Infection"]),
    ("runny_nose", &["Common Cold", "Allergy", "Flu"]),
    ("sneezing", &["Allergies", "Cold", "Sinusitis"]),
    ("body_ache", &["Flu", "Infection", "Vitamin Deficiency"]),
    ("joint_pain", &["Arthritis", "Gout", "Injury"]),
    ("back_pain", &["Sciatica", "Muscle Strain", "Slipped Disc"]),
    ("chest_tightness", &["Asthma", "Anxiety", "Heart Disease"]),
    ("skin_rash", &["Allergy", "Eczema", "Fungal Infection"]),
    ("itching", &["Allergy", "Eczema", "Insect Bite"]),
    ("burning_urination", &["UTI", "Kidney Infection", "STI"]),
    ("frequent_urination", &["Diabetes", "UTI", "Overactive Bladder"]),
    ("high_temperature", &["Flu", "Typhoid", "Infection"]),
    ("chills", &["Malaria", "Flu", "Infection"]),
    ("sweating", &["Hyperthyroidism", "Infection", "Anxiety"]),
    ("swollen_glands", &["Infection", "Tonsillitis", "Mononucleosis"]),
    ("nosebleed", &["Dry Nose", "Blood Pressure Issues", "Injury"]),
    ("blurred_vision", &["Diabetes", "Migraine", "Glaucoma"]),
    ("red_eyes", &["Conjunctivitis", "Allergy", "Infection"]),
    ("ear_pain", &["Ear Infection", "Wax Build-up", "Sinusitis"]),
    ("hearing_loss", &["Ear Infection", "Ageing", "Noise Damage"]),
    ("tooth_pain", &["Cavity", "Gum Infection", "Tooth Decay"]),
    ("swollen_feet", &["Kidney Disease", "Heart Failure", "Thyroid"]),
    ("rapid_heartbeat", &["Anxiety", "Arrhythmia", "Heart Disease"]),
    ("slow_heartbeat", &["Hypothyroidism", "Heart Issues"]),
    ("bad_breath", &["Dental Issues", "GERD", "Infection"]),
    ("indigestion", &["Acid Reflux", "Gastritis", "Gallbladder Issues"]),
    ("gas", &["IBS", "GERD", "Indigestion"]),
    ("acidity", &["GERD", "Ulcer", "Acid Reflux"]),
    ("weight_loss", &["Cancer", "Hyperthyroidism", "Infection"]),
    ("weight_gain", &["Hypothyroidism", "PCOS", "Overeating"]),
    ("menstrual_pain", &["Dysmenorrhea", "PCOS", "Endometriosis"]),
    ("irregular_periods", &["PCOS", "Thyroid Issues"]),
    ("hair_loss", &["Alopecia", "Vitamin Deficiency", "Thyroid"]),
    ("trembling", &["Anxiety", "Parkinson’s", "Hyperthyroidism"]),
    ("anxiety", &["Stress", "Panic Disorder"]),
    ("depression", &["Clinical Depression", "Bipolar Disorder"]),
    ("insomnia", &["Stress", "Anxiety", "Sleep Disorder"]),
    ("mood_swings", &["Hormonal Change", "Depression"]),
    ("numbness", &["Nerve Damage", "Stroke", "Diabetes"]),
    ("tingling", &["Nerve Damage", "Vitamin Deficiency"]),
    ("swelling", &["Injury", "Infection"]),
    ("dehydration", &["Heat Stroke", "Diarrhea", "Vomiting"]),
    ("sunburn", &["UV Exposure", "Skin Damage"]),
    ("dry_skin", &["Eczema", "Dehydration"]),
    ("oily_skin", &["Hormonal Issues"]),
    ("acne", &["Hormonal Changes"]),
    ("palpitations", &["Anxiety", "Arrhythmia"]),
    ("throat_pain", &["Tonsillitis", "Infection"]),
    ("allergy", &["Allergic Rhinitis"]),
    ("wheezing", &["Asthma"]),
    ("vomiting_blood", &["Ulcer", "Internal Bleeding"]),
    ("blood_in_stool", &["IBD", "Hemorrhoids"]),
    ("stomach_pain", &["Gastritis", "Appendicitis", "Ulcer"]),
    ("lower_abdomen_pain", &["UTI", "Appendicitis", "Ovarian Cyst"]),
    ("upper_abdomen_pain", &["Gallstones", "Ulcer"]),
    ("swollen_eye", &["Infection", "Allergy"]),
    ("yellow_skin", &["Jaundice"]),
    ("dark_urine", &["Liver Disease"]),
    ("light_stool", &["Gallbladder Issue"]),
    ("knee_pain", &["Arthritis", "Injury"]),
    ("burning_sensation", &["Nerve Damage"]),
];

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableEntry {
    pub key: SymptomKey,
    #[serde(default)]
    pub conditions: Vec<ConditionName>,
}

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    entry: Vec<TableEntry>,
}

/// Immutable symptom → conditions mapping, iterated in insertion order
#[derive(Debug, Clone)]
pub struct FallbackTable {
    entries: Vec<TableEntry>,
    index: HashMap<SymptomKey, usize>,
}

impl FallbackTable {
    /// Build from rows. Keys must be unique.
    pub fn from_entries(entries: Vec<TableEntry>) -> Result<Self, ConfigError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if index.insert(entry.key.clone(), pos).is_some() {
                return Err(ConfigError::DuplicateKey(entry.key.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// The table shipped with SymptoScan
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(key, conditions)| TableEntry {
                key: key.to_string(),
                conditions: conditions.iter().map(|c| c.to_string()).collect(),
            })
            .collect::<Vec<_>>();
        let index = entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.key.clone(), pos))
            .collect();
        Self { entries, index }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: TableFile = toml::from_str(content)?;
        Self::from_entries(file.entry)
    }

    /// Load a replacement table from a TOML file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        info!("Loaded fallback table from {} ({} entries)", path.display(), table.len());
        Ok(table)
    }

    pub fn get(&self, key: &str) -> Option<&[ConditionName]> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].conditions.as_slice())
    }

    pub fn entries(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::builtin()
    }
}
