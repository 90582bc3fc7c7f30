//! Field schemas: the ordered inputs each disease model was trained on.
//!
//! The position of a field in its array IS its column in the model's feature
//! vector. Models only ever see an anonymous row of numbers, so reordering an
//! entry here silently changes every prediction. Edit together with the
//! training pipeline, never on its own.

use super::Disease;

/// How a field is entered in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Numeric stepper; only digits, `.` and `-` are accepted.
    Numeric,
    /// Free text, coerced to a number on submit.
    Text,
}

/// A named, labeled input slot of a disease model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    /// Unique within one disease schema.
    pub key: &'static str,
    pub kind: FieldKind,
}

const fn numeric(label: &'static str, key: &'static str) -> FieldSpec {
    FieldSpec {
        label,
        key,
        kind: FieldKind::Numeric,
    }
}

/// Pima Indians diabetes columns.
pub const DIABETES_FIELDS: [FieldSpec; 8] = [
    numeric("Number of Pregnancies", "Pregnancies"),
    numeric("Glucose Level", "Glucose"),
    numeric("Blood Pressure", "BloodPressure"),
    numeric("Skin Thickness", "SkinThickness"),
    numeric("Insulin Level", "Insulin"),
    numeric("BMI Value", "BMI"),
    numeric("Diabetes Pedigree Function", "DiabetesPedigreeFunction"),
    numeric("Age", "Age"),
];

/// Cleveland heart disease columns.
pub const HEART_DISEASE_FIELDS: [FieldSpec; 13] = [
    numeric("Age", "age"),
    numeric("Sex (1 = Male, 0 = Female)", "sex"),
    numeric("Chest Pain Type (0-3)", "cp"),
    numeric("Resting Blood Pressure", "trestbps"),
    numeric("Serum Cholesterol", "chol"),
    numeric("Fasting Blood Sugar (1 = True, 0 = False)", "fbs"),
    numeric("Resting ECG Results (0-2)", "restecg"),
    numeric("Maximum Heart Rate", "thalach"),
    numeric("Exercise Induced Angina (1 = Yes, 0 = No)", "exang"),
    numeric("ST Depression Induced by Exercise", "oldpeak"),
    numeric("Slope of Peak Exercise ST Segment (0-2)", "slope"),
    numeric("Major Vessels Colored by Fluoroscopy (0-3)", "ca"),
    numeric("Thal (0 = Normal, 1 = Fixed Defect, 2 = Reversible Defect)", "thal"),
];

/// Oxford Parkinson's voice measurement columns.
pub const PARKINSONS_FIELDS: [FieldSpec; 22] = [
    numeric("MDVP:Fo(Hz)", "fo"),
    numeric("MDVP:Fhi(Hz)", "fhi"),
    numeric("MDVP:Flo(Hz)", "flo"),
    numeric("MDVP:Jitter(%)", "Jitter_percent"),
    numeric("MDVP:Jitter(Abs)", "Jitter_Abs"),
    numeric("MDVP:RAP", "RAP"),
    numeric("MDVP:PPQ", "PPQ"),
    numeric("Jitter:DDP", "DDP"),
    numeric("MDVP:Shimmer", "Shimmer"),
    numeric("MDVP:Shimmer(dB)", "Shimmer_dB"),
    numeric("Shimmer:APQ3", "APQ3"),
    numeric("Shimmer:APQ5", "APQ5"),
    numeric("MDVP:APQ", "APQ"),
    numeric("Shimmer:DDA", "DDA"),
    numeric("NHR", "NHR"),
    numeric("HNR", "HNR"),
    numeric("RPDE", "RPDE"),
    numeric("DFA", "DFA"),
    numeric("Spread1", "spread1"),
    numeric("Spread2", "spread2"),
    numeric("D2", "D2"),
    numeric("PPE", "PPE"),
];

/// Lung cancer survey columns.
pub const LUNG_CANCER_FIELDS: [FieldSpec; 15] = [
    numeric("Gender (1 = Male, 0 = Female)", "GENDER"),
    numeric("Age", "AGE"),
    numeric("Smoking (1 = Yes, 0 = No)", "SMOKING"),
    numeric("Yellow Fingers (1 = Yes, 0 = No)", "YELLOW_FINGERS"),
    numeric("Anxiety (1 = Yes, 0 = No)", "ANXIETY"),
    numeric("Peer Pressure (1 = Yes, 0 = No)", "PEER_PRESSURE"),
    numeric("Chronic Disease (1 = Yes, 0 = No)", "CHRONIC_DISEASE"),
    numeric("Fatigue (1 = Yes, 0 = No)", "FATIGUE"),
    numeric("Allergy (1 = Yes, 0 = No)", "ALLERGY"),
    numeric("Wheezing (1 = Yes, 0 = No)", "WHEEZING"),
    numeric("Alcohol Consuming (1 = Yes, 0 = No)", "ALCOHOL_CONSUMING"),
    numeric("Coughing (1 = Yes, 0 = No)", "COUGHING"),
    numeric("Shortness Of Breath (1 = Yes, 0 = No)", "SHORTNESS_OF_BREATH"),
    numeric("Swallowing Difficulty (1 = Yes, 0 = No)", "SWALLOWING_DIFFICULTY"),
    numeric("Chest Pain (1 = Yes, 0 = No)", "CHEST_PAIN"),
];

/// Hypothyroid screening columns.
pub const THYROID_FIELDS: [FieldSpec; 7] = [
    numeric("Age", "age"),
    numeric("Sex (1 = Male, 0 = Female)", "sex"),
    numeric("On Thyroxine (1 = Yes, 0 = No)", "on_thyroxine"),
    numeric("TSH Level", "tsh"),
    numeric("T3 Measured (1 = Yes, 0 = No)", "t3_measured"),
    numeric("T3 Level", "t3"),
    numeric("TT4 Level", "tt4"),
];

/// Ordered field list for a disease. Same input, same slice, every time.
#[must_use]
pub fn fields_for(disease: Disease) -> &'static [FieldSpec] {
    match disease {
        Disease::Diabetes => &DIABETES_FIELDS,
        Disease::HeartDisease => &HEART_DISEASE_FIELDS,
        Disease::Parkinsons => &PARKINSONS_FIELDS,
        Disease::LungCancer => &LUNG_CANCER_FIELDS,
        Disease::Thyroid => &THYROID_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schema_widths() {
        assert_eq!(fields_for(Disease::Diabetes).len(), 8);
        assert_eq!(fields_for(Disease::HeartDisease).len(), 13);
        assert_eq!(fields_for(Disease::Parkinsons).len(), 22);
        assert_eq!(fields_for(Disease::LungCancer).len(), 15);
        assert_eq!(fields_for(Disease::Thyroid).len(), 7);
    }

    #[test]
    fn test_keys_unique_within_schema() {
        for disease in Disease::ALL {
            let fields = fields_for(disease);
            let keys: HashSet<_> = fields.iter().map(|f| f.key).collect();
            assert_eq!(keys.len(), fields.len(), "duplicate key in {disease}");
        }
    }

    #[test]
    fn test_order_is_stable() {
        let diabetes: Vec<_> = fields_for(Disease::Diabetes).iter().map(|f| f.key).collect();
        assert_eq!(
            diabetes,
            [
                "Pregnancies",
                "Glucose",
                "BloodPressure",
                "SkinThickness",
                "Insulin",
                "BMI",
                "DiabetesPedigreeFunction",
                "Age"
            ]
        );
        assert_eq!(fields_for(Disease::Thyroid), fields_for(Disease::Thyroid));
    }
}
