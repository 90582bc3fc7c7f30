//! End-to-end checks against model artifacts written to a temp directory.

use std::path::Path;
use std::sync::Arc;

use medscreen::adapters::ArtifactError;
use medscreen::application::{ModelRegistry, Predictor};
use medscreen::ports::ClassifierError;
use medscreen::tui::{Session, SubmissionOutcome};
use medscreen::{fields_for, Disease, InputValues, MedscreenError};
use tempfile::tempdir;

fn names(disease: Disease) -> String {
    fields_for(disease)
        .iter()
        .map(|f| format!("\"{}\"", f.key))
        .collect::<Vec<_>>()
        .join(",")
}

/// Linear model that only looks at one column: positive when x[col] > cut.
fn linear_on(disease: Disease, col: usize, cut: f64) -> String {
    let n = fields_for(disease).len();
    let mut coefs = vec!["0.0".to_string(); n];
    coefs[col] = "1.0".to_string();
    format!(
        r#"{{"type":"linear","feature_names":[{}],"coefficients":[{}],"intercept":{}}}"#,
        names(disease),
        coefs.join(","),
        -cut
    )
}

/// Single-stump forest splitting on column 0 at `threshold`.
fn stump_on_first(disease: Disease, threshold: f64) -> String {
    format!(
        r#"{{"type":"forest","feature_names":[{}],"trees":[{{"nodes":[
            {{"feature":0,"threshold":{threshold},"left":1,"right":2}},
            {{"value":0.1}},
            {{"value":0.9}}]}}]}}"#,
        names(disease)
    )
}

fn write_models(dir: &Path) {
    let artifacts = [
        (Disease::Diabetes, linear_on(Disease::Diabetes, 1, 110.0)),
        (Disease::HeartDisease, stump_on_first(Disease::HeartDisease, 50.0)),
        (Disease::Parkinsons, linear_on(Disease::Parkinsons, 0, 100.0)),
        (Disease::LungCancer, stump_on_first(Disease::LungCancer, 0.5)),
        (Disease::Thyroid, linear_on(Disease::Thyroid, 3, 4.0)),
    ];
    for (disease, json) in artifacts {
        std::fs::write(dir.join(disease.artifact_file()), json).expect("write artifact");
    }
}

fn predictor(dir: &Path) -> Predictor {
    let registry = ModelRegistry::load_all(dir, false).expect("load models");
    Predictor::new(Arc::new(registry))
}

#[test]
fn diabetes_label_matches_raw_output() {
    let temp = tempdir().expect("tempdir");
    write_models(temp.path());
    let predictor = predictor(temp.path());

    let row = [2.0, 120.0, 70.0, 20.0, 79.0, 25.0, 0.5, 30.0];
    let values = InputValues::from_row(fields_for(Disease::Diabetes), &row);
    let result = predictor.predict(Disease::Diabetes, &values).expect("predict");

    assert!((result.raw_output - 1.0).abs() < f64::EPSILON);
    assert_eq!(result.label, "diabetic");
    assert_eq!(result.message(), "The person is diabetic");

    let mut low = values.clone();
    low.set("Glucose", 90.0);
    let result = predictor.predict(Disease::Diabetes, &low).expect("predict");
    assert!((result.raw_output - 0.0).abs() < f64::EPSILON);
    assert_eq!(result.label, "not diabetic");
}

#[test]
fn heart_disease_defaults_give_defined_result() {
    let temp = tempdir().expect("tempdir");
    write_models(temp.path());
    let predictor = predictor(temp.path());

    let result = predictor
        .predict(Disease::HeartDisease, &InputValues::new())
        .expect("predict");
    assert_eq!(result.outcome, 0);
    assert_eq!(result.message(), "The person does not have heart disease");
}

#[test]
fn parkinsons_short_row_fails_without_padding() {
    let temp = tempdir().expect("tempdir");
    write_models(temp.path());
    let predictor = predictor(temp.path());

    let row = vec![120.0; 21];
    let err = predictor
        .predict_row(Disease::Parkinsons, &row)
        .expect_err("21 of 22 values must fail");
    assert!(matches!(
        err,
        MedscreenError::ModelInvocation {
            disease: Disease::Parkinsons,
            source: ClassifierError::ShapeMismatch {
                expected: 22,
                got: 21
            }
        }
    ));

    // Other panels keep working after a failed submission.
    let result = predictor
        .predict(Disease::Thyroid, &InputValues::new())
        .expect("predict");
    assert_eq!(result.label, "does not have Hypo-Thyroid disease");
}

#[test]
fn deleted_artifact_is_fatal_at_startup() {
    let temp = tempdir().expect("tempdir");
    write_models(temp.path());
    std::fs::remove_file(temp.path().join("lungs_disease_model.json")).expect("remove");

    let err = ModelRegistry::load_all(temp.path(), false).expect_err("must fail");
    assert!(matches!(
        err,
        MedscreenError::StartupLoad(ArtifactError::Missing(_))
    ));
}

#[test]
fn corrupt_artifact_is_fatal_at_startup() {
    let temp = tempdir().expect("tempdir");
    write_models(temp.path());
    std::fs::write(temp.path().join("Thyroid_model.json"), "{\"type\":\"linear\"").expect("write");

    let err = ModelRegistry::load_all(temp.path(), false).expect_err("must fail");
    assert!(matches!(
        err,
        MedscreenError::StartupLoad(ArtifactError::Corrupt { .. })
    ));
}

#[test]
fn predictions_are_deterministic() {
    let temp = tempdir().expect("tempdir");
    write_models(temp.path());
    let predictor = predictor(temp.path());

    for disease in Disease::ALL {
        let row: Vec<f64> = (0..fields_for(disease).len()).map(|i| i as f64 * 7.5).collect();
        let values = InputValues::from_row(fields_for(disease), &row);
        let first = predictor.predict(disease, &values).expect("predict");
        let second = predictor.predict(disease, &values).expect("predict");
        assert_eq!(first, second);
    }
}

#[test]
fn switching_disease_resets_entered_values() {
    let temp = tempdir().expect("tempdir");
    write_models(temp.path());
    let predictor = predictor(temp.path());

    let mut session = Session::new(Disease::Diabetes);
    session.form_mut().next_field();
    for c in "200".chars() {
        session.form_mut().input_char(c);
    }

    session.select_disease(Disease::HeartDisease);
    session.select_disease(Disease::Diabetes);

    let values = session.form().collect().expect("collect");
    assert!((values.value_or_default("Glucose") - 0.0).abs() < f64::EPSILON);

    session.submit(&predictor);
    assert!(matches!(
        session.outcome(),
        Some(SubmissionOutcome::Result(r)) if r.label == "not diabetic"
    ));
}
