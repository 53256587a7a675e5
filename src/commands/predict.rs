use anyhow::Result;
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::api::{DiagnosisApi, EnsembleApi, EnsemblePrediction, ImageUpload, PredictionResult};
use crate::disease::{self, DiseaseInfo};
use crate::runtime::Runtime;

use super::print_json;

#[derive(Serialize)]
struct Diagnosis<'a, P: Serialize> {
    prediction: &'a P,
    reference: Option<&'static DiseaseInfo>,
}

/// Upload an image to the backend and print the diagnosis with its reference entry.
#[tracing::instrument(skip(runtime, api, out))]
pub async fn predict<R: Runtime, A: DiagnosisApi + ?Sized, W: Write>(
    runtime: &R,
    api: &A,
    image: &Path,
    out: &mut W,
) -> Result<()> {
    let upload = ImageUpload::from_path(runtime, image)?;
    let prediction: PredictionResult = api.predict(upload).await?;

    if prediction.is_unknown() {
        info!("Classification was inconclusive for {:?}", image);
    }

    print_json(
        out,
        &Diagnosis {
            reference: disease::lookup(&prediction.class_name),
            prediction: &prediction,
        },
    )
}

/// Run the model service ensemble directly on an image.
#[tracing::instrument(skip(runtime, api, out))]
pub async fn predict_ensemble<R: Runtime, A: EnsembleApi + ?Sized, W: Write>(
    runtime: &R,
    api: &A,
    image: &Path,
    out: &mut W,
) -> Result<()> {
    let upload = ImageUpload::from_path(runtime, image)?;
    let prediction: EnsemblePrediction = api.predict(upload).await?;

    print_json(
        out,
        &Diagnosis {
            reference: disease::lookup(&prediction.picked.label),
            prediction: &prediction,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockDiagnosisApi, MockEnsembleApi, PickedVote};
    use crate::http::ApiError;
    use crate::runtime::MockRuntime;

    fn runtime_with_image() -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime.expect_read().returning(|_| Ok(vec![0xff, 0xd8]));
        runtime
    }

    #[tokio::test]
    async fn test_predict_includes_reference() {
        let runtime = runtime_with_image();
        let mut api = MockDiagnosisApi::new();
        api.expect_predict()
            .withf(|upload| upload.file_name == "leaf.jpg" && upload.mime_type == "image/jpeg")
            .times(1)
            .returning(|_| {
                Ok(PredictionResult {
                    id: 3,
                    class_name: "Potato___Late_blight".into(),
                    confidence: 0.93,
                    ..Default::default()
                })
            });

        let mut out = Vec::new();
        predict(&runtime, &api, Path::new("photos/leaf.jpg"), &mut out)
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["prediction"]["id"], 3);
        assert_eq!(json["reference"]["name"], "Potato late blight");
        assert_eq!(json["reference"]["severity"], "high");
    }

    #[tokio::test]
    async fn test_predict_unknown_class_has_no_reference() {
        let runtime = runtime_with_image();
        let mut api = MockDiagnosisApi::new();
        api.expect_predict().returning(|_| {
            Ok(PredictionResult {
                class_name: "Unknown".into(),
                ..Default::default()
            })
        });

        let mut out = Vec::new();
        predict(&runtime, &api, Path::new("leaf.jpg"), &mut out)
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(json["reference"].is_null());
    }

    #[tokio::test]
    async fn test_predict_propagates_normalized_error() {
        let runtime = runtime_with_image();
        let mut api = MockDiagnosisApi::new();
        api.expect_predict()
            .returning(|_| Err(ApiError::new("classifier error", 500)));

        let mut out = Vec::new();
        let err = predict(&runtime, &api, Path::new("leaf.jpg"), &mut out)
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ApiError>(),
            Some(&ApiError::new("classifier error", 500))
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_predict_ensemble() {
        let runtime = runtime_with_image();
        let mut api = MockEnsembleApi::new();
        api.expect_predict().returning(|_| {
            Ok(EnsemblePrediction {
                picked: PickedVote {
                    model: "ResNet50".into(),
                    label: "Apple___healthy".into(),
                    confidence: 0.98,
                },
                ..Default::default()
            })
        });

        let mut out = Vec::new();
        predict_ensemble(&runtime, &api, Path::new("apple.png"), &mut out)
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["prediction"]["picked"]["model"], "ResNet50");
        assert_eq!(json["reference"]["name"], "Healthy apple");
    }
}
