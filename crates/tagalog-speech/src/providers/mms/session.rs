use super::error::{MmsError, Result};
use ndarray::Array2;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;
use std::path::Path;
use std::sync::Mutex;

/// Build an ONNX Runtime session for the VITS graph at `path`.
pub fn create_session(path: &Path, intra_threads: usize) -> Result<Session> {
    let session = Session::builder()
        .map_err(|err| MmsError::ModelLoad(err.to_string()))?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|err| MmsError::ModelLoad(err.to_string()))?
        .with_intra_threads(intra_threads)
        .map_err(|err| MmsError::ModelLoad(err.to_string()))?
        .with_inter_threads(1)
        .map_err(|err| MmsError::ModelLoad(err.to_string()))?
        .commit_from_file(path)
        .map_err(|err| MmsError::ModelLoad(err.to_string()))?;
    Ok(session)
}

/// Run the VITS graph on one sequence of token ids and return the waveform.
pub fn run_vits(
    session: &Mutex<Session>,
    input_ids: Vec<i64>,
    use_attention_mask: bool,
) -> Result<Vec<f32>> {
    let len = input_ids.len();
    let ids_tensor = Array2::from_shape_vec((1, len), input_ids)
        .map_err(|err| MmsError::Inference(err.to_string()))?;
    let ids_value =
        Value::from_array(ids_tensor).map_err(|err| MmsError::Inference(err.to_string()))?;

    let mut session = session.lock().map_err(|_| MmsError::LockPoisoned)?;
    let result = if use_attention_mask {
        let mask_value = Value::from_array(Array2::<i64>::ones((1, len)))
            .map_err(|err| MmsError::Inference(err.to_string()))?;
        session.run(ort::inputs![
            "input_ids" => ids_value,
            "attention_mask" => mask_value
        ])
    } else {
        session.run(ort::inputs!["input_ids" => ids_value])
    }
    .map_err(|err| MmsError::Inference(err.to_string()))?;

    let waveform = result
        .get("waveform")
        .ok_or_else(|| MmsError::Inference("missing output 'waveform'".to_string()))?
        .try_extract_tensor::<f32>()
        .map_err(|err| MmsError::Inference(err.to_string()))?;

    Ok(waveform.1.to_vec())
}
