//! Shared ONNX Runtime plumbing: one process-wide environment, per-thread
//! session cache keyed by model path.
//!
//! Sessions are not `Sync`, so each thread loads its own. The first call on
//! any thread pays the load cost; later calls reuse the cached session. Both
//! the backbone and the scoring network go through [`run_model`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use once_cell::sync::OnceCell;
use onnxruntime::environment::Environment;
use onnxruntime::ndarray::ArrayD;
use onnxruntime::session::Session;
use tracing::debug;

use crate::error::EmbeddingError;

static ORT_ENV: OnceCell<Environment> = OnceCell::new();

thread_local! {
    static SESSION_CACHE: RefCell<HashMap<PathBuf, Rc<CachedSession>>> =
        RefCell::new(HashMap::new());
}

struct CachedSession {
    session: RefCell<Session<'static>>,
}

impl CachedSession {
    fn load(path: &Path) -> Result<Self, EmbeddingError> {
        debug!(path = %path.display(), "loading onnx session for this thread");
        let env = ort_environment()?;
        let session = env
            .new_session_builder()
            .map_err(|e| EmbeddingError::Inference(e.to_string()))?
            .with_model_from_file(path.to_path_buf())
            .map_err(|e| EmbeddingError::Inference(e.to_string()))?;
        Ok(Self {
            session: RefCell::new(session),
        })
    }
}

fn get_or_load(path: &Path) -> Result<Rc<CachedSession>, EmbeddingError> {
    SESSION_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if let Some(handle) = cache.get(path) {
            return Ok(handle.clone());
        }
        let handle = Rc::new(CachedSession::load(path)?);
        cache.insert(path.to_path_buf(), handle.clone());
        Ok(handle)
    })
}

fn ort_environment() -> Result<&'static Environment, EmbeddingError> {
    ORT_ENV.get_or_try_init(|| {
        Environment::builder()
            .with_name("adorn")
            .build()
            .map_err(|e| EmbeddingError::Inference(e.to_string()))
    })
}

/// Run a single-input f32 model and return the flattened first output.
pub fn run_model(path: &Path, input: ArrayD<f32>) -> Result<Vec<f32>, EmbeddingError> {
    let handle = get_or_load(path)?;
    let mut session = handle.session.borrow_mut();
    let outputs = session
        .run::<f32, f32, _>(vec![input])
        .map_err(|e| EmbeddingError::Inference(e.to_string()))?;
    let first = outputs
        .into_iter()
        .next()
        .ok_or_else(|| EmbeddingError::Inference("model returned no outputs".into()))?;
    Ok(first.iter().copied().collect())
}
