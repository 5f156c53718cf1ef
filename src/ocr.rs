//! OCR collaborator — a black box that turns image bytes into one text block.
//!
//! The extraction pipeline never touches this module; it receives the
//! recognized text as a plain string. The real engine is Tesseract behind the
//! `ocr` cargo feature; tests (and `--no-default-features` builds of the API)
//! use [`MockOcrEngine`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Tesseract OCR initialization failed: {0}")]
    Init(String),

    #[error("OCR processing failed: {0}")]
    Processing(String),

    #[error("Tessdata not found at: {0}")]
    TessdataNotFound(std::path::PathBuf),

    #[error("No OCR engine available (built without the `ocr` feature)")]
    EngineUnavailable,
}

/// Image bytes in, recognized text block out.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError>;
}

/// Tesseract-backed engine. Holds only configuration (tessdata path and
/// language); the native Tesseract handle is created and dropped inside each
/// `recognize` call, so one value can be shared across request handlers
/// without any process-wide mutable engine state.
#[cfg(feature = "ocr")]
pub struct TesseractOcr {
    tessdata_dir: std::path::PathBuf,
    lang: String,
}

#[cfg(feature = "ocr")]
impl TesseractOcr {
    /// Initialize with a tessdata directory. English traineddata must be
    /// present.
    pub fn new(tessdata_dir: &std::path::Path) -> Result<Self, OcrError> {
        if !tessdata_dir.join("eng.traineddata").exists() {
            return Err(OcrError::TessdataNotFound(tessdata_dir.to_path_buf()));
        }
        Ok(Self {
            tessdata_dir: tessdata_dir.to_path_buf(),
            lang: "eng".to_string(),
        })
    }

    /// Set language(s) for OCR (e.g., "eng", "eng+fra")
    pub fn with_languages(mut self, langs: &str) -> Self {
        self.lang = langs.to_string();
        self
    }
}

#[cfg(feature = "ocr")]
impl OcrEngine for TesseractOcr {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        let tessdata_str = self
            .tessdata_dir
            .to_str()
            .ok_or_else(|| OcrError::Init("Invalid tessdata path".into()))?;

        // Scoped per call: init, recognize, drop.
        let tess = tesseract::Tesseract::new(Some(tessdata_str), Some(&self.lang))
            .map_err(|e| OcrError::Init(format!("{e:?}")))?;

        let mut tess = tess
            .set_image_from_mem(image_bytes)
            .map_err(|e| OcrError::Processing(format!("{e:?}")))?;

        tess.get_text()
            .map_err(|e| OcrError::Processing(format!("{e:?}")))
    }
}

/// Mock OCR engine for unit testing without Tesseract.
pub struct MockOcrEngine {
    pub text: String,
}

impl MockOcrEngine {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl OcrEngine for MockOcrEngine {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}

/// Stand-in engine for builds without the `ocr` feature; every call fails
/// with [`OcrError::EngineUnavailable`] so the API degrades loudly rather
/// than silently.
pub struct DisabledOcr;

impl OcrEngine for DisabledOcr {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        Err(OcrError::EngineUnavailable)
    }
}

/// Build the engine the server runs with: Tesseract when compiled in,
/// [`DisabledOcr`] otherwise.
pub fn default_engine(
    tessdata_dir: &std::path::Path,
) -> Result<std::sync::Arc<dyn OcrEngine>, OcrError> {
    #[cfg(feature = "ocr")]
    {
        Ok(std::sync::Arc::new(TesseractOcr::new(tessdata_dir)?))
    }
    #[cfg(not(feature = "ocr"))]
    {
        let _ = tessdata_dir;
        tracing::warn!("Built without the `ocr` feature; prescription scans will fail");
        Ok(std::sync::Arc::new(DisabledOcr))
    }
}
