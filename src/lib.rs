//! 基于 fastText lid.176 模型的语言识别
//!
//! ```no_run
//! use fastlid::{FastTextModel, LangDetector};
//!
//! let model = FastTextModel::load(std::path::Path::new("lid.176.ftz"))?;
//! let mut detector = LangDetector::new(model);
//! detector.set_languages(["en", "de"]);
//! let result = detector.detect("test it and more what how can this be 中", 2, 0.0)?;
//! println!("{}", result);
//! # Ok::<(), fastlid::LidError>(())
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod langs;
pub mod logging;
pub mod model_fetch;
pub mod normalize;
pub mod oracle;
pub mod restriction;
pub mod shaper;

pub use config::LidConfig;
pub use detector::LangDetector;
pub use error::LidError;
pub use langs::{is_supported, supported_langs};
pub use normalize::{Normalizer, SpacingMethod};
pub use oracle::{FastTextModel, LanguageModel, Prediction, ALL_LABELS};
pub use restriction::LanguageRestriction;
pub use shaper::{DetectionResult, RankedPrediction};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
