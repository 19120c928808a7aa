/// Failures raised while turning a decoded list into a result record.
///
/// These never escape [`crate::record::Processor::process`]; they are folded
/// into an [`crate::record::ErrorRecord`] so every caller receives a
/// well-formed record. A list made only of strings never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("element at index {index} is not a string (found {kind})")]
    NonStringToken { index: usize, kind: &'static str },
}
