use thiserror::Error;

/// Failures the profile farm view can run into. None of them is fatal: each
/// one is rendered as an affordance the user can act on (retry, dismiss).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileFarmsError {
    /// The farm tree could not be fetched for the current identity.
    #[error("No se pudieron cargar los campos: {0}")]
    Retrieval(String),

    /// The remote delete did not take effect.
    #[error("No se pudo eliminar el campo: {0}")]
    Deletion(String),

    /// A tab selection pointed past the end of the loaded tree and was clamped.
    #[error("Selección fuera de rango: {what} {index} (hay {len})")]
    InconsistentSelection {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
