use std::path::Path;

use lodestar_core::Result;

/// Loads a located source file into the host runtime.
///
/// The resolution core only derives candidate paths; what "loading" means
/// (evaluating a script, mapping a library, feeding an interpreter) is
/// implemented behind this trait by the embedder.
pub trait SourceLoader {
    fn load_source(&mut self, path: &Path) -> Result<()>;
}
