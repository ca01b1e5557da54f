use std::path::PathBuf;

use reflectdoc::reflect::{DEFAULT_OBJECTS_FILE_NAME, LAYOUT_FILE_NAME, ReflectError, Result, export_documents};
use tracing::info;

use crate::cmd::sample;

/// Export both documents of the bundled model into an existing directory.
pub fn run(out_dir: PathBuf) -> Result<()> {
	if !out_dir.is_dir() {
		return Err(ReflectError::OutputDirMissing { path: out_dir });
	}

	let model = sample::demo_model();
	let documents = export_documents(&model)?;

	let layout_path = out_dir.join(LAYOUT_FILE_NAME);
	std::fs::write(&layout_path, &documents.layout)?;
	info!(path = %layout_path.display(), "layout exported");

	let defaults_path = out_dir.join(DEFAULT_OBJECTS_FILE_NAME);
	std::fs::write(&defaults_path, &documents.default_objects)?;
	info!(path = %defaults_path.display(), "default objects exported");

	println!("layout: {}", layout_path.display());
	println!("default_objects: {}", defaults_path.display());

	Ok(())
}
