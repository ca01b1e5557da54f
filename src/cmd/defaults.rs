use reflectdoc::reflect::{Result, default_objects_document, write_document};

use crate::cmd::sample;

/// Print the bundled model's default-instance document to stdout.
pub fn run() -> Result<()> {
	let model = sample::demo_model();
	println!("{}", write_document(&default_objects_document(&model)?));
	Ok(())
}
