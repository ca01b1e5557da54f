use reflectdoc::reflect::{Result, layout_document, write_document};

use crate::cmd::sample;

/// Print the bundled model's layout document to stdout.
pub fn run() -> Result<()> {
	let model = sample::demo_model();
	println!("{}", write_document(&layout_document(&model)));
	Ok(())
}
