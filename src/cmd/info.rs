use reflectdoc::reflect::{Module, Result};

use crate::cmd::sample;

/// Print high-level model statistics.
pub fn run() -> Result<()> {
	let model = sample::demo_model();

	let class_count: usize = model.modules.iter().map(|module| module.classes().count()).sum();
	let struct_count: usize = model.modules.iter().map(|module| module.structs().count()).sum();
	let enum_count: usize = model.modules.iter().map(|module| module.enums().count()).sum();

	println!("modules: {}", model.modules.len());
	println!("classes: {class_count}");
	println!("structs: {struct_count}");
	println!("enums: {enum_count}");
	println!("instances: {}", model.instance_count());

	let mut modules: Vec<&Module> = model.modules.iter().collect();
	modules.sort_by(|left, right| left.name.cmp(&right.name));
	for module in modules {
		println!(
			"  {}: {} classes, {} structs, {} enums",
			module.name,
			module.classes().count(),
			module.structs().count(),
			module.enums().count()
		);
	}

	Ok(())
}
