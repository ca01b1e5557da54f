/// Default-instance document print command.
pub mod defaults;
/// Two-file export command.
pub mod export;
/// Model summary command.
pub mod info;
/// Layout document print command.
pub mod layout;
/// Bundled demonstration model.
pub mod sample;
