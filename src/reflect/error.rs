use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ReflectError>;

/// Errors produced while exporting a reflection model.
#[derive(Debug, Error)]
pub enum ReflectError {
	/// Filesystem IO failure while writing export output.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Requested output directory does not exist.
	#[error("output directory does not exist: {path}")]
	OutputDirMissing {
		/// Directory that failed the existence check.
		path: PathBuf,
	},
	/// A class in the model has no canonical default instance.
	#[error("no default instance for class {module}.{class}")]
	MissingDefaultInstance {
		/// Module holding the class.
		module: String,
		/// Class missing its default instance.
		class: String,
	},
	/// An instance handle does not resolve in this model.
	#[error("instance handle does not belong to this model")]
	InstanceNotFound,
	/// An instance names a class that is not present in the model.
	#[error("class not found: {module}.{class}")]
	ClassNotFound {
		/// Module named by the instance's class reference.
		module: String,
		/// Class named by the instance's class reference.
		class: String,
	},
	/// The structured sub-serializer failed to round-trip a payload.
	#[error("opaque serialization failed for {what}: {reason}")]
	OpaqueSerialization {
		/// Payload description for diagnostics.
		what: String,
		/// Underlying serializer message.
		reason: String,
	},
}
