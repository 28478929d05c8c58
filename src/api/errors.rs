use crate::types::errors::ReadError;

// Stable identifiers emitted in `read.result` facts.
#[allow(non_camel_case_types, reason = "error IDs are emitted verbatim in facts")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorId {
    E_NOT_FOUND,
    E_PERMISSION,
    E_IS_DIR,
    E_DECODE,
    E_INVALID_PATH,
    E_POLICY,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_NOT_FOUND => "E_NOT_FOUND",
        ErrorId::E_PERMISSION => "E_PERMISSION",
        ErrorId::E_IS_DIR => "E_IS_DIR",
        ErrorId::E_DECODE => "E_DECODE",
        ErrorId::E_INVALID_PATH => "E_INVALID_PATH",
        ErrorId::E_POLICY => "E_POLICY",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_NOT_FOUND => 10,
        ErrorId::E_PERMISSION => 20,
        ErrorId::E_IS_DIR => 30,
        ErrorId::E_DECODE => 40,
        ErrorId::E_INVALID_PATH => 50,
        ErrorId::E_POLICY => 60,
        ErrorId::E_GENERIC => 1,
    }
}

#[must_use]
pub fn exit_code_for_id_str(s: &str) -> Option<i32> {
    let id = match s {
        "E_NOT_FOUND" => ErrorId::E_NOT_FOUND,
        "E_PERMISSION" => ErrorId::E_PERMISSION,
        "E_IS_DIR" => ErrorId::E_IS_DIR,
        "E_DECODE" => ErrorId::E_DECODE,
        "E_INVALID_PATH" => ErrorId::E_INVALID_PATH,
        "E_POLICY" => ErrorId::E_POLICY,
        "E_GENERIC" => ErrorId::E_GENERIC,
        _ => return None,
    };
    Some(exit_code_for(id))
}

impl ReadError {
    /// Stable identifier for this failure.
    #[must_use]
    pub const fn id(&self) -> ErrorId {
        match self {
            ReadError::NotFound(_) => ErrorId::E_NOT_FOUND,
            ReadError::PermissionDenied(_) => ErrorId::E_PERMISSION,
            ReadError::IsDirectory(_) => ErrorId::E_IS_DIR,
            ReadError::Decode(_) => ErrorId::E_DECODE,
            ReadError::InvalidPath(_) => ErrorId::E_INVALID_PATH,
            ReadError::Escape { .. } | ReadError::Policy(_) => ErrorId::E_POLICY,
            ReadError::Io { .. } => ErrorId::E_GENERIC,
        }
    }
}
