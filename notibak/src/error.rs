use anyhow::Error;
use notifier_api::NotifierError;

/// Exit code selection: 2 for bad local input (malformed backup
/// document, token file, or unreadable files), 1 for everything else.
pub fn exit_code(err: &Error) -> i32 {
    if matches!(
        err.downcast_ref::<NotifierError>(),
        Some(NotifierError::Format { .. } | NotifierError::Io { .. })
    ) {
        return 2;
    }
    1
}
