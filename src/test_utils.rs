//! Test utilities shared across modules.

use std::io::{self, Write};
use std::sync::Mutex;

/// Mutex to serialize tests that set or remove environment variables.
///
/// ```ignore
/// use crate::test_utils::ENV_MUTEX;
///
/// #[test]
/// fn test_that_sets_env() {
///     let _lock = ENV_MUTEX.lock().unwrap();
///     // ... test code that reads or changes the environment ...
/// }
/// ```
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// A sink whose every write and flush fails.
#[derive(Debug, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_mutex_can_be_acquired_multiple_times_sequentially() {
        {
            let _lock = ENV_MUTEX.lock().unwrap();
        }
        {
            let _lock = ENV_MUTEX.lock().unwrap();
        }
    }

    #[test]
    fn test_failing_writer_fails() {
        let mut writer = FailingWriter;
        assert!(writer.write_all(b"x").is_err());
        assert!(writer.flush().is_err());
    }
}
