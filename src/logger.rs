use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Leveled logger writing timestamped lines to stderr and optionally a file
///
/// Console output must be suspended while the form owns the terminal in
/// raw mode; the file sink keeps recording either way.
pub struct Logger {
    min_level: LogLevel,
    log_file: Option<Arc<Mutex<std::fs::File>>>,
    console_output: bool,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Logger {
            min_level,
            log_file: None,
            console_output: true,
        }
    }

    /// Attach an append-mode log file alongside console output
    pub fn with_file(min_level: LogLevel, file_path: &str) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;

        Ok(Logger {
            min_level,
            log_file: Some(Arc::new(Mutex::new(file))),
            console_output: true,
        })
    }

    /// Enable or disable the stderr sink (off while the form is on screen)
    pub fn set_console_output(&mut self, enabled: bool) {
        self.console_output = enabled;
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}", timestamp, level.as_str(), message);

        if self.console_output {
            eprintln!("{}", formatted);
        }

        if let Some(file) = &self.log_file {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", formatted);
            }
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LogLevel::Info)
    }
}
