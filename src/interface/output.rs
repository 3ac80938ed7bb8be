use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Verbose,
}

/// Level-gated console output.
///
/// Errors and warnings go to stderr, everything else to stdout. Verbose
/// messages are suppressed unless the logger was built with `verbose` set.
#[derive(Debug, Clone)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Error | LogLevel::Warning | LogLevel::Info => true,
            LogLevel::Verbose => self.verbose,
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.should_log(level) {
            return;
        }
        match level {
            LogLevel::Error => eprintln!("error: {}", message),
            LogLevel::Warning => eprintln!("warning: {}", message),
            LogLevel::Info | LogLevel::Verbose => println!("{}", message),
        }
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Step-based progress display for the CLI.
///
/// In verbose mode each step is logged as a plain line; otherwise a single
/// spinner is updated in place and cleared when the run finishes.
pub struct ProgressReporter {
    logger: Logger,
    progress_bar: Option<ProgressBar>,
    current_step: usize,
    total_steps: usize,
    step_name: String,
}

impl ProgressReporter {
    pub fn new(logger: Logger, total_steps: usize) -> Self {
        let progress_bar = if !logger.is_verbose() {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {msg}")
                    .unwrap()
                    .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        Self {
            logger,
            progress_bar,
            current_step: 0,
            total_steps,
            step_name: String::new(),
        }
    }

    pub fn start_step(&mut self, step_name: &str) {
        self.current_step += 1;
        self.step_name = step_name.to_string();

        if let Some(ref pb) = self.progress_bar {
            pb.set_message(format!(
                "{} ({}/{})",
                step_name, self.current_step, self.total_steps
            ));
        } else {
            self.logger.info(&format!(
                "{} ({}/{})",
                step_name, self.current_step, self.total_steps
            ));
        }
    }

    pub fn complete_step(&mut self, message: Option<&str>) {
        if let Some(msg) = message {
            self.logger
                .verbose(&format!("{} - {}", self.step_name, msg));
        }
    }

    pub fn fail_step(&mut self, error: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
        self.logger
            .error(&format!("{} failed: {}", self.step_name, error));
    }

    pub fn finish(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
        println!("✓ {}", message);
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
    }
}
