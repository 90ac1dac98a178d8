use log4rs::append::console::ConsoleAppender;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use crate::config::General;
use crate::errors::LoggingError;

/// Log file is rolled over when it reaches this size
const LOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Number of rolled over log files to keep
const LOG_FILE_COUNT: u32 = 3;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

/// Sets up log4rs with a rolling file appender and, if configured, a console appender
///
/// # Arguments
///
/// * 'general' - the general section of the configuration
pub fn setup_logger(general: &General) -> Result<Handle, LoggingError> {
    let config = build_config(general)?;
    let handle = log4rs::init_config(config)?;

    Ok(handle)
}

fn build_config(general: &General) -> Result<log4rs::Config, LoggingError> {
    let roller = FixedWindowRoller::builder()
        .build(&format!("{}.{{}}", general.log_path), LOG_FILE_COUNT)?;
    let policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(LOG_FILE_SIZE)),
        Box::new(roller),
    );
    let file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(&general.log_path, Box::new(policy))?;

    let mut builder = log4rs::Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    Ok(builder.build(root.build(general.log_level))?)
}
