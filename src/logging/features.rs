//! Feature-specific logging macros
//!
//! Each stage of evaluation logs under its own target so it can be filtered
//! independently, e.g. `RUST_LOG=pipelinr::evaluate=debug`.

/// Feature categories for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFeature {
    Normalize,
    Validate,
    Evaluate,
    Transform,
    Adapter,
}

impl LogFeature {
    pub const ALL: [LogFeature; 5] = [
        LogFeature::Normalize,
        LogFeature::Validate,
        LogFeature::Evaluate,
        LogFeature::Transform,
        LogFeature::Adapter,
    ];

    /// Get the target string for this feature
    pub fn target(&self) -> &'static str {
        match self {
            LogFeature::Normalize => "pipelinr::normalize",
            LogFeature::Validate => "pipelinr::validate",
            LogFeature::Evaluate => "pipelinr::evaluate",
            LogFeature::Transform => "pipelinr::transform",
            LogFeature::Adapter => "pipelinr::adapter",
        }
    }

    /// Short name used as the key in `LogConfig::features`
    pub fn name(&self) -> &'static str {
        match self {
            LogFeature::Normalize => "normalize",
            LogFeature::Validate => "validate",
            LogFeature::Evaluate => "evaluate",
            LogFeature::Transform => "transform",
            LogFeature::Adapter => "adapter",
        }
    }

    pub fn from_name(name: &str) -> Option<LogFeature> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

#[macro_export]
macro_rules! log_normalize_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "pipelinr::normalize", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_validate_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "pipelinr::validate", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_validate_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "pipelinr::validate", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_evaluate_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "pipelinr::evaluate", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_evaluate_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "pipelinr::evaluate", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_transform_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "pipelinr::transform", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_adapter_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "pipelinr::adapter", $($arg)*)
    };
}

/// Times one operation and logs its duration when finished
pub struct PerformanceTimer {
    start: std::time::Instant,
    feature: LogFeature,
    operation: String,
}

impl PerformanceTimer {
    pub fn new(feature: LogFeature, operation: String) -> Self {
        log::trace!(target: feature.target(), "Starting timed operation: {}", operation);
        Self {
            start: std::time::Instant::now(),
            feature,
            operation,
        }
    }

    pub fn finish(self) {
        log::debug!(
            target: self.feature.target(),
            "Operation '{}' completed in {:?}",
            self.operation,
            self.start.elapsed()
        );
    }
}
