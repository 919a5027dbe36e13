//! Scoped method logging
//!
//! `ExecutionLogger::scope` starts a method and returns a guard that ends
//! it when dropped, so early returns and `?` still close the bracket. The
//! guard derefs to the logger, so nested scopes and steps go through it:
//!
//! ```
//! use execlog_core::ExecutionLogger;
//!
//! let mut logger = ExecutionLogger::new("app");
//! {
//!     let mut outer = logger.scope("Outer");
//!     outer.log_method_step("working").unwrap();
//!     let _inner = outer.scope("Inner");
//! }
//! assert_eq!(logger.nesting_level(), 0);
//! assert_eq!(logger.get_log().lines().count(), 5);
//! ```

use std::ops::{Deref, DerefMut};

use crate::logger::ExecutionLogger;
use crate::model::ExecutionInfo;

/// Guard ending a started method on drop
///
/// The guard only ends its own frame: if that frame is no longer on top of
/// the stack (ended or cleared through the guard, or covered by a frame
/// started after a clear), dropping does nothing.
#[must_use = "dropping the scope immediately ends the method"]
pub struct MethodScope<'a> {
    logger: &'a mut ExecutionLogger,
    frame_id: Option<u64>,
    finished: bool,
}

impl ExecutionLogger {
    /// Start `method_identity` and end it when the returned guard drops
    pub fn scope(&mut self, method_identity: impl Into<String>) -> MethodScope<'_> {
        self.start_method(method_identity);
        let frame_id = self.top_frame_id();
        MethodScope {
            logger: self,
            frame_id,
            finished: false,
        }
    }
}

impl MethodScope<'_> {
    /// End the method now and hand back its record
    pub fn finish(mut self) -> Option<ExecutionInfo> {
        self.finished = true;
        self.end_own_frame()
    }

    fn end_own_frame(&mut self) -> Option<ExecutionInfo> {
        let top = self.logger.top_frame_id();
        if top.is_none() || top != self.frame_id {
            tracing::debug!(
                component = module_path!(),
                logger = self.logger.name(),
                depth = self.logger.nesting_level() as u64,
                current = self.logger.current_method().unwrap_or_default(),
                "scope frame no longer on top, not ending"
            );
            return None;
        }
        self.logger.end_method()
    }
}

impl Deref for MethodScope<'_> {
    type Target = ExecutionLogger;

    fn deref(&self) -> &Self::Target {
        self.logger
    }
}

impl DerefMut for MethodScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.logger
    }
}

impl Drop for MethodScope<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.end_own_frame();
        }
    }
}
