//! Severity-named logger factories.

use crate::context::Context;
use crate::logger::init::Logging;
use crate::logger::value::Logger;
use crate::severity::Severity;

impl Logging {
    /// Logger at `severity` for the invocation described by `ctx`.
    pub fn logger<'a>(&'a self, ctx: Option<&'a Context>, severity: Severity) -> Logger<'a> {
        Logger::new(self, severity, ctx.and_then(Context::execution_id))
    }

    /// Logger with no assigned severity level.
    pub fn default<'a>(&'a self, ctx: Option<&'a Context>) -> Logger<'a> {
        self.logger(ctx, Severity::Default)
    }

    /// Logger for debug or trace information.
    pub fn debug<'a>(&'a self, ctx: Option<&'a Context>) -> Logger<'a> {
        self.logger(ctx, Severity::Debug)
    }

    /// Logger for routine information, such as ongoing status or performance.
    pub fn info<'a>(&'a self, ctx: Option<&'a Context>) -> Logger<'a> {
        self.logger(ctx, Severity::Info)
    }

    /// Logger for normal but significant events, such as start up, shut down, or configuration.
    pub fn notice<'a>(&'a self, ctx: Option<&'a Context>) -> Logger<'a> {
        self.logger(ctx, Severity::Notice)
    }

    /// Logger for events that might cause problems.
    pub fn warning<'a>(&'a self, ctx: Option<&'a Context>) -> Logger<'a> {
        self.logger(ctx, Severity::Warning)
    }

    /// Logger for events that are likely to cause problems.
    pub fn error<'a>(&'a self, ctx: Option<&'a Context>) -> Logger<'a> {
        self.logger(ctx, Severity::Error)
    }

    /// Logger for events that cause more severe problems or brief outages.
    pub fn critical<'a>(&'a self, ctx: Option<&'a Context>) -> Logger<'a> {
        self.logger(ctx, Severity::Critical)
    }

    /// Logger for when a person must take an action immediately.
    pub fn alert<'a>(&'a self, ctx: Option<&'a Context>) -> Logger<'a> {
        self.logger(ctx, Severity::Alert)
    }

    /// Logger for when one or more systems are unusable.
    pub fn emergency<'a>(&'a self, ctx: Option<&'a Context>) -> Logger<'a> {
        self.logger(ctx, Severity::Emergency)
    }
}
