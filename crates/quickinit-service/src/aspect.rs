//! Operation logging around service calls.
//!
//! [`LogAspect::around`] wraps a service call: arguments are dumped field by
//! field before the call, the return value and the operation's
//! [`LogRecord`] tag after a successful return, and the method name with
//! the error message after a failure. A closing line is logged either way.
//! The call's outcome is returned untouched.

use std::fmt::Debug;
use std::future::Future;

use tracing::{error, info};

use quickinit_core::result::AppResult;
use quickinit_core::traits::Loggable;

/// Classification tag attached to a logged operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord {
    /// Operation category, e.g. `"create"`.
    pub kind: &'static str,
    /// Free-form value, usually the entity name. May be empty.
    pub value: &'static str,
}

impl LogRecord {
    /// A tag with both parts set.
    pub const fn new(kind: &'static str, value: &'static str) -> Self {
        Self { kind, value }
    }

    /// A tag with an empty value.
    pub const fn kind(kind: &'static str) -> Self {
        Self { kind, value: "" }
    }
}

/// Logs around the operations of one service.
#[derive(Debug, Clone, Copy)]
pub struct LogAspect {
    service: &'static str,
}

impl LogAspect {
    /// An aspect for the service named `service`.
    pub const fn new(service: &'static str) -> Self {
        Self { service }
    }

    /// Name of the service this aspect logs for.
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Run `call`, logging `args` before it and its outcome after it.
    pub async fn around<T, F>(
        &self,
        method: &'static str,
        args: &[&dyn Loggable],
        record: Option<LogRecord>,
        call: F,
    ) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
        T: Debug,
    {
        self.before(method, args);
        let outcome = match call.await {
            Ok(result) => {
                self.after_returning(method, &result, record);
                Ok(result)
            }
            Err(e) => {
                error!(
                    service = self.service,
                    method,
                    kind = %e.kind,
                    "Method {method} threw exception: {}",
                    e.message
                );
                Err(e)
            }
        };
        info!(service = self.service, method, "After method: {method}");
        outcome
    }

    fn before(&self, method: &'static str, args: &[&dyn Loggable]) {
        info!(service = self.service, method, "Before method: {method}");
        for (index, arg) in args.iter().enumerate() {
            let fields = arg.to_log_fields();
            info!(
                service = self.service,
                method,
                "args[{index}] = {} {{{fields}}}",
                arg.type_label()
            );
            for (name, value) in fields.iter() {
                info!(service = self.service, method, "{name} = {value}");
            }
        }
    }

    fn after_returning<T: Debug>(&self, method: &'static str, result: &T, record: Option<LogRecord>) {
        info!(service = self.service, method, "result = {result:?}");
        if let Some(record) = record {
            info!(
                service = self.service,
                method,
                "type = {}, value = {}",
                record.kind,
                record.value
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use quickinit_core::error::AppError;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::registry::Registry;

    use super::*;

    /// Collects event messages in emission order.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<String>>>);

    impl Capture {
        fn push(&self, line: impl Into<String>) {
            self.0.lock().unwrap().push(line.into());
        }

        fn lines(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.push(visitor.0);
        }
    }

    const ASPECT: LogAspect = LogAspect::new("article");

    #[tokio::test]
    async fn test_before_log_precedes_call_and_tag_follows_it() {
        let capture = Capture::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(capture.clone()));

        let id = 7i64;
        let marker = capture.clone();
        let result = ASPECT
            .around(
                "get_by_id",
                &[&id as &dyn Loggable],
                Some(LogRecord::new("read", "article")),
                async move {
                    marker.push("call");
                    Ok::<_, AppError>("found")
                },
            )
            .await;

        assert_eq!(result.unwrap(), "found");
        let lines = capture.lines();
        let call = lines.iter().position(|l| l == "call").unwrap();
        assert_eq!(lines[0], "Before method: get_by_id");
        assert!(lines[..call].iter().any(|l| l == "value = 7"));
        assert!(lines[call..].iter().any(|l| l == "result = \"found\""));
        let tag = lines.iter().position(|l| l == "type = read, value = article").unwrap();
        assert!(tag > call);
        assert_eq!(lines.last().unwrap(), "After method: get_by_id");
    }

    #[tokio::test]
    async fn test_error_is_returned_unchanged_without_tag() {
        let capture = Capture::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(capture.clone()));

        let original = AppError::business(4001, "article archived");
        let result: AppResult<()> = ASPECT
            .around(
                "delete",
                &[],
                Some(LogRecord::kind("delete")),
                async { Err(AppError::business(4001, "article archived")) },
            )
            .await;

        assert_eq!(result.unwrap_err(), original);
        let lines = capture.lines();
        assert!(lines.iter().any(|l| l == "Method delete threw exception: article archived"));
        assert!(!lines.iter().any(|l| l.starts_with("type = ")));
        assert_eq!(lines.last().unwrap(), "After method: delete");
    }
}
