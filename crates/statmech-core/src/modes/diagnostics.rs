#[derive(Debug, Clone)]
pub enum Diagnostic {
    /// A linear structure's two rotation-axis temperatures were expected to be
    /// degenerate but were not. Carries the retained values, in kelvin.
    DegenerateAxesDiverged { rot_temperatures: Vec<f64> },
}

pub type DiagnosticCallback<'a> = Box<dyn Fn(Diagnostic) + Send + Sync + 'a>;

#[derive(Default)]
pub struct DiagnosticReporter<'a> {
    callback: Option<DiagnosticCallback<'a>>,
}

impl<'a> DiagnosticReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: DiagnosticCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Diagnostic) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = DiagnosticReporter::new();
        reporter.report(Diagnostic::DegenerateAxesDiverged {
            rot_temperatures: vec![1.0, 2.0],
        });
    }

    #[test]
    fn reporter_forwards_events_to_the_callback() {
        let received = Mutex::new(Vec::new());
        let reporter = DiagnosticReporter::with_callback(Box::new(|event| {
            received.lock().unwrap().push(event);
        }));

        reporter.report(Diagnostic::DegenerateAxesDiverged {
            rot_temperatures: vec![3.0, 5.0],
        });

        let events = received.lock().unwrap();
        assert_eq!(events.len(), 1);
        let Diagnostic::DegenerateAxesDiverged { rot_temperatures } = &events[0];
        assert_eq!(rot_temperatures, &vec![3.0, 5.0]);
    }
}
